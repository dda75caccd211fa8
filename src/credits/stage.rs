//! Reveal flags for the elements present on the credits slide

/// Visual state of one credits element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Pre-animation state
    Hidden,
    /// Cue has fired for this element
    Revealed,
}

/// Elements that actually exist on the credits slide, with their reveal flags
///
/// A cue targeting an element that is not on the stage is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditsStage {
    elements: Vec<(String, RevealState)>,
}

impl CreditsStage {
    /// Stage holding `keys`, all hidden
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut elements: Vec<(String, RevealState)> = Vec::new();
        for key in keys {
            let key = key.into();
            if !elements.iter().any(|(existing, _)| *existing == key) {
                elements.push((key, RevealState::Hidden));
            }
        }
        Self { elements }
    }

    /// Whether `key` is on the stage
    pub fn contains(&self, key: &str) -> bool {
        self.elements.iter().any(|(existing, _)| existing == key)
    }

    /// Reveal state of `key`, `None` when it is not on the stage
    pub fn state(&self, key: &str) -> Option<RevealState> {
        self.elements
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, state)| *state)
    }

    /// Mark `key` revealed; false when it is not on the stage
    pub fn reveal(&mut self, key: &str) -> bool {
        match self.elements.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, state)) => {
                *state = RevealState::Revealed;
                true
            }
            None => false,
        }
    }

    /// Force every element back to hidden and return their keys
    pub fn hide_all(&mut self) -> Vec<String> {
        self.elements
            .iter_mut()
            .map(|(key, state)| {
                *state = RevealState::Hidden;
                key.clone()
            })
            .collect()
    }

    /// Keys currently revealed, in stage order
    pub fn revealed(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter(|(_, state)| *state == RevealState::Revealed)
            .map(|(key, _)| key.as_str())
    }

    /// Whether nothing is revealed
    pub fn is_all_hidden(&self) -> bool {
        self.revealed().next().is_none()
    }
}
