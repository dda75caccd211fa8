//! Accessibility labels for navigation controls

/// Interactive control on the presentation chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// "Previous" button
    PreviousButton,
    /// "Next" button
    NextButton,
    /// Slide indicator dot (zero-based slide index)
    Indicator(usize),
}

/// Label, role and focusability for one control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabel {
    /// Control being labelled
    pub control: ControlKind,
    /// Accessible name
    pub label: String,
    /// Accessible role
    pub role: &'static str,
    /// Whether the control joins the tab order
    pub focusable: bool,
}

/// Labels for the previous/next buttons and one indicator per slide
pub fn control_labels(total_slides: usize) -> Vec<ControlLabel> {
    let mut labels = Vec::with_capacity(total_slides + 2);
    labels.push(ControlLabel {
        control: ControlKind::PreviousButton,
        label: "Previous slide".to_string(),
        role: "button",
        focusable: true,
    });
    labels.push(ControlLabel {
        control: ControlKind::NextButton,
        label: "Next slide".to_string(),
        role: "button",
        focusable: true,
    });
    labels.extend((0..total_slides).map(|index| ControlLabel {
        control: ControlKind::Indicator(index),
        label: format!("Navigate to slide {}", index + 1),
        role: "button",
        focusable: true,
    }));
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_label_per_indicator_plus_buttons() {
        let labels = control_labels(9);
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[0].control, ControlKind::PreviousButton);
        assert_eq!(labels[1].label, "Next slide");
        assert!(labels.iter().all(|l| l.role == "button" && l.focusable));
    }

    #[test]
    fn test_indicator_labels_are_one_based() {
        let labels = control_labels(3);
        assert_eq!(labels[2].control, ControlKind::Indicator(0));
        assert_eq!(labels[2].label, "Navigate to slide 1");
        assert_eq!(labels[4].label, "Navigate to slide 3");
    }
}
