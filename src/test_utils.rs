//! Shared test utilities for `deckpilot` unit tests.
//!
//! Only compiled during testing (`#[cfg(test)]`).

use std::sync::Mutex;
use tempfile::TempDir;

use crate::config::manager::HOME_ENV_VAR;

/// Serialises tests that modify `DECKPILOT_HOME`.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Create a temporary directory that is removed on drop.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard pointing `DECKPILOT_HOME` at a temp directory for one test.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` race with concurrent
/// readers. `HOME_LOCK` is held for the lifetime of the guard, so only one
/// test at a time touches the variable, and the original value is restored
/// on drop (including on panic).
pub struct HomeGuard {
    original: Option<std::ffi::OsString>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under HOME_LOCK"
)]
impl HomeGuard {
    /// Point `DECKPILOT_HOME` at `temp_dir` until the guard drops.
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = HOME_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(HOME_ENV_VAR);
        // SAFETY: HOME_LOCK serialises every writer of this variable and the
        // guard restores the previous value on drop.
        unsafe {
            std::env::set_var(HOME_ENV_VAR, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under HOME_LOCK"
)]
impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held; see `HomeGuard::new`.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(HOME_ENV_VAR, original);
            }
        } else {
            unsafe {
                std::env::remove_var(HOME_ENV_VAR);
            }
        }
    }
}

/// Drain every event currently buffered in a render channel.
pub fn drain_events(
    rx: &std::sync::mpsc::Receiver<crate::render::RenderEvent>,
) -> Vec<crate::render::RenderEvent> {
    rx.try_iter().collect()
}
