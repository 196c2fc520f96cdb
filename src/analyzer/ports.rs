use crate::emotion::{AffectError, EmotionalState};

/// Maps raw text to zero or more emotion observations.
///
/// Implementations must not fail on empty input and must hold no mutable
/// state shared between calls.
pub trait SignalDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<Vec<EmotionalState>, AffectError>;
}
