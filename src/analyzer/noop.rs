use crate::{
    analyzer::ports::SignalDetector,
    emotion::{AffectError, EmotionalState},
};

/// Reports a single neutral observation for every input.
#[derive(Debug, Clone, Default)]
pub struct NeutralSignalDetector;

impl SignalDetector for NeutralSignalDetector {
    fn detect(&self, _text: &str) -> Result<Vec<EmotionalState>, AffectError> {
        Ok(vec![EmotionalState::neutral()])
    }
}
