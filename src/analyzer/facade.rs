use crate::{
    analyzer::{noop::NeutralSignalDetector, ports::SignalDetector},
    emotion::{AffectError, Context, EmotionalState, types::resolve_model},
};

pub struct EmotionalAnalyzer {
    model: String,
    detector: Box<dyn SignalDetector>,
}

impl Default for EmotionalAnalyzer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl EmotionalAnalyzer {
    pub fn new(model: Option<&str>) -> Self {
        Self::with_detector(model, Box::new(NeutralSignalDetector))
    }

    pub fn with_detector(model: Option<&str>, detector: Box<dyn SignalDetector>) -> Self {
        Self {
            model: resolve_model(model),
            detector,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Detects observations in `text`. The result may be empty when the
    /// configured detector finds no signal; downstream comprehension treats
    /// that as the neutral case.
    pub fn analyze(&self, text: &str) -> Result<Vec<EmotionalState>, AffectError> {
        let states = self.detector.detect(text)?;
        tracing::debug!(
            target: "analyzer",
            model = %self.model,
            text_len = text.len(),
            observations = states.len(),
            "analysis_completed"
        );
        Ok(states)
    }

    pub fn analyze_with_context(
        &self,
        text: &str,
        context: &Context,
    ) -> Result<Vec<EmotionalState>, AffectError> {
        let mut states = self.analyze(text)?;
        for state in &mut states {
            state.attach_context(context.clone());
        }
        Ok(states)
    }
}
