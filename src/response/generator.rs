use serde_json::Value;

use crate::{
    emotion::{
        AffectError, ComprehensionResult, DEFAULT_TONE, GeneratedResponse, Metadata,
        types::resolve_model,
    },
    response::{ports::ResponseComposer, template::TemplateComposer, types::GenerationOptions},
};

pub struct ResponseGenerator {
    model: String,
    composer: Box<dyn ResponseComposer>,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ResponseGenerator {
    pub fn new(model: Option<&str>) -> Self {
        Self::with_composer(model, Box::new(TemplateComposer))
    }

    pub fn with_composer(model: Option<&str>, composer: Box<dyn ResponseComposer>) -> Self {
        Self {
            model: resolve_model(model),
            composer,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Builds a response for `comprehension`. A supplied prompt is used as
    /// the text verbatim; alignment is the comprehension's confidence.
    pub fn generate(
        &self,
        comprehension: &ComprehensionResult,
        options: &GenerationOptions,
    ) -> Result<GeneratedResponse, AffectError> {
        let tone = options.tone().unwrap_or(DEFAULT_TONE);
        let text = match options.prompt() {
            Some(prompt) => prompt.to_string(),
            None => self.composer.compose(comprehension, tone)?,
        };

        let mut metadata = Metadata::new();
        metadata.insert(
            "primary_emotion".to_string(),
            Value::from(comprehension.primary_emotion()),
        );
        metadata.insert(
            "confidence".to_string(),
            Value::from(comprehension.confidence()),
        );
        metadata.insert("model".to_string(), Value::from(self.model.as_str()));

        tracing::debug!(
            target: "response",
            model = %self.model,
            tone = %tone,
            prompted = options.prompt().is_some(),
            primary_emotion = %comprehension.primary_emotion(),
            "response_generated"
        );

        GeneratedResponse::new(text, comprehension.confidence(), tone, metadata)
    }

    /// Applies [`Self::generate`] to each element independently, preserving
    /// input order and length.
    pub fn generate_batch(
        &self,
        comprehensions: &[ComprehensionResult],
        options: &GenerationOptions,
    ) -> Result<Vec<GeneratedResponse>, AffectError> {
        comprehensions
            .iter()
            .map(|comprehension| self.generate(comprehension, options))
            .collect()
    }
}
