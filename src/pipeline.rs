use serde::{Deserialize, Serialize};

use crate::{
    analyzer::EmotionalAnalyzer,
    comprehension::EmotionalComprehension,
    config::Config,
    emotion::{AffectError, ComprehensionResult, Context, EmotionalState, GeneratedResponse},
    response::{GenerationOptions, ResponseGenerator},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub comprehension: ComprehensionResult,
    pub response: GeneratedResponse,
}

impl PipelineOutput {
    pub fn states(&self) -> &[EmotionalState] {
        self.comprehension.emotional_states()
    }
}

/// Runs analysis, comprehension and generation in sequence. Holds only
/// construction-time configuration, so one instance can serve many threads.
pub struct EmotionalPipeline {
    analyzer: EmotionalAnalyzer,
    comprehension: EmotionalComprehension,
    generator: ResponseGenerator,
}

impl Default for EmotionalPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl EmotionalPipeline {
    pub fn new(
        analyzer: EmotionalAnalyzer,
        comprehension: EmotionalComprehension,
        generator: ResponseGenerator,
    ) -> Self {
        Self {
            analyzer,
            comprehension,
            generator,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            EmotionalAnalyzer::default(),
            EmotionalComprehension::default(),
            ResponseGenerator::default(),
        )
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            EmotionalAnalyzer::new(config.analyzer.model.as_deref()),
            EmotionalComprehension::with_rule(
                Some(config.comprehension.settings.clone()),
                config.comprehension.aggregation.build(),
            ),
            ResponseGenerator::new(config.response.model.as_deref()),
        )
    }

    pub fn analyzer(&self) -> &EmotionalAnalyzer {
        &self.analyzer
    }

    pub fn comprehension(&self) -> &EmotionalComprehension {
        &self.comprehension
    }

    pub fn generator(&self) -> &ResponseGenerator {
        &self.generator
    }

    pub fn process(
        &self,
        text: &str,
        context: Option<&Context>,
        options: &GenerationOptions,
    ) -> Result<PipelineOutput, AffectError> {
        let states = match context {
            Some(context) => self.analyzer.analyze_with_context(text, context)?,
            None => self.analyzer.analyze(text)?,
        };
        let comprehension = self.comprehension.comprehend(states, context)?;
        let response = self.generator.generate(&comprehension, options)?;

        tracing::debug!(
            target: "pipeline",
            primary_emotion = %comprehension.primary_emotion(),
            confidence = comprehension.confidence(),
            tone = %response.tone(),
            "pipeline_completed"
        );

        Ok(PipelineOutput {
            comprehension,
            response,
        })
    }

    /// Processes each text independently; output order matches input order.
    pub fn process_batch<T: AsRef<str>>(
        &self,
        texts: &[T],
        context: Option<&Context>,
        options: &GenerationOptions,
    ) -> Result<Vec<PipelineOutput>, AffectError> {
        texts
            .iter()
            .map(|text| self.process(text.as_ref(), context, options))
            .collect()
    }
}
