use serde_json::Value;

use crate::{
    comprehension::aggregation::{AggregationRule, StrongestSignal},
    emotion::{
        AffectError, ComprehensionResult, ConfigMap, Context, EmotionalState, Insights,
        clamp_confidence, error::internal_error, types::CONTEXT_INSIGHT_KEY,
    },
};

pub struct EmotionalComprehension {
    config: ConfigMap,
    rule: Box<dyn AggregationRule>,
}

impl Default for EmotionalComprehension {
    fn default() -> Self {
        Self::new(None)
    }
}

impl EmotionalComprehension {
    pub fn new(config: Option<ConfigMap>) -> Self {
        Self::with_rule(config, Box::new(StrongestSignal))
    }

    pub fn with_rule(config: Option<ConfigMap>, rule: Box<dyn AggregationRule>) -> Self {
        Self {
            config: config.unwrap_or_default(),
            rule,
        }
    }

    /// Settings supplied at construction, exactly as given.
    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    pub fn comprehend(
        &self,
        states: Vec<EmotionalState>,
        context: Option<&Context>,
    ) -> Result<ComprehensionResult, AffectError> {
        if states.is_empty() {
            tracing::debug!(target: "comprehension", "empty_observation_set");
            return Ok(ComprehensionResult::empty());
        }

        let primary = self.rule.select(&states).ok_or_else(|| {
            internal_error(format!(
                "aggregation rule selected nothing from {} observations",
                states.len()
            ))
        })?;
        let primary_emotion = primary.emotion().to_string();
        let confidence = clamp_confidence(primary.intensity());

        let mut insights = Insights::new();
        if let Some(context) = context.filter(|context| !context.is_empty()) {
            insights.insert(
                CONTEXT_INSIGHT_KEY.to_string(),
                Value::Object(context.clone().into_iter().collect()),
            );
        }

        tracing::debug!(
            target: "comprehension",
            observations = states.len(),
            primary_emotion = %primary_emotion,
            confidence,
            "comprehension_completed"
        );

        ComprehensionResult::new(states, primary_emotion, confidence, insights)
    }
}
