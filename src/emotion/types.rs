use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::emotion::error::{AffectError, invalid_value};

pub type Context = BTreeMap<String, Value>;
pub type Insights = BTreeMap<String, Value>;
pub type Metadata = BTreeMap<String, Value>;
pub type ConfigMap = BTreeMap<String, Value>;

pub const DEFAULT_MODEL: &str = "default";
pub const NEUTRAL_EMOTION: &str = "neutral";
pub const DEFAULT_TONE: &str = "empathetic";
pub const CONTEXT_INSIGHT_KEY: &str = "context";

/// Bounds a score to `[0.0, 1.0]`. NaN collapses to `0.0`.
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Resolves an optional model identifier, treating blank input as unset.
pub fn resolve_model(model: Option<&str>) -> String {
    match model.map(str::trim) {
        Some(model) if !model.is_empty() => model.to_string(),
        _ => DEFAULT_MODEL.to_string(),
    }
}

fn ensure_finite(field: &str, value: f64) -> Result<(), AffectError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid_value(format!("{field} must be a finite number, got {value}")))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
struct EmotionalStateRecord {
    #[validate(length(min = 1, message = "emotion label cannot be empty"))]
    emotion: String,
    #[validate(range(min = 0.0, max = 1.0))]
    intensity: f64,
    #[validate(range(min = -1.0, max = 1.0))]
    valence: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    arousal: f64,
    #[serde(default)]
    context: Option<Context>,
}

/// A single observed emotion signal.
///
/// Numeric fields are validated once at construction and never clamped:
/// out-of-range input is rejected. Only `context` may change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EmotionalStateRecord")]
pub struct EmotionalState {
    emotion: String,
    intensity: f64,
    valence: f64,
    arousal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<Context>,
}

impl TryFrom<EmotionalStateRecord> for EmotionalState {
    type Error = AffectError;

    fn try_from(record: EmotionalStateRecord) -> Result<Self, Self::Error> {
        ensure_finite("intensity", record.intensity)?;
        ensure_finite("valence", record.valence)?;
        ensure_finite("arousal", record.arousal)?;
        record
            .validate()
            .map_err(|errors| invalid_value(format!("invalid emotional state: {errors}")))?;

        Ok(Self {
            emotion: record.emotion,
            intensity: record.intensity,
            valence: record.valence,
            arousal: record.arousal,
            context: record.context,
        })
    }
}

impl EmotionalState {
    pub fn new(
        emotion: impl Into<String>,
        intensity: f64,
        valence: f64,
        arousal: f64,
    ) -> Result<Self, AffectError> {
        Self::try_from(EmotionalStateRecord {
            emotion: emotion.into(),
            intensity,
            valence,
            arousal,
            context: None,
        })
    }

    /// The observation emitted when nothing more specific is detected.
    pub fn neutral() -> Self {
        Self {
            emotion: NEUTRAL_EMOTION.to_string(),
            intensity: 0.5,
            valence: 0.0,
            arousal: 0.3,
            context: None,
        }
    }

    pub fn emotion(&self) -> &str {
        &self.emotion
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn valence(&self) -> f64 {
        self.valence
    }

    pub fn arousal(&self) -> f64 {
        self.arousal
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn attach_context(&mut self, context: Context) {
        self.context = Some(context);
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.attach_context(context);
        self
    }

    pub fn take_context(&mut self) -> Option<Context> {
        self.context.take()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
struct ComprehensionRecord {
    #[serde(default)]
    emotional_states: Vec<EmotionalState>,
    #[validate(length(min = 1, message = "primary emotion cannot be empty"))]
    primary_emotion: String,
    #[validate(range(min = 0.0, max = 1.0))]
    confidence: f64,
    #[serde(default)]
    insights: Insights,
}

/// Aggregate judgment over a set of observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ComprehensionRecord")]
pub struct ComprehensionResult {
    emotional_states: Vec<EmotionalState>,
    primary_emotion: String,
    confidence: f64,
    insights: Insights,
}

impl TryFrom<ComprehensionRecord> for ComprehensionResult {
    type Error = AffectError;

    fn try_from(record: ComprehensionRecord) -> Result<Self, Self::Error> {
        ensure_finite("confidence", record.confidence)?;
        record
            .validate()
            .map_err(|errors| invalid_value(format!("invalid comprehension result: {errors}")))?;

        Ok(Self {
            emotional_states: record.emotional_states,
            primary_emotion: record.primary_emotion,
            confidence: record.confidence,
            insights: record.insights,
        })
    }
}

impl ComprehensionResult {
    pub fn new(
        emotional_states: Vec<EmotionalState>,
        primary_emotion: impl Into<String>,
        confidence: f64,
        insights: Insights,
    ) -> Result<Self, AffectError> {
        Self::try_from(ComprehensionRecord {
            emotional_states,
            primary_emotion: primary_emotion.into(),
            confidence,
            insights,
        })
    }

    /// Sentinel result for an empty observation set.
    pub fn empty() -> Self {
        Self {
            emotional_states: Vec::new(),
            primary_emotion: NEUTRAL_EMOTION.to_string(),
            confidence: 0.0,
            insights: Insights::new(),
        }
    }

    pub fn emotional_states(&self) -> &[EmotionalState] {
        &self.emotional_states
    }

    pub fn primary_emotion(&self) -> &str {
        &self.primary_emotion
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn insights(&self) -> &Insights {
        &self.insights
    }

    pub fn into_states(self) -> Vec<EmotionalState> {
        self.emotional_states
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
struct GeneratedResponseRecord {
    #[validate(length(min = 1, message = "response text cannot be empty"))]
    text: String,
    #[validate(range(min = 0.0, max = 1.0))]
    emotional_alignment: f64,
    #[validate(length(min = 1, message = "tone cannot be empty"))]
    tone: String,
    #[serde(default)]
    metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeneratedResponseRecord")]
pub struct GeneratedResponse {
    text: String,
    emotional_alignment: f64,
    tone: String,
    metadata: Metadata,
}

impl TryFrom<GeneratedResponseRecord> for GeneratedResponse {
    type Error = AffectError;

    fn try_from(record: GeneratedResponseRecord) -> Result<Self, Self::Error> {
        ensure_finite("emotional_alignment", record.emotional_alignment)?;
        record
            .validate()
            .map_err(|errors| invalid_value(format!("invalid generated response: {errors}")))?;

        Ok(Self {
            text: record.text,
            emotional_alignment: record.emotional_alignment,
            tone: record.tone,
            metadata: record.metadata,
        })
    }
}

impl GeneratedResponse {
    pub fn new(
        text: impl Into<String>,
        emotional_alignment: f64,
        tone: impl Into<String>,
        metadata: Metadata,
    ) -> Result<Self, AffectError> {
        Self::try_from(GeneratedResponseRecord {
            text: text.into(),
            emotional_alignment,
            tone: tone.into(),
            metadata,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emotional_alignment(&self) -> f64 {
        self.emotional_alignment
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
