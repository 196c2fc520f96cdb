pub mod error;
pub mod types;

pub use error::{AffectError, AffectErrorKind};
pub use types::{
    ComprehensionResult, ConfigMap, Context, DEFAULT_MODEL, DEFAULT_TONE, EmotionalState,
    GeneratedResponse, Insights, Metadata, NEUTRAL_EMOTION, clamp_confidence,
};
