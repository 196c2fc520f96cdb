pub mod analyzer;
pub mod cli;
pub mod comprehension;
pub mod config;
pub mod emotion;
pub mod logging;
pub mod pipeline;
pub mod response;
pub mod utils;

pub use analyzer::EmotionalAnalyzer;
pub use comprehension::EmotionalComprehension;
pub use emotion::{
    AffectError, AffectErrorKind, ComprehensionResult, Context, EmotionalState, GeneratedResponse,
};
pub use pipeline::{EmotionalPipeline, PipelineOutput};
pub use response::{GenerationOptions, ResponseGenerator};
