pub mod aggregation;
pub mod facade;

pub use aggregation::{AggregationKind, AggregationRule, FirstObserved, StrongestSignal};
pub use facade::EmotionalComprehension;
