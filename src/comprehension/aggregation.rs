use serde::{Deserialize, Serialize};

use crate::emotion::EmotionalState;

/// Picks the observation that represents a non-empty set.
pub trait AggregationRule: Send + Sync {
    fn select<'a>(&self, states: &'a [EmotionalState]) -> Option<&'a EmotionalState>;
}

/// Highest intensity wins; ties go to the earliest observation.
#[derive(Debug, Clone, Default)]
pub struct StrongestSignal;

impl AggregationRule for StrongestSignal {
    fn select<'a>(&self, states: &'a [EmotionalState]) -> Option<&'a EmotionalState> {
        states.iter().fold(None::<&EmotionalState>, |best, state| match best {
            Some(current) if current.intensity() >= state.intensity() => Some(current),
            _ => Some(state),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FirstObserved;

impl AggregationRule for FirstObserved {
    fn select<'a>(&self, states: &'a [EmotionalState]) -> Option<&'a EmotionalState> {
        states.first()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationKind {
    #[default]
    StrongestSignal,
    FirstObserved,
}

impl AggregationKind {
    pub fn build(self) -> Box<dyn AggregationRule> {
        match self {
            Self::StrongestSignal => Box::new(StrongestSignal),
            Self::FirstObserved => Box::new(FirstObserved),
        }
    }
}
