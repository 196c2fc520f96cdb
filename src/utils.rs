use serde_json::Value;

pub const REQUIRED_STATE_KEYS: [&str; 4] = ["emotion", "intensity", "valence", "arousal"];

/// Rescales `scores` to sum to 1.0.
///
/// A sum of exactly zero yields a uniform distribution instead of dividing
/// by zero. Empty input yields empty output.
pub fn normalize_scores(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let total: f64 = scores.iter().sum();
    if total == 0.0 {
        let uniform = 1.0 / scores.len() as f64;
        return vec![uniform; scores.len()];
    }

    scores.iter().map(|score| score / total).collect()
}

/// Checks that a raw state object carries every required key. Values are not
/// inspected; range checks belong to `EmotionalState` construction.
pub fn validate_emotional_state(state: &Value) -> bool {
    state
        .as_object()
        .is_some_and(|object| REQUIRED_STATE_KEYS.iter().all(|key| object.contains_key(*key)))
}
