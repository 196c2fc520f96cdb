mod flow;
mod response;

use std::collections::BTreeMap;

use emo_comprehension::{ComprehensionResult, Context, EmotionalState};
use serde_json::json;

pub fn state(emotion: &str, intensity: f64) -> EmotionalState {
    EmotionalState::new(emotion, intensity, 0.1, 0.4).expect("state should be valid")
}

pub fn judgment(emotion: &str, confidence: f64) -> ComprehensionResult {
    ComprehensionResult::new(Vec::new(), emotion, confidence, BTreeMap::new())
        .expect("comprehension should be valid")
}

pub fn session_context() -> Context {
    let mut context = Context::new();
    context.insert("session".to_string(), json!("s-42"));
    context.insert("channel".to_string(), json!("chat"));
    context
}
