use emo_comprehension::{
    ComprehensionResult, GenerationOptions, ResponseGenerator,
    emotion::AffectError,
    response::ResponseComposer,
};
use serde_json::json;

use super::judgment;

struct ToneAwareComposer;

impl ResponseComposer for ToneAwareComposer {
    fn compose(
        &self,
        comprehension: &ComprehensionResult,
        tone: &str,
    ) -> Result<String, AffectError> {
        Ok(format!("[{tone}] {}", comprehension.primary_emotion()))
    }
}

#[test]
fn given_no_prompt_when_generate_then_text_derived_from_primary_emotion() {
    let generator = ResponseGenerator::default();
    let source = judgment("joy", 0.8);
    let response = generator
        .generate(&source, &GenerationOptions::default())
        .expect("generation should succeed");

    assert_eq!(response.text(), "I understand you're feeling joy.");
    assert_eq!(response.tone(), "empathetic");
    assert_eq!(response.emotional_alignment(), 0.8);
}

#[test]
fn given_prompt_when_generate_then_text_is_prompt_verbatim() {
    let generator = ResponseGenerator::default();
    let options = GenerationOptions::default().with_prompt("Take a breath, I'm here.");

    for source in [judgment("anger", 0.9), judgment("neutral", 0.0)] {
        let response = generator
            .generate(&source, &options)
            .expect("generation should succeed");
        assert_eq!(response.text(), "Take a breath, I'm here.");
        assert_eq!(response.emotional_alignment(), source.confidence());
    }
}

#[test]
fn given_blank_overrides_when_generate_then_defaults_apply() {
    let generator = ResponseGenerator::default();
    let options = GenerationOptions::default().with_prompt("").with_tone("  ");
    let response = generator
        .generate(&judgment("sadness", 0.4), &options)
        .expect("generation should succeed");

    assert_eq!(response.text(), "I understand you're feeling sadness.");
    assert_eq!(response.tone(), "empathetic");
}

#[test]
fn given_tone_when_generate_then_tone_is_used() {
    let generator = ResponseGenerator::with_composer(Some("styled"), Box::new(ToneAwareComposer));
    let response = generator
        .generate(
            &judgment("fear", 0.6),
            &GenerationOptions::default().with_tone("reassuring"),
        )
        .expect("generation should succeed");

    assert_eq!(response.tone(), "reassuring");
    assert_eq!(response.text(), "[reassuring] fear");
}

#[test]
fn given_comprehension_when_generate_then_metadata_traces_source() {
    let generator = ResponseGenerator::new(Some("gen-small"));
    let response = generator
        .generate(&judgment("relief", 0.35), &GenerationOptions::default())
        .expect("generation should succeed");

    let metadata = response.metadata();
    assert_eq!(metadata.get("primary_emotion"), Some(&json!("relief")));
    assert_eq!(metadata.get("confidence"), Some(&json!(0.35)));
    assert_eq!(metadata.get("model"), Some(&json!("gen-small")));
}

#[test]
fn given_batch_when_generate_batch_then_elements_match_single_generation_in_order() {
    let generator = ResponseGenerator::default();
    let options = GenerationOptions::default().with_tone("warm");
    let first = judgment("joy", 0.8);
    let second = judgment("grief", 0.2);

    let batch = generator
        .generate_batch(&[first.clone(), second.clone()], &options)
        .expect("batch should succeed");

    assert_eq!(batch.len(), 2);
    assert_eq!(
        batch[0],
        generator.generate(&first, &options).expect("single generation")
    );
    assert_eq!(
        batch[1],
        generator.generate(&second, &options).expect("single generation")
    );
}

#[test]
fn given_empty_batch_when_generate_batch_then_result_is_empty() {
    let generator = ResponseGenerator::default();
    let batch = generator
        .generate_batch(&[], &GenerationOptions::default())
        .expect("empty batch should succeed");
    assert!(batch.is_empty());
}
