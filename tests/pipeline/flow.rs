use std::{collections::BTreeMap, thread};

use emo_comprehension::{
    EmotionalPipeline, GenerationOptions, comprehension::AggregationKind, config::Config,
};
use serde_json::json;

use super::session_context;

#[test]
fn given_default_pipeline_when_process_then_stages_compose() {
    let pipeline = EmotionalPipeline::with_defaults();
    let output = pipeline
        .process("The meeting went fine.", None, &GenerationOptions::default())
        .expect("pipeline should succeed");

    assert_eq!(output.states().len(), 1);
    assert_eq!(output.comprehension.primary_emotion(), "neutral");
    assert_eq!(output.comprehension.confidence(), 0.5);
    assert!(output.comprehension.insights().is_empty());
    assert_eq!(output.response.text(), "I understand you're feeling neutral.");
    assert_eq!(output.response.emotional_alignment(), 0.5);
    assert_eq!(output.response.tone(), "empathetic");
}

#[test]
fn given_context_when_process_then_it_reaches_states_and_insights() {
    let pipeline = EmotionalPipeline::with_defaults();
    let output = pipeline
        .process("", Some(&session_context()), &GenerationOptions::default())
        .expect("empty text should not fail");

    assert_eq!(output.states()[0].context(), Some(&session_context()));
    assert_eq!(
        output.comprehension.insights().get("context"),
        Some(&json!({"session": "s-42", "channel": "chat"}))
    );
}

#[test]
fn given_config_when_pipeline_built_then_stage_settings_applied() {
    let mut config = Config::default();
    config.analyzer.model = Some("lexicon".to_string());
    config.response.model = Some("template".to_string());
    config.comprehension.aggregation = AggregationKind::FirstObserved;
    config
        .comprehension
        .settings
        .insert("window".to_string(), json!(5));

    let pipeline = EmotionalPipeline::from_config(&config);
    assert_eq!(pipeline.analyzer().model(), "lexicon");
    assert_eq!(pipeline.generator().model(), "template");
    assert_eq!(
        pipeline.comprehension().config(),
        &BTreeMap::from([("window".to_string(), json!(5))])
    );
}

#[test]
fn given_texts_when_process_batch_then_order_and_length_preserved() {
    let pipeline = EmotionalPipeline::with_defaults();
    let options = GenerationOptions::default().with_prompt("Thanks for sharing.");
    let outputs = pipeline
        .process_batch(&["first", "second", "third"], None, &options)
        .expect("batch should succeed");

    assert_eq!(outputs.len(), 3);
    for output in &outputs {
        assert_eq!(output.response.text(), "Thanks for sharing.");
    }
}

#[test]
fn given_shared_pipeline_when_used_across_threads_then_outputs_are_identical() {
    let pipeline = EmotionalPipeline::with_defaults();
    let options = GenerationOptions::default();
    let expected = pipeline
        .process("same input", None, &options)
        .expect("pipeline should succeed");

    let outputs: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| pipeline.process("same input", None, &options)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker should not panic"))
            .collect()
    });

    for output in outputs {
        assert_eq!(output.expect("pipeline should succeed"), expected);
    }
}

#[test]
fn given_output_when_serialized_then_it_deserializes_to_equal_value() {
    let pipeline = EmotionalPipeline::with_defaults();
    let output = pipeline
        .process("hello", Some(&session_context()), &GenerationOptions::default())
        .expect("pipeline should succeed");

    let encoded = serde_json::to_value(&output).expect("output should serialize");
    assert_eq!(encoded["response"]["tone"], json!("empathetic"));
    let decoded = serde_json::from_value(encoded).expect("output should deserialize");
    assert_eq!(output, decoded);
}
