use anyhow::Context;
use emo_comprehension::{EmotionalPipeline, cli::args_from_env, config::Config, logging};

fn main() -> anyhow::Result<()> {
    let args = args_from_env()?;
    let config = match args.config_path.as_deref() {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let _logging_guard = logging::init_tracing(&config.logging)?;

    let pipeline = EmotionalPipeline::from_config(&config);
    let output = pipeline
        .process(&args.text, args.context.as_ref(), &args.options)
        .context("pipeline run failed")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("failed to serialize pipeline output")?
    );
    Ok(())
}
