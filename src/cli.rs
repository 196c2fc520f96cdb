use std::{env, path::PathBuf};

use anyhow::{Context as _, Result, anyhow};

use crate::{emotion::Context, response::GenerationOptions};

const USAGE: &str = "usage: emo-comprehension [--config <path>] [--context <json-object>] [--tone <tone>] [--prompt <text>] <text...>";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub context: Option<Context>,
    pub options: GenerationOptions,
    pub text: String,
}

pub fn args_from_env() -> Result<CliArgs> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut args = args.into_iter();
    let mut parsed = CliArgs::default();
    let mut words = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            "--context" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --context"))?;
                let context: Context = serde_json::from_str(&value)
                    .context("--context must be a JSON object")?;
                parsed.context = Some(context);
            }
            "--tone" => {
                let value = args.next().ok_or_else(|| anyhow!("missing value for --tone"))?;
                parsed.options.tone = Some(value);
            }
            "--prompt" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --prompt"))?;
                parsed.options.prompt = Some(value);
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
            _ => words.push(arg),
        }
    }

    parsed.text = words.join(" ");
    Ok(parsed)
}
