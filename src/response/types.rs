use serde::{Deserialize, Serialize};

/// Per-call overrides shared by single and batch generation.
///
/// Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

impl GenerationOptions {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub(crate) fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|prompt| !prompt.is_empty())
    }

    pub(crate) fn tone(&self) -> Option<&str> {
        self.tone.as_deref().filter(|tone| !tone.trim().is_empty())
    }
}
