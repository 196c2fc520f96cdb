use crate::{
    emotion::{AffectError, ComprehensionResult},
    response::ports::ResponseComposer,
};

#[derive(Debug, Clone, Default)]
pub struct TemplateComposer;

impl ResponseComposer for TemplateComposer {
    fn compose(
        &self,
        comprehension: &ComprehensionResult,
        _tone: &str,
    ) -> Result<String, AffectError> {
        Ok(format!(
            "I understand you're feeling {}.",
            comprehension.primary_emotion()
        ))
    }
}
