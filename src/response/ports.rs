use crate::emotion::{AffectError, ComprehensionResult};

/// Produces response text for a comprehension when the caller supplied none.
pub trait ResponseComposer: Send + Sync {
    fn compose(&self, comprehension: &ComprehensionResult, tone: &str)
    -> Result<String, AffectError>;
}
