use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffectErrorKind {
    InvalidValue,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AffectError {
    pub kind: AffectErrorKind,
    pub message: String,
}

impl AffectError {
    pub fn new(kind: AffectErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn invalid_value(message: impl Into<String>) -> AffectError {
    AffectError::new(AffectErrorKind::InvalidValue, message)
}

pub fn internal_error(message: impl Into<String>) -> AffectError {
    AffectError::new(AffectErrorKind::Internal, message)
}
