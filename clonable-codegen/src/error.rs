//! Generator errors.
//!
//! Every error is scoped to one record declaration. Generation is
//! deterministic, so none of them is worth retrying: the fix is always a change
//! to the declaration or its annotations.

use crate::model::DeclarationKind;

/// Generator result type
pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(thiserror::Error, Debug)]
pub enum CodegenError {
    /// The declaration is not a plain struct.
    #[error("`{record}` is {kind}; Clonable can only be derived for structs")]
    UnsupportedDeclaration { record: String, kind: DeclarationKind },

    /// The emitted tokens did not re-parse as Rust items.
    #[error("cannot generate Clonable for `{record}`: {reason}")]
    GenerationFailure { record: String, reason: String },

    #[error("invalid schema record `{record}`: {reason}")]
    InvalidSchema { record: String, reason: String },

    /// The schema document itself is malformed.
    #[error("failed to parse schema: {0}")]
    SchemaParse(String),
}

impl CodegenError {
    /// Short name of the failure kind, for diagnostics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CodegenError::UnsupportedDeclaration { .. } => "UnsupportedDeclaration",
            CodegenError::GenerationFailure { .. } => "GenerationFailure",
            CodegenError::InvalidSchema { .. } => "InvalidSchema",
            CodegenError::SchemaParse(_) => "SchemaParse",
        }
    }

    /// The record the error belongs to, if it belongs to one.
    pub fn record(&self) -> Option<&str> {
        match self {
            CodegenError::UnsupportedDeclaration { record, .. }
            | CodegenError::GenerationFailure { record, .. }
            | CodegenError::InvalidSchema { record, .. } => Some(record),
            CodegenError::SchemaParse(_) => None,
        }
    }

    pub(crate) fn generation(record: &str, reason: impl Into<String>) -> Self {
        CodegenError::GenerationFailure { record: record.to_string(), reason: reason.into() }
    }

    pub(crate) fn invalid_schema(record: &str, reason: impl Into<String>) -> Self {
        CodegenError::InvalidSchema { record: record.to_string(), reason: reason.into() }
    }
}
