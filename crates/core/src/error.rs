//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (validation, malformed
/// identifiers). Loading and IO failures belong to the data provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_build_matching_variants() {
        assert_eq!(
            DomainError::validation("bad sex"),
            DomainError::Validation("bad sex".to_string())
        );
        assert_eq!(
            DomainError::invalid_id("UserId: empty"),
            DomainError::InvalidId("UserId: empty".to_string())
        );
    }

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::validation("bad sex").to_string(),
            "validation failed: bad sex"
        );
        assert_eq!(
            DomainError::invalid_id("x").to_string(),
            "invalid identifier: x"
        );
    }
}
