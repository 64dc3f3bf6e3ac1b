// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Builder Invariants
//!
//! Builders accumulate partial state while a response streams in. The only
//! structural requirement checked when a value is finalized is a non-empty
//! identifier; every other field falls back to its default so that provider
//! schema drift does not break parsing.

use thiserror::Error;

/// Validation error raised when a builder is finalized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field was never set, or was set to an empty value
    #[error("{entity} is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}

/// Validation result for builder finalization
pub type DomainResult<T> = Result<T, DomainError>;

/// Require an opaque identifier to be present and non-blank
///
/// The identifier is not checked for UUID shape; ProfitBricks ids are
/// treated as opaque strings.
pub fn require_id(entity: &'static str, id: Option<String>) -> DomainResult<String> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(DomainError::MissingField { entity, field: "id" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_present() {
        let id = require_id("Server", Some("qwertyui-qwer".to_string())).unwrap();
        assert_eq!(id, "qwertyui-qwer");
    }

    #[test]
    fn test_require_id_accepts_non_uuid() {
        assert!(require_id("Nic", Some("nic-1".to_string())).is_ok());
    }

    #[test]
    fn test_require_id_missing_or_blank() {
        let missing = require_id("Storage", None).unwrap_err();
        assert_eq!(
            missing,
            DomainError::MissingField {
                entity: "Storage",
                field: "id"
            }
        );

        assert!(require_id("Firewall", Some(String::new())).is_err());
        assert!(require_id("Firewall", Some("   ".to_string())).is_err());
    }
}
