//! Cross-cutting error types for ndomig.
//!
//! Domain-specific errors (`ApiError`, `SheetError`, `MigrateError`) live in
//! their respective crates; this module covers validation failures that can
//! originate from the shared types themselves.

use thiserror::Error;

/// Errors raised by the shared domain types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An object reference path did not match the expected shape.
    #[error("malformed {kind} reference: '{value}'")]
    MalformedRef { kind: &'static str, value: String },
}
