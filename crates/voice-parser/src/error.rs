//! Parser construction and catalog error types

use thiserror::Error;

/// Raised while building a parser from its lexical and command tables.
/// Parsing itself never fails: unrecognised speech is a `None` result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("Empty entry in {table} table")]
    EmptyEntry { table: &'static str },

    #[error("Duplicate key '{key}' in {table} table maps to '{first}' and '{second}'")]
    DuplicateEntry {
        table: &'static str,
        key: String,
        first: String,
        second: String,
    },

    #[error("Canonical token '{token}' in {table} table is itself a variant")]
    UnstableCanonical { table: &'static str, token: String },

    #[error("Token '{token}' in {table} table collides with {reason}")]
    ReservedToken {
        table: &'static str,
        token: String,
        reason: &'static str,
    },

    #[error("Number phrase '{phrase}' maps to non-digit value '{value}'")]
    InvalidDigits { phrase: String, value: String },

    #[error("Trigger '{trigger}' for {intent} is not normalized (normalizes to '{normalized}')")]
    UnnormalizedTrigger {
        intent: String,
        trigger: String,
        normalized: String,
    },

    #[error("Intent {0} cannot carry trigger phrases")]
    NonCommandIntent(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Command catalog error: {0}")]
    Catalog(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Voice command already exists: {0}")]
    DuplicateName(String),

    #[error("Voice command not found: {0}")]
    NotFound(u64),

    #[error("Invalid voice command: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid voice command: {0}")]
    BlankPattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
