//! Declaration validation and normalization.
//!
//! Transforms the raw declaration strings a user passes on the command
//! line into structured, deduplicated declarations, or rejects the whole
//! batch with one message per offending entry. Validation is
//! all-or-nothing: a batch with any malformed or duplicate entry never
//! reaches rendering.
//!
//! These functions are pure. Mapping a rejection onto a process-level
//! [`Error`] is the caller's concern (`From<ValidationError>` below).

use serde::Serialize;

use crate::error::Error;
use crate::utils::parser;

/// Attribute type used when a declaration does not specify one.
pub const DEFAULT_ATTRIBUTE_TYPE: &str = "string";

/// A validated controller action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDeclaration {
    pub name: String,
}

/// A validated model attribute. `data_type` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

/// Why a batch of declarations was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One message per malformed entry, in input order.
    Malformed(Vec<String>),
    /// The batch contains two or more entries with the same name.
    /// Reported once for the whole batch.
    Duplicate(String),
}

impl ValidationError {
    /// All messages, first offending input first.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationError::Malformed(messages) => messages.clone(),
            ValidationError::Duplicate(message) => vec![message.clone()],
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Malformed(messages) => {
                Error::validation_invalid_declaration(messages)
            }
            ValidationError::Duplicate(message) => {
                Error::validation_duplicate_declaration(message)
            }
        }
    }
}

pub type ValidationResult<T> = std::result::Result<Vec<T>, ValidationError>;

/// Validate a batch of raw action names.
///
/// No per-action syntax rule is defined today, so every string passes
/// through unchanged before the duplicate check. See
/// [`validate_actions_with`] for the extension point.
pub fn validate_actions(raw: &[String]) -> ValidationResult<ActionDeclaration> {
    validate_actions_with(raw, |_| false)
}

/// Validate actions against a pluggable syntax predicate.
///
/// `is_invalid` decides per action whether it is malformed; offending
/// entries are collected and reported together.
pub fn validate_actions_with(
    raw: &[String],
    is_invalid: impl Fn(&str) -> bool,
) -> ValidationResult<ActionDeclaration> {
    let mut errors = Vec::new();
    let mut actions = Vec::with_capacity(raw.len());

    for action in raw {
        if is_invalid(action) {
            errors.push(format!("Invalid action notation:   \"{}\"", action));
            continue;
        }
        actions.push(ActionDeclaration {
            name: action.clone(),
        });
    }

    if !errors.is_empty() {
        return Err(ValidationError::Malformed(errors));
    }

    let names: Vec<&str> = actions.iter().map(|a| a.name.as_str()).collect();
    if parser::dedupe(names.clone()).len() != names.len() {
        return Err(ValidationError::Duplicate(
            "Duplicate actions not allowed!".to_string(),
        ));
    }

    Ok(actions)
}

/// Validate a batch of raw `name[:type]` attribute declarations.
///
/// A missing or empty type segment defaults to `"string"`. An empty name
/// segment is malformed. The duplicate check runs on names only, after
/// every entry has parsed cleanly.
pub fn validate_attributes(raw: &[String]) -> ValidationResult<AttributeDeclaration> {
    let mut errors = Vec::new();
    let mut attributes = Vec::with_capacity(raw.len());

    for attribute in raw {
        let (name, data_type) = parser::split_declaration(attribute);
        if name.is_empty() {
            errors.push(format!("Invalid attribute notation:   \"{}\"", attribute));
            continue;
        }
        attributes.push(AttributeDeclaration {
            name: name.to_string(),
            data_type: data_type.unwrap_or(DEFAULT_ATTRIBUTE_TYPE).to_string(),
        });
    }

    if !errors.is_empty() {
        return Err(ValidationError::Malformed(errors));
    }

    let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
    if parser::dedupe(names.clone()).len() != names.len() {
        return Err(ValidationError::Duplicate(
            "Duplicate attributes not allowed!".to_string(),
        ));
    }

    Ok(attributes)
}
