//! Codec error types.

use thiserror::Error;

use crate::value::ValueKind;

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    Syntax,
    NotAnObject,
    TypeMismatch,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },
    #[error(
        "{type_name}.{field}: expected {expected} for key `{wire_key}` at `{pointer}`, found {found}"
    )]
    TypeMismatch {
        type_name: &'static str,
        field: &'static str,
        wire_key: &'static str,
        expected: ValueKind,
        found: &'static str,
        /// RFC 6901 pointer from the top-level object to the offending value.
        pointer: String,
    },
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::Syntax(_) => DecodeErrorKind::Syntax,
            Self::NotAnObject { .. } => DecodeErrorKind::NotAnObject,
            Self::TypeMismatch { .. } => DecodeErrorKind::TypeMismatch,
        }
    }

    /// Re-roots a nested error under `segment` of the enclosing value.
    pub(crate) fn nested_under(self, segment: &str) -> Self {
        match self {
            Self::TypeMismatch {
                type_name,
                field,
                wire_key,
                expected,
                found,
                pointer,
            } => Self::TypeMismatch {
                type_name,
                field,
                wire_key,
                expected,
                found,
                pointer: format!("/{}{pointer}", escape_component(segment)),
            },
            other => other,
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{type_name}.{field}: value for key `{wire_key}` cannot be represented in JSON")]
    Unrepresentable {
        type_name: &'static str,
        field: &'static str,
        wire_key: &'static str,
    },
    #[error("failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Escapes one JSON Pointer token component.
pub(crate) fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Formats unescaped path components into an RFC 6901 pointer.
pub(crate) fn format_pointer<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component.as_ref()));
    }
    out
}
