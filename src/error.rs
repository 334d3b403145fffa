use crate::codec::Format;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ModelError`], used by callers that pick a recovery policy.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ModelErrorKind {
    /// The input is not well-formed structured text.
    MalformedInput,
    /// A key holds a value whose shape does not match its field.
    TypeMismatch,
    /// No document model matches the declared version.
    UnknownVersion,
    /// The tree could not be written in the requested format.
    Encode,
    /// The document could not be read from disk.
    Io,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("MalformedInput: {format} input is not well-formed: {message}")]
    MalformedInput { format: Format, message: String },

    #[error("TypeMismatch: '{path}' {message}")]
    TypeMismatch { path: String, message: String },

    #[error("UnknownVersion: Version '{0}' does not match any supported document model")]
    UnknownVersion(String),

    #[error("UnknownVersion: Document declares neither an 'openapi' nor a 'swagger' version")]
    MissingVersion,

    #[error("InvalidPath: Path '{0}' must begin with '/'")]
    InvalidPath(String),

    #[error("Encode: Failed to write document as {format}: {message}")]
    Encode { format: Format, message: String },

    #[error("Io: Failed to read '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    pub(crate) fn malformed_input<T>(format: Format, message: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::MalformedInput {
            format,
            message: message.to_string(),
        }
    }

    pub(crate) fn type_mismatch(path: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::TypeMismatch {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn unknown_version<T>(version: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::UnknownVersion(version.to_string())
    }

    pub(crate) fn encode_failed<T>(format: Format, message: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::Encode {
            format,
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> ModelErrorKind {
        match self {
            ModelError::MalformedInput { .. } => ModelErrorKind::MalformedInput,

            ModelError::TypeMismatch { .. } | ModelError::InvalidPath(_) => {
                ModelErrorKind::TypeMismatch
            }

            ModelError::UnknownVersion(_) | ModelError::MissingVersion => {
                ModelErrorKind::UnknownVersion
            }

            ModelError::Encode { .. } => ModelErrorKind::Encode,
            ModelError::Io { .. } => ModelErrorKind::Io,
        }
    }

    /// The dotted location of a type mismatch, e.g. `paths./pets.get.parameters[0].schema`.
    pub fn path(&self) -> Option<&str> {
        match self {
            ModelError::TypeMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}
