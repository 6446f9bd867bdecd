/// Convenience result type used across Vitae.
pub type VitaeResult<T> = Result<T, VitaeError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Rendering itself is infallible by design (missing content degrades to
/// fallbacks or empty output); errors surface only when the document cannot
/// be parsed or serialized at all.
#[derive(thiserror::Error, Debug)]
pub enum VitaeError {
    /// The content document blob could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid document data detected after parsing.
    #[error("document error: {0}")]
    Document(String),

    /// Errors when serializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitaeError {
    /// Build a [`VitaeError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`VitaeError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`VitaeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
