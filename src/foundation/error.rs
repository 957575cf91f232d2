/// Convenience result type used across the brush APIs.
pub type BrushResult<T> = Result<T, BrushError>;

/// Top-level error taxonomy used by paint operations.
#[derive(thiserror::Error, Debug)]
pub enum BrushError {
    /// A caller-provided argument is outside its accepted domain (e.g. radius <= 0).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Errors when serializing or deserializing brush configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrushError {
    /// Build a [`BrushError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`BrushError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for [`BrushError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for BrushError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
