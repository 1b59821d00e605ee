/// Convenience result type used across springkey.
pub type SpringResult<T> = Result<T, SpringError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error taxonomy for parameter loading and keyframe generation.
pub enum SpringError {
    /// Invalid parameters, including an empty enabled-property mask.
    #[error("validation error: {0}")]
    Validation(String),

    /// Parameter file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Report serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpringError {
    /// Build [`SpringError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`SpringError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build [`SpringError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
