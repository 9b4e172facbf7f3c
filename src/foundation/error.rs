/// Convenience result type used across Appo.
pub type AppoResult<T> = Result<T, AppoError>;

/// Top-level error taxonomy.
///
/// Degenerate geometry (zero or negative radius mid-recursion) is not an
/// error anywhere in this crate; the generator skips the draw and keeps
/// recursing.
#[derive(thiserror::Error, Debug)]
pub enum AppoError {
    /// Invalid user-provided configuration, rejected before any frame is
    /// rendered.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while allocating or reading back a drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors from the GIF or MP4 encoding boundary.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppoError {
    /// Build an [`AppoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AppoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`AppoError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
