use std::path::PathBuf;

/// Convenience result type used across rimefall.
pub type RimeResult<T> = Result<T, RimeError>;

/// Top-level error taxonomy used by generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum RimeError {
    /// Invalid catalog data: unknown style tag, unknown palette name, malformed color tuple.
    ///
    /// Raised before any pixel work starts for the offending entry.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failures inside the raster primitives (buffer shape mismatches, invalid blur parameters).
    #[error("render error: {0}")]
    Render(String),

    /// Output directory or file could not be created or written.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// PNG encoder failure.
    #[error("encode error: {0}")]
    Encode(String),
}

impl RimeError {
    /// Build a [`RimeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RimeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RimeError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`RimeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Whether this error must abort the whole catalog run.
    ///
    /// Configuration errors only invalidate the entry they were raised for.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
