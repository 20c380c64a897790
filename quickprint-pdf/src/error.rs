//! Error types for the rendering library

use thiserror::Error;

/// Rendering error types
#[derive(Debug, Error)]
pub enum RenderError {
    /// PDF backend failure (font loading, document write)
    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

impl From<printpdf::Error> for RenderError {
    fn from(err: printpdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
