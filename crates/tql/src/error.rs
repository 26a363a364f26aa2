//! Error types for tql

use thiserror::Error;

/// Result type alias for tql operations
pub type TqlResult<T> = Result<T, TqlError>;

/// Error types for query construction.
///
/// Most "this fragment cannot be turned into SQL" situations are modeled
/// as a [`None`] compile result rather than an error, so that optional
/// fragments can silently drop out of a larger query. The only input that
/// counts as malformed is a parts/binds pair whose lengths cannot
/// interleave.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TqlError {
    /// Parts/binds arrays with incompatible lengths
    #[error("template shape mismatch: {parts} part(s) cannot interleave {binds} bind(s)")]
    TemplateShape { parts: usize, binds: usize },
}

impl TqlError {
    /// Create a template shape error
    pub fn template_shape(parts: usize, binds: usize) -> Self {
        Self::TemplateShape { parts, binds }
    }

    /// Check if this is a template shape error
    pub fn is_template_shape(&self) -> bool {
        matches!(self, Self::TemplateShape { .. })
    }
}
