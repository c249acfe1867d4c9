//! Error types for tex_markup crate.

use thiserror::Error;

/// Errors that can occur while preparing markup inputs.
///
/// Rendering itself is total; only textual option parsing can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Limit direction text was neither `left` nor `right`
    #[error("unknown limit direction '{0}' (expected 'left' or 'right')")]
    UnknownLimitDirection(String),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
