use thiserror::Error;

/// Errors raised when building colors or gradients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// String is not a `#rrggbb` hex color.
    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// Requested gradient length is zero.
    #[error("invalid gradient length {0}: must be at least 1")]
    InvalidLength(usize),

    /// No anchor colors were supplied.
    #[error("at least one anchor color is required")]
    NoAnchors,
}
