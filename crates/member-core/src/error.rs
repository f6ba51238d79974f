//! Error Types

use thiserror::Error;

/// Result type alias for flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Failures in the checkout/portal flows.
///
/// None of these surface to the user; callers log them and leave the
/// existing view in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The external catalog has no tier with a positive price
    #[error("no paid tier in catalog")]
    NoPaidTier,

    /// A checkout/portal response succeeded but carried no redirect URL
    #[error("no redirect URL in response")]
    MissingRedirectUrl,
}
