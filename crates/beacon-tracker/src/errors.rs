//! Error types for tracked dispatch.

use thiserror::Error;

/// Errors that can fail one tracked dispatch.
#[derive(Debug, Error)]
pub enum TrackError {
    /// The action's analytics directive could not be read.
    #[error("directive error: {0}")]
    Directive(#[from] beacon_core::DirectiveError),

    /// The directive's payload violates its kind's field contract.
    #[error("composition error: {0}")]
    Compose(#[from] beacon_core::ComposeError),
}

impl TrackError {
    /// Returns true when the error must fail the dispatch under the given
    /// strictness.
    ///
    /// Directive errors always do; contract violations only in strict mode.
    pub fn is_fatal(&self, strict: bool) -> bool {
        match self {
            TrackError::Directive(_) => true,
            TrackError::Compose(_) => strict,
        }
    }
}
