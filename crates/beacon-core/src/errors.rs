//! Error types for directive parsing and call composition.

use crate::kinds::EventKind;
use thiserror::Error;

/// Errors raised while reading an action's analytics directive.
///
/// Directive errors mean the action author wrote something unintelligible;
/// they fail the dispatch regardless of strictness.
#[derive(Debug, Error)]
pub enum DirectiveError {
    /// The directive value is neither a bare kind tag nor a record with
    /// `eventType`.
    #[error("invalid analytics directive: expected a kind tag or an object with 'eventType', found {found}")]
    InvalidShape {
        /// Short description of the offending value's shape.
        found: String,
    },

    /// The directive names a kind outside the registry.
    #[error("unknown analytics event kind '{kind}'")]
    UnknownKind {
        /// The unrecognized tag.
        kind: String,
    },
}

/// Errors raised while composing the positional call for a descriptor.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A field the kind's contract requires is absent from the payload.
    #[error("{kind} call is missing required field '{field}'")]
    MissingField {
        /// Kind whose contract was violated.
        kind: EventKind,
        /// Contract name of the missing payload field.
        field: &'static str,
    },
}
