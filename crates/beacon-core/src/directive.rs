//! Analytics directive parsing.

use crate::errors::DirectiveError;
use crate::kinds::EventKind;
use serde_json::{Map, Value};

/// Directive key naming the event kind in the record form.
pub const EVENT_TYPE_KEY: &str = "eventType";

/// Directive key holding the payload in the record form.
pub const EVENT_PAYLOAD_KEY: &str = "eventPayload";

/// Analytics intent attached to an action, in one of its two wire shapes.
///
/// This is the single place the shapes are told apart; everything
/// downstream pattern-matches the parsed variant instead of re-probing raw
/// JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Bare kind tag, e.g. `"analytics": "page"`. The payload is
    /// implicitly empty.
    Shorthand(EventKind),

    /// Record form: `{"eventType": ..., "eventPayload": {...}}`.
    Explicit {
        /// Declared event kind.
        event_type: EventKind,
        /// Payload fields, `None` when `eventPayload` is absent or `null`.
        event_payload: Option<Map<String, Value>>,
    },
}

impl Directive {
    /// Parses a directive from the raw `meta.analytics` value.
    ///
    /// A string is the shorthand form and must be a registered kind tag. An
    /// object is the record form and must carry a string `eventType` naming
    /// a registered kind; `eventPayload`, when given, must be an object.
    /// Every other shape is an [`DirectiveError::InvalidShape`].
    pub fn from_value(value: &Value) -> Result<Self, DirectiveError> {
        match value {
            Value::String(tag) => Ok(Directive::Shorthand(tag.parse()?)),
            Value::Object(map) => Self::from_record(map),
            other => Err(DirectiveError::InvalidShape {
                found: json_shape(other).to_string(),
            }),
        }
    }

    fn from_record(map: &Map<String, Value>) -> Result<Self, DirectiveError> {
        let tag = match map.get(EVENT_TYPE_KEY) {
            Some(Value::String(tag)) => tag,
            Some(_) => {
                return Err(DirectiveError::InvalidShape {
                    found: format!("an object with a non-string '{}'", EVENT_TYPE_KEY),
                })
            }
            None => {
                return Err(DirectiveError::InvalidShape {
                    found: format!("an object without '{}'", EVENT_TYPE_KEY),
                })
            }
        };
        let event_type: EventKind = tag.parse()?;

        let event_payload = match map.get(EVENT_PAYLOAD_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::Object(payload)) => Some(payload.clone()),
            Some(_) => {
                return Err(DirectiveError::InvalidShape {
                    found: format!("an object with a non-object '{}'", EVENT_PAYLOAD_KEY),
                })
            }
        };

        Ok(Directive::Explicit {
            event_type,
            event_payload,
        })
    }

    /// Returns the declared event kind.
    pub fn kind(&self) -> EventKind {
        match self {
            Directive::Shorthand(kind) => *kind,
            Directive::Explicit { event_type, .. } => *event_type,
        }
    }
}

/// Short human name for a JSON value's shape, used in error messages.
fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
