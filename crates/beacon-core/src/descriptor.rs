//! Descriptor resolution from dispatched actions.

use crate::action::{self, ActionJson};
use crate::contract::{self, TRACK_EVENT_FIELD};
use crate::directive::Directive;
use crate::errors::DirectiveError;
use crate::kinds::EventKind;
use serde_json::{Map, Value};

/// Normalized analytics intent for one dispatch.
///
/// Built fresh per action from its directive; the payload defaults to an
/// empty mapping when the directive carries none. Composition is a pure
/// function of this struct, so two equal descriptors always compose to the
/// same call.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Event kind selecting the field contract and client method.
    pub kind: EventKind,
    /// Payload fields, keyed by their documented wire names.
    pub payload: Map<String, Value>,
}

/// Resolves an action's analytics intent, if it carries any.
///
/// Returns `Ok(None)` when no directive is reachable at `meta.analytics`
/// (including non-object actions and a `null` directive); such actions are
/// not analytics-tracked and must flow through the pipeline untouched.
/// Malformed directives and unregistered kinds are errors.
///
/// For `track` descriptors whose payload does not name an event, the
/// action's own type tag seeds the `event` field here, keeping the composer
/// free of any knowledge of the surrounding action.
pub fn resolve(action: &ActionJson) -> Result<Option<Descriptor>, DirectiveError> {
    let Some(raw) = action::directive_value(action) else {
        return Ok(None);
    };

    let (kind, payload) = match Directive::from_value(raw)? {
        Directive::Shorthand(kind) => (kind, Map::new()),
        Directive::Explicit {
            event_type,
            event_payload,
        } => (event_type, event_payload.unwrap_or_default()),
    };

    let mut descriptor = Descriptor { kind, payload };
    if descriptor.kind == EventKind::Track
        && !contract::field_present(&descriptor.payload, TRACK_EVENT_FIELD)
    {
        if let Some(action_type) = action::action_type(action) {
            descriptor.payload.insert(
                TRACK_EVENT_FIELD.to_string(),
                Value::String(action_type.to_string()),
            );
        }
    }

    Ok(Some(descriptor))
}
