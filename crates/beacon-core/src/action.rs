//! Action JSON alias and metadata probes.

use serde_json::Value;

/// One action flowing through the host dispatch pipeline.
///
/// Type alias for `serde_json::Value`. Actions are usually objects with a
/// `type` tag, but the translation layer accepts any JSON value and never
/// mutates what it is given; it only reads the metadata probed below.
pub type ActionJson = Value;

/// Action key holding the metadata object.
pub const META_KEY: &str = "meta";

/// Metadata key holding the analytics directive.
pub const ANALYTICS_KEY: &str = "analytics";

/// Action key holding the action's type tag.
pub const TYPE_KEY: &str = "type";

/// Returns the analytics directive attached to an action, if any.
///
/// Probes `action.meta.analytics`. A missing segment anywhere on that path,
/// a non-object action, or an explicit JSON `null` directive all mean the
/// action is not analytics-tracked.
pub fn directive_value(action: &ActionJson) -> Option<&Value> {
    let value = action.get(META_KEY)?.get(ANALYTICS_KEY)?;
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Returns the action's type tag when present and a string.
pub fn action_type(action: &ActionJson) -> Option<&str> {
    action.get(TYPE_KEY).and_then(Value::as_str)
}
