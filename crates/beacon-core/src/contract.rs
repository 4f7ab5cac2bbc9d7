//! Per-kind field contracts.
//!
//! A contract lists a kind's payload fields in client call order and states
//! what composition does when each one is absent. Contracts are static
//! data: changing how a kind's arguments are shaped means editing a table
//! here, not touching the composer.

use crate::kinds::EventKind;
use serde_json::{Map, Value};

/// Payload field naming the event for `track` calls.
///
/// Shared with descriptor resolution, which seeds this field from the
/// action's own type tag when the payload leaves it out.
pub const TRACK_EVENT_FIELD: &str = "event";

/// What composition does when a contract field is absent from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsencePolicy {
    /// Drop the argument; later arguments shift forward.
    Omit,

    /// Substitute an empty object when a later field is present.
    ///
    /// Applied to the mapping-valued field sitting directly before
    /// `options`, so the client can still tell the two apart by position.
    FillEmpty,

    /// Fail composition with a missing-field error.
    Require,

    /// Fail composition only when the named peer field is present.
    RequireWhen(&'static str),
}

/// One ordered field of a kind's call contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Payload key, in its documented wire spelling.
    pub name: &'static str,
    /// Behavior when the payload does not provide the field.
    pub absent: AbsencePolicy,
}

/// Ordered field contract for one event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldContract {
    /// Kind this contract shapes.
    pub kind: EventKind,
    /// Fields in client call order.
    pub fields: &'static [FieldSpec],
}

const IDENTIFY: FieldContract = FieldContract {
    kind: EventKind::Identify,
    fields: &[
        FieldSpec {
            name: "userId",
            absent: AbsencePolicy::Omit,
        },
        FieldSpec {
            name: "traits",
            absent: AbsencePolicy::FillEmpty,
        },
        FieldSpec {
            name: "options",
            absent: AbsencePolicy::Omit,
        },
    ],
};

const PAGE: FieldContract = FieldContract {
    kind: EventKind::Page,
    fields: &[
        FieldSpec {
            name: "category",
            absent: AbsencePolicy::Omit,
        },
        // A category alone is ambiguous: the client reads a single string
        // argument as the name, so a categorized page must also be named.
        FieldSpec {
            name: "name",
            absent: AbsencePolicy::RequireWhen("category"),
        },
        FieldSpec {
            name: "properties",
            absent: AbsencePolicy::FillEmpty,
        },
        FieldSpec {
            name: "options",
            absent: AbsencePolicy::Omit,
        },
    ],
};

const ALIAS: FieldContract = FieldContract {
    kind: EventKind::Alias,
    fields: &[
        FieldSpec {
            name: "userId",
            absent: AbsencePolicy::Require,
        },
        FieldSpec {
            name: "previousId",
            absent: AbsencePolicy::Omit,
        },
        FieldSpec {
            name: "options",
            absent: AbsencePolicy::Omit,
        },
    ],
};

const TRACK: FieldContract = FieldContract {
    kind: EventKind::Track,
    fields: &[
        FieldSpec {
            name: TRACK_EVENT_FIELD,
            absent: AbsencePolicy::Require,
        },
        FieldSpec {
            name: "properties",
            absent: AbsencePolicy::FillEmpty,
        },
        FieldSpec {
            name: "options",
            absent: AbsencePolicy::Omit,
        },
    ],
};

impl EventKind {
    /// Returns the field contract for this kind.
    pub fn contract(&self) -> &'static FieldContract {
        match self {
            EventKind::Identify => &IDENTIFY,
            EventKind::Page => &PAGE,
            EventKind::Alias => &ALIAS,
            EventKind::Track => &TRACK,
        }
    }
}

/// Returns the payload value for `name` when it is present and non-null.
///
/// An explicit JSON `null` counts the same as a missing key everywhere a
/// contract is applied.
pub fn present_value<'a>(payload: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|value| !value.is_null())
}

/// Returns true when the payload provides a usable value for `name`.
pub fn field_present(payload: &Map<String, Value>, name: &str) -> bool {
    present_value(payload, name).is_some()
}
