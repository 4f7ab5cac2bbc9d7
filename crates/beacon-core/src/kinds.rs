//! Event kind registry.

use crate::errors::DirectiveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analytics operation tags understood by the translation layer.
///
/// Each kind maps to exactly one method on the external client and owns
/// exactly one field contract describing how its payload becomes positional
/// arguments. Adding a kind means adding a variant here plus a contract in
/// [`contract`](crate::contract); there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Ties a user id to a set of traits.
    Identify,
    /// Records a page view, optionally categorized and named.
    Page,
    /// Merges a previous user identity into a new one.
    Alias,
    /// Records a named event with free-form properties.
    Track,
}

impl EventKind {
    /// Every registered kind, in contract-listing order.
    pub const ALL: [EventKind; 4] = [
        EventKind::Identify,
        EventKind::Page,
        EventKind::Alias,
        EventKind::Track,
    ];

    /// Returns the kind's wire name as used in directives and call rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Identify => "identify",
            EventKind::Page => "page",
            EventKind::Alias => "alias",
            EventKind::Track => "track",
        }
    }

    /// Looks up a kind by its wire name.
    ///
    /// Returns `None` for tags outside the registry; callers decide whether
    /// that is an error (directive parsing treats it as one).
    pub fn from_tag(tag: &str) -> Option<EventKind> {
        match tag {
            "identify" => Some(EventKind::Identify),
            "page" => Some(EventKind::Page),
            "alias" => Some(EventKind::Alias),
            "track" => Some(EventKind::Track),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::from_tag(s).ok_or_else(|| DirectiveError::UnknownKind {
            kind: s.to_string(),
        })
    }
}
