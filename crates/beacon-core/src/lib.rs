//! Analytics intent resolution and positional call composition.
//!
//! This crate provides:
//! - An event kind registry with one field contract per kind
//! - Parsing for the two `meta.analytics` directive shapes
//! - Descriptor resolution from dispatched action JSON
//! - Composition of a descriptor payload into the positional argument
//!   list an external analytics client expects
//!
//! ## Quick Start
//!
//! ```rust
//! use beacon_core::{compose, resolve};
//! use serde_json::json;
//!
//! let action = json!({
//!     "type": "CHECKOUT_OPENED",
//!     "meta": {
//!         "analytics": {
//!             "eventType": "page",
//!             "eventPayload": {"name": "Checkout", "options": {"All": false}}
//!         }
//!     }
//! });
//!
//! let descriptor = resolve(&action)?.expect("action carries a directive");
//! let call = compose(&descriptor)?;
//! assert_eq!(
//!     call.to_row(),
//!     vec![json!("page"), json!("Checkout"), json!({}), json!({"All": false})]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Key Types
//!
//! - [`EventKind`] - Registry of supported analytics operations
//! - [`Descriptor`] - Normalized intent resolved from one action
//! - [`ComposedCall`] - Collapsed positional call for the client
//!
//! Actions without a reachable `meta.analytics` value resolve to `None`
//! and are no concern of this crate; the tracker forwards them untouched.

#![deny(missing_docs)]

/// Action JSON alias and metadata probes.
pub mod action;
/// Positional call composition.
pub mod compose;
/// Per-kind field contracts.
pub mod contract;
/// Descriptor resolution from dispatched actions.
pub mod descriptor;
/// Analytics directive parsing.
pub mod directive;
/// Error types for directive parsing and call composition.
pub mod errors;
/// Event kind registry.
pub mod kinds;

pub use action::{action_type, directive_value, ActionJson};
pub use compose::{compose, ComposedCall};
pub use contract::{field_present, present_value, AbsencePolicy, FieldContract, FieldSpec};
pub use descriptor::{resolve, Descriptor};
pub use directive::Directive;
pub use errors::{ComposeError, DirectiveError};
pub use kinds::EventKind;
