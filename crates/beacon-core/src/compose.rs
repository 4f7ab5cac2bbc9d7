//! Positional call composition.
//!
//! Turns a resolved [`Descriptor`] into the argument list the external
//! client expects. Two passes over the kind's contract:
//!
//! 1. Validation: every `Require` field must be present, and every
//!    `RequireWhen` field must be present whenever its peer is. A violation
//!    fails composition before any argument is produced.
//! 2. Collapse: fields after the last present one are dropped entirely; up
//!    to it, present fields pass through in contract order, `FillEmpty`
//!    fields become `{}` and every other absent field is skipped so later
//!    arguments shift forward.
//!
//! Composition never mutates the descriptor and is deterministic: the same
//! `(kind, payload)` always yields the same call.

use crate::contract::{field_present, present_value, AbsencePolicy, FieldContract};
use crate::descriptor::Descriptor;
use crate::errors::ComposeError;
use crate::kinds::EventKind;
use serde::Serialize;
use serde_json::{Map, Value};

/// Positional call composed for one descriptor.
///
/// `args` holds the arguments for the client method named by `kind`, in
/// call order; the kind's own wire name is not part of `args`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedCall {
    /// Client method the arguments belong to.
    pub kind: EventKind,
    /// Positional arguments, already collapsed and filled.
    pub args: Vec<Value>,
}

impl ComposedCall {
    /// Returns the full positional row with the kind's wire name first.
    ///
    /// This is the shape client-side analytics queues record, e.g.
    /// `["identify", "u42", {"plan": "pro"}]`.
    pub fn to_row(&self) -> Vec<Value> {
        let mut row = Vec::with_capacity(self.args.len() + 1);
        row.push(Value::String(self.kind.to_string()));
        row.extend(self.args.iter().cloned());
        row
    }
}

/// Composes the positional call for a descriptor.
///
/// Fails with [`ComposeError::MissingField`] when the payload violates the
/// kind's contract; on failure no partial call is produced.
pub fn compose(descriptor: &Descriptor) -> Result<ComposedCall, ComposeError> {
    let contract = descriptor.kind.contract();
    validate(contract, &descriptor.payload)?;
    Ok(ComposedCall {
        kind: descriptor.kind,
        args: collapse(contract, &descriptor.payload),
    })
}

fn validate(contract: &FieldContract, payload: &Map<String, Value>) -> Result<(), ComposeError> {
    for spec in contract.fields {
        if field_present(payload, spec.name) {
            continue;
        }
        let violated = match spec.absent {
            AbsencePolicy::Require => true,
            AbsencePolicy::RequireWhen(peer) => field_present(payload, peer),
            AbsencePolicy::Omit | AbsencePolicy::FillEmpty => false,
        };
        if violated {
            return Err(ComposeError::MissingField {
                kind: contract.kind,
                field: spec.name,
            });
        }
    }
    Ok(())
}

fn collapse(contract: &FieldContract, payload: &Map<String, Value>) -> Vec<Value> {
    let Some(last_present) = contract
        .fields
        .iter()
        .rposition(|spec| field_present(payload, spec.name))
    else {
        return Vec::new();
    };

    let mut args = Vec::with_capacity(last_present + 1);
    for spec in &contract.fields[..=last_present] {
        match present_value(payload, spec.name) {
            Some(value) => args.push(value.clone()),
            None if spec.absent == AbsencePolicy::FillEmpty => {
                args.push(Value::Object(Map::new()))
            }
            None => {}
        }
    }
    args
}
