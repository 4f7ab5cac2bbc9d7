//! Dispatch-pipeline stage that forwards composed analytics calls.
//!
//! This crate provides:
//! - The [`Dispatch`] trait modelling one pipeline stage, with the
//!   [`Identity`] terminal dispatcher
//! - The [`AnalyticsClient`] trait with one method per event kind, plus a
//!   [`RecordingClient`] for tests and dry runs
//! - The [`Tracker`] decorator wiring translation, delivery, strictness
//!   and passthrough into one stage
//!
//! Tracked actions trigger exactly one client call and then flow through;
//! untracked actions flow through untouched. The tracker holds no state of
//! its own between dispatches beyond whatever the client accumulates.

#![deny(missing_docs)]

/// Analytics client trait and bundled implementations.
pub mod client;
/// Tracker configuration.
pub mod config;
/// Error types for tracked dispatch.
pub mod errors;
/// Dispatch traits and the tracker decorator.
pub mod tracker;

pub use client::{AnalyticsClient, RecordingClient};
pub use config::TrackerConfig;
pub use errors::TrackError;
pub use tracker::{translate, Dispatch, Identity, Tracker};
