//! Analytics client trait and bundled implementations.

use beacon_core::{ComposedCall, EventKind};
use serde_json::Value;

/// External analytics client surface.
///
/// One callable per event kind, invoked with the composed positional
/// arguments; the kind's wire name is the method itself. Everything past
/// the call boundary (queueing, batching, delivery) belongs to the client.
pub trait AnalyticsClient {
    /// Ties a user id to a set of traits.
    fn identify(&mut self, args: &[Value]);

    /// Records a page view.
    fn page(&mut self, args: &[Value]);

    /// Merges a previous user identity into a new one.
    fn alias(&mut self, args: &[Value]);

    /// Records a named event.
    fn track(&mut self, args: &[Value]);

    /// Routes a composed call to the method named by its kind.
    fn deliver(&mut self, call: &ComposedCall) {
        match call.kind {
            EventKind::Identify => self.identify(&call.args),
            EventKind::Page => self.page(&call.args),
            EventKind::Alias => self.alias(&call.args),
            EventKind::Track => self.track(&call.args),
        }
    }
}

/// Client that records every delivered call as a positional row.
///
/// Each row is the kind's wire name followed by the arguments, the same
/// shape client-side analytics queues hold. Used by tests and dry runs in
/// place of a real client.
#[derive(Debug, Default)]
pub struct RecordingClient {
    rows: Vec<Vec<Value>>,
}

impl RecordingClient {
    /// Creates an empty recording client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded rows, oldest first.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    fn record(&mut self, kind: EventKind, args: &[Value]) {
        self.rows.push(
            ComposedCall {
                kind,
                args: args.to_vec(),
            }
            .to_row(),
        );
    }
}

impl AnalyticsClient for RecordingClient {
    fn identify(&mut self, args: &[Value]) {
        self.record(EventKind::Identify, args);
    }

    fn page(&mut self, args: &[Value]) {
        self.record(EventKind::Page, args);
    }

    fn alias(&mut self, args: &[Value]) {
        self.record(EventKind::Alias, args);
    }

    fn track(&mut self, args: &[Value]) {
        self.record(EventKind::Track, args);
    }
}
