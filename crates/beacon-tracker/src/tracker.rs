//! Dispatch traits and the tracker decorator.

use crate::client::AnalyticsClient;
use crate::config::TrackerConfig;
use crate::errors::TrackError;
use beacon_core::{compose, resolve, ActionJson, ComposedCall};
use tracing::{debug, warn};

/// One stage of the host dispatch pipeline.
pub trait Dispatch {
    /// Result of dispatching one action.
    type Output;

    /// Dispatches one action, taking ownership of it.
    fn dispatch(&mut self, action: ActionJson) -> Self::Output;
}

/// Terminal dispatcher that returns the action unchanged.
///
/// Stands in for the rest of the pipeline when a tracker runs on its own,
/// as in tests and command-line dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Dispatch for Identity {
    type Output = ActionJson;

    fn dispatch(&mut self, action: ActionJson) -> ActionJson {
        action
    }
}

/// Resolves and composes an action's analytics call, if it carries one.
///
/// `Ok(None)` means the action is not analytics-tracked. This is the whole
/// translation step as one pure function; the tracker adds delivery,
/// strictness handling and passthrough on top of it.
pub fn translate(action: &ActionJson) -> Result<Option<ComposedCall>, TrackError> {
    let Some(descriptor) = resolve(action)? else {
        return Ok(None);
    };
    Ok(Some(compose(&descriptor)?))
}

/// Dispatch decorator that forwards analytics intent to a client.
///
/// Wraps an inner dispatcher: every action is translated and, when it
/// carries a directive, the composed call is delivered to the injected
/// client before the action continues down the pipeline unchanged. The
/// tracker never rewrites or suppresses actions.
///
/// Failure behavior follows [`TrackerConfig`]: fatal translation errors
/// fail the dispatch without forwarding the action, while contract
/// violations in lenient mode only drop the analytics call.
#[derive(Debug)]
pub struct Tracker<D: Dispatch, C: AnalyticsClient> {
    /// Inner pipeline stage.
    inner: D,
    /// Injected analytics client.
    client: C,
    /// Strictness configuration.
    config: TrackerConfig,
}

impl<D: Dispatch, C: AnalyticsClient> Tracker<D, C> {
    /// Creates a tracker around an inner dispatcher and client.
    pub fn new(inner: D, client: C, config: TrackerConfig) -> Self {
        Self {
            inner,
            client,
            config,
        }
    }

    /// Shared access to the injected client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Mutable access to the injected client.
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    /// Consumes the tracker, returning the inner dispatcher and client.
    pub fn into_parts(self) -> (D, C) {
        (self.inner, self.client)
    }
}

impl<D: Dispatch, C: AnalyticsClient> Dispatch for Tracker<D, C> {
    type Output = Result<D::Output, TrackError>;

    fn dispatch(&mut self, action: ActionJson) -> Self::Output {
        match translate(&action) {
            Ok(Some(call)) => {
                debug!(kind = %call.kind, args = call.args.len(), "delivering analytics call");
                self.client.deliver(&call);
            }
            Ok(None) => {}
            Err(err) if err.is_fatal(self.config.strict) => return Err(err),
            Err(err) => warn!("analytics call dropped: {}", err),
        }
        Ok(self.inner.dispatch(action))
    }
}
