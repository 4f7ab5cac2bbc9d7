//! Tracker configuration.

/// Options controlling how the tracker reacts to contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Fail the dispatch when a payload violates its kind's contract.
    ///
    /// When false, the violation is reported on the warning channel, the
    /// analytics call is dropped and the action still flows through.
    /// Malformed directives and unknown kinds fail the dispatch either way.
    pub strict: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}
