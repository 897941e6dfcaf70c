//! Run configuration.
//!
//! Everything here is established once at startup and passed through the
//! orchestrator as an immutable object; no component reads ambient or
//! global state.

use argonaut_domain::HostOverrides;

/// Default ceiling on concurrently in-flight dispatches.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 32;

/// How the run schedules its files and cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Files in order, cases within a file in order. The only mode in
    /// which console output has a deterministic ordering.
    Sync,
    /// All cases fan out as independent tasks, bounded by the
    /// concurrency ceiling. Requires a callback URL, since there is no
    /// ordered console to read.
    #[default]
    Async,
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Scheduling mode.
    pub mode: RunMode,
    /// Whether failures are printed to the console. Only honored in
    /// [`RunMode::Sync`].
    pub output: bool,
    /// Hostname substitutions applied to connection targets.
    pub host_overrides: HostOverrides,
    /// Ceiling on concurrently in-flight dispatches in async mode.
    pub max_in_flight: usize,
}

impl RunConfig {
    /// Creates a configuration with the default concurrency ceiling.
    #[must_use]
    pub fn new(mode: RunMode, output: bool, host_overrides: HostOverrides) -> Self {
        Self {
            mode,
            output,
            host_overrides,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Console output is only meaningful when ordering is deterministic.
    #[must_use]
    pub fn console_enabled(&self) -> bool {
        self.output && self.mode == RunMode::Sync
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_output_requires_sync_mode() {
        let sync = RunConfig::new(RunMode::Sync, true, HostOverrides::new());
        assert!(sync.console_enabled());

        let async_mode = RunConfig::new(RunMode::Async, true, HostOverrides::new());
        assert!(!async_mode.console_enabled());

        let quiet = RunConfig::new(RunMode::Sync, false, HostOverrides::new());
        assert!(!quiet.console_enabled());
    }
}
