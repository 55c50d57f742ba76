//! `ActivityLog` adapter writing records through `tracing`.

use tracing::info;

use crate::domain::ports::ActivityLog;

/// Target used for activity records so they can be filtered separately.
pub const ACTIVITY_TARGET: &str = "courier::activity";

/// Forwards activity records to the `tracing` subscriber at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn info(&self, message: &str) {
        info!(target: ACTIVITY_TARGET, "{message}");
    }
}
