//! Driven port for the human-readable activity trail.
//!
//! Mutating visits report what they changed through this port. The
//! production adapter forwards records to `tracing`; tests record them.

/// Sink for informational activity records.
#[cfg_attr(test, mockall::automock)]
pub trait ActivityLog: Send + Sync {
    /// Record one informational message.
    fn info(&self, message: &str);
}
