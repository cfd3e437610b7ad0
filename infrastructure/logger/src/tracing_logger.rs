use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards the domain `Logger` port to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "catalog", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "catalog", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "catalog", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "catalog", "{}", message);
    }
}
