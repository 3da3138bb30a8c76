use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case logs to `tracing` under the `storefront` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "storefront", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "storefront", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "storefront", "{}", message);
    }
}
