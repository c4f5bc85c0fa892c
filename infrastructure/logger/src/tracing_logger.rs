use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards the wishlist core's log lines to `tracing` under a fixed target,
/// so `RUST_LOG=wishlist=debug` selects them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

const TARGET: &str = "wishlist";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
