use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "weather_mood";

/// `Logger` port backed by `tracing` events under a single target,
/// so `RUST_LOG=weather_mood=debug` isolates use case diagnostics.
pub struct TracingLogger;

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
