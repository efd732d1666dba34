use std::fmt;

/// Logging capability injected into the connector.
///
/// Failure paths report through this trait: ordinary request failures go to
/// [`Logger::log`], unexpected processing failures go to [`Logger::warn`].
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Default logger forwarding to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "latoken", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "latoken", "{}", message);
    }
}

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Logger")
    }
}
