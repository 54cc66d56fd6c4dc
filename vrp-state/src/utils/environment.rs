use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the engine.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences the engine behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// Specifies whether verbose (per insertion round) messages should be logged.
    pub is_verbose: bool,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, is_verbose: bool) -> Self {
        Self { logger, is_verbose }
    }

    /// Creates an environment which discards all messages.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_| {}), is_verbose: false }
    }

    /// Logs a message using the environment logger.
    pub fn log(&self, msg: &str) {
        (self.logger)(msg)
    }

    /// Logs a message only when verbose mode is on.
    pub fn log_verbose(&self, msg: &str) {
        if self.is_verbose {
            (self.logger)(msg)
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg| println!("{msg}")), false)
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").field("is_verbose", &self.is_verbose).finish_non_exhaustive()
    }
}
