use std::sync::Arc;

/// A logger type which is called with various information regarding the work done on the tour.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Creates a logger which writes every message to stdout.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

/// Creates a logger which ignores all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
