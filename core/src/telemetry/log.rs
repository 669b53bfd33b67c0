use log::{debug, info, warn};

/// Thin wrapper that tags view-model log lines with their origin.
pub struct LogManager {
    origin: &'static str,
}

impl LogManager {
    pub fn new() -> Self {
        Self::for_origin("edacore")
    }

    pub fn for_origin(origin: &'static str) -> Self {
        Self { origin }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.origin, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.origin, message);
    }

    pub fn warn(&self, message: &str) {
        warn!("[{}] {}", self.origin, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
