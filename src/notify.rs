//! User-facing notifications raised after mutations.
//!
//! The bridge reports outcomes through this trait; the console binary logs
//! them, a GUI shell would surface them as toasts.

use log::{error, info};

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier backed by the log facade.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}
