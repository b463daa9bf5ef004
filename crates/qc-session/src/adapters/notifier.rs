//! Notification and navigation sinks.

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::ports::{Navigator, Notifier};

/// Logs notifications at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(%message, "User notification");
    }
}

/// Ignores navigation requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, route: &str) {
        debug!(route, "Navigation ignored");
    }
}

/// Collects notifications until a UI drains them.
#[derive(Debug, Default)]
pub struct QueuedNotifier {
    messages: Mutex<Vec<String>>,
}

impl QueuedNotifier {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending message, oldest first.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl Notifier for QueuedNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Collects navigation requests until a UI drains them.
#[derive(Debug, Default)]
pub struct QueuedNavigator {
    routes: Mutex<Vec<String>>,
}

impl QueuedNavigator {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending route, oldest first.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.routes.lock())
    }
}

impl Navigator for QueuedNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_notifier_drains_in_order() {
        let notifier = QueuedNotifier::new();
        notifier.error("first");
        notifier.error("second");
        assert_eq!(notifier.drain(), vec!["first", "second"]);
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_queued_navigator_drains() {
        let navigator = QueuedNavigator::new();
        navigator.navigate("/");
        assert_eq!(navigator.drain(), vec!["/"]);
        assert!(navigator.drain().is_empty());
    }

    #[test]
    fn test_tracing_sinks_do_not_panic() {
        TracingNotifier.error("boom");
        NoopNavigator.navigate("/");
    }
}
