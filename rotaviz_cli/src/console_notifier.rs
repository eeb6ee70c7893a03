use rotaviz_map::sync::notifier::{Notification, NotificationLevel, Notifier};

/// Shows notifications on the terminal, apart from the log output.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let prefix = match notification.level {
            NotificationLevel::Info => "·",
            NotificationLevel::Success => "✔",
            NotificationLevel::Failure => "✘",
        };

        eprintln!("{} {}", prefix, notification.message);
    }
}
