/// Receives user-facing messages. `is_error` marks failures.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, is_error: bool);
}

/// Routes notifications into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, is_error: bool) {
        if is_error {
            log::error!("❌ {}", message);
        } else {
            log::info!("📣 {}", message);
        }
    }
}
