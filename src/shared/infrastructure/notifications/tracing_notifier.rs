use crate::shared::infrastructure::notifications::Notifier;

/// Notices as log events, for the command-line shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "forseti_admin::notice", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "forseti_admin::notice", "{message}");
    }
}
