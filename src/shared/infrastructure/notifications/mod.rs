// Transient user-facing notices (the dashboard's toasts).
//
// Controllers report every outcome through this port in addition to their
// own inline error state. Adapters decide where the notice ends up.

pub mod in_memory;
pub mod tracing_notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
