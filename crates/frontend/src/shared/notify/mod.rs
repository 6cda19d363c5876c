//! User-visible notifications
//!
//! Controllers report outcomes through the [`Notifier`] trait; the browser
//! implementation is the toast stack in `toast.rs`.

mod toast;

pub use toast::{ToastService, Toasts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

impl NotificationLevel {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast--success",
            NotificationLevel::Error => "toast--error",
            NotificationLevel::Info => "toast--info",
        }
    }
}

pub trait Notifier {
    fn notify(&self, level: NotificationLevel, title: &str, message: &str);

    fn success(&self, title: &str, message: &str) {
        self.notify(NotificationLevel::Success, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.notify(NotificationLevel::Error, title, message);
    }

    fn info(&self, title: &str, message: &str) {
        self.notify(NotificationLevel::Info, title, message);
    }
}
