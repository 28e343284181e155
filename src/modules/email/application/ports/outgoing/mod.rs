pub mod admin_code_notifier;
pub mod email_sender;

pub use admin_code_notifier::{AdminCodeNotificationError, AdminCodeNotifier};
pub use email_sender::{EmailSendError, EmailSender};
