//! Built-in console-backed strategies.

pub mod chat;
pub mod email;
pub mod sms;

pub use chat::ChatStrategy;
pub use email::EmailStrategy;
pub use sms::SmsStrategy;
