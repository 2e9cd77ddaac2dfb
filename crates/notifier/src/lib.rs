//! Notification dispatch: a registry of named strategies and a dispatcher
//! that resolves one per send.
//!
//! Built-in strategies:
//! - `email`: [`EmailStrategy`]
//! - `sms`: [`SmsStrategy`]
//! - `slack`: [`ChatStrategy::slack`]

pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod strategies;
pub mod strategy;

pub use dispatcher::{DispatchReceipt, Dispatcher};
pub use error::{DispatchError, StrategyError};
pub use registry::StrategyRegistry;
pub use strategies::{ChatStrategy, EmailStrategy, SmsStrategy};
pub use strategy::{Console, NotificationStrategy};
