use crate::error::StrategyError;
use crate::strategy::{Console, NotificationStrategy};

/// SMS stub.
#[derive(Debug, Clone, Default)]
pub struct SmsStrategy {
    console: Console,
}

impl SmsStrategy {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl NotificationStrategy for SmsStrategy {
    fn send(&self, to: &str, message: &str) -> Result<(), StrategyError> {
        tracing::debug!(to, "Sending SMS");
        self.console
            .write_line(&format!("Sending SMS to {}: {}", to, message))
    }

    fn label(&self) -> &'static str {
        "sms"
    }
}
