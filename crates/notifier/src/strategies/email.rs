use crate::error::StrategyError;
use crate::strategy::{Console, NotificationStrategy};

/// Email stub: writes the send to the console instead of talking to a mail server.
#[derive(Debug, Clone, Default)]
pub struct EmailStrategy {
    console: Console,
}

impl EmailStrategy {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl NotificationStrategy for EmailStrategy {
    fn send(&self, to: &str, message: &str) -> Result<(), StrategyError> {
        tracing::debug!(to, "Sending email");
        self.console
            .write_line(&format!("Sending Email to {}: {}", to, message))
    }

    fn label(&self) -> &'static str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_line_format() {
        let (console, lines) = Console::captured();
        EmailStrategy::new(console)
            .send("alice@x.com", "hi")
            .unwrap();
        assert_eq!(*lines.lock().unwrap(), vec!["Sending Email to alice@x.com: hi"]);
    }
}
