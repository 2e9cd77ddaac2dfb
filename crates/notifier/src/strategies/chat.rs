//! Chat stub, parameterised by platform so one type covers Slack and friends.

use crate::error::StrategyError;
use crate::strategy::{Console, NotificationStrategy};

#[derive(Debug, Clone)]
pub struct ChatStrategy {
    /// Platform name as it appears in the output line (e.g. "Slack")
    platform: &'static str,
    console: Console,
}

impl ChatStrategy {
    pub fn new(platform: &'static str, console: Console) -> Self {
        Self { platform, console }
    }

    /// Chat strategy registered under the `slack` channel.
    pub fn slack(console: Console) -> Self {
        Self::new("Slack", console)
    }

    pub fn platform(&self) -> &'static str {
        self.platform
    }
}

impl NotificationStrategy for ChatStrategy {
    fn send(&self, to: &str, message: &str) -> Result<(), StrategyError> {
        tracing::debug!(to, platform = self.platform, "Sending chat message");
        self.console.write_line(&format!(
            "Sending {} message to {}: {}",
            self.platform, to, message
        ))
    }

    fn label(&self) -> &'static str {
        "chat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slack_line_format() {
        let (console, lines) = Console::captured();
        ChatStrategy::slack(console)
            .send("#general", "deploy complete")
            .unwrap();
        assert_eq!(
            *lines.lock().unwrap(),
            vec!["Sending Slack message to #general: deploy complete"]
        );
    }

    #[test]
    fn test_custom_platform() {
        let (console, lines) = Console::captured();
        let strategy = ChatStrategy::new("Teams", console);
        assert_eq!(strategy.platform(), "Teams");
        strategy.send("ops", "hello").unwrap();
        assert_eq!(*lines.lock().unwrap(), vec!["Sending Teams message to ops: hello"]);
    }
}
