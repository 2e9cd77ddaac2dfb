//! The strategy capability and the console the built-in strategies write to.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::error::StrategyError;

/// A notification channel implementation.
///
/// Strategies are shared across request handlers through the registry,
/// so they must be `Send + Sync`. The built-ins hold no per-call state.
pub trait NotificationStrategy: Send + Sync {
    /// Deliver `message` to `to`. Both are passed through unmodified.
    fn send(&self, to: &str, message: &str) -> Result<(), StrategyError>;

    /// Human-readable channel kind for log fields (e.g. "email").
    fn label(&self) -> &'static str;
}

/// Output target for the built-in strategies.
///
/// `Stdout` is what the server uses. `Captured` collects lines in memory so
/// tests can assert on the observable side effect.
#[derive(Debug, Clone, Default)]
pub enum Console {
    #[default]
    Stdout,
    Captured(Arc<Mutex<Vec<String>>>),
}

impl Console {
    /// Create a capturing console and a handle to the lines it records.
    pub fn captured() -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (Console::Captured(Arc::clone(&lines)), lines)
    }

    /// Write one line.
    pub fn write_line(&self, line: &str) -> Result<(), StrategyError> {
        match self {
            Console::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()?;
            }
            Console::Captured(lines) => {
                lines
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .push(line.to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_console_records_lines_in_order() {
        let (console, lines) = Console::captured();
        console.write_line("first").unwrap();
        console.write_line("second").unwrap();
        assert_eq!(*lines.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_cloned_console_shares_buffer() {
        let (console, lines) = Console::captured();
        let clone = console.clone();
        clone.write_line("from clone").unwrap();
        assert_eq!(lines.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_stdout_console_succeeds() {
        assert!(Console::Stdout.write_line("stdout check").is_ok());
    }
}
