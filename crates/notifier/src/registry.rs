//! Strategy registry — maps channel names to strategy instances.
//!
//! Populated once during startup, then wrapped in an `Arc` and handed to the
//! [`Dispatcher`](crate::Dispatcher). Nothing reachable from a request
//! handler can mutate it, so lookups need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::DispatchError;
use crate::strategies::{ChatStrategy, EmailStrategy, SmsStrategy};
use crate::strategy::{Console, NotificationStrategy};

/// Channel name for [`EmailStrategy`].
pub const EMAIL: &str = "email";
/// Channel name for [`SmsStrategy`].
pub const SMS: &str = "sms";
/// Channel name for [`ChatStrategy::slack`].
pub const SLACK: &str = "slack";

#[derive(Default)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn NotificationStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three built-in strategies, all writing to `console`.
    pub fn builtin(console: Console) -> Self {
        let mut registry = Self::new();
        registry.register(EMAIL, Arc::new(EmailStrategy::new(console.clone())));
        registry.register(SMS, Arc::new(SmsStrategy::new(console.clone())));
        registry.register(SLACK, Arc::new(ChatStrategy::slack(console)));
        registry
    }

    /// Register a strategy under `name`. A later registration replaces an earlier one.
    pub fn register(&mut self, name: impl Into<String>, strategy: Arc<dyn NotificationStrategy>) {
        let name = name.into();
        let label = strategy.label();
        if self.strategies.insert(name.clone(), strategy).is_some() {
            tracing::warn!(channel = %name, label, "Replaced existing strategy registration");
        } else {
            tracing::info!(channel = %name, label, "Registered notification strategy");
        }
    }

    /// Look up the strategy for `name`. Matching is exact and case-sensitive.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn NotificationStrategy>, DispatchError> {
        self.strategies
            .get(name)
            .cloned()
            .ok_or_else(|| DispatchError::ChannelNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Registered channel names, sorted.
    pub fn channels(&self) -> Vec<String> {
        let mut names: Vec<String> = self.strategies.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Fail unless every name in `expected` is registered.
    ///
    /// Called at startup so a misconfigured deployment never serves traffic.
    pub fn ensure_registered(&self, expected: &[String]) -> Result<(), DispatchError> {
        let missing: Vec<String> = expected
            .iter()
            .filter(|name| !self.contains(name))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::MissingChannels(missing))
        }
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("channels", &self.channels())
            .finish()
    }
}
