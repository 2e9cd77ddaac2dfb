//! Dispatcher — single entry point for sending a notification by channel name.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DispatchError;
use crate::registry::StrategyRegistry;

/// Identifies one completed send in logs and responses.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReceipt {
    pub id: Uuid,
    pub channel: String,
    pub dispatched_at: DateTime<Utc>,
}

/// Resolves a strategy from the shared registry and invokes it.
///
/// Clones share the same registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<StrategyRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Send `message` to `to` over `channel`.
    ///
    /// `to` and `message` are passed to the strategy unchanged. No strategy is
    /// invoked when the channel is empty or unregistered. Strategy failures are
    /// returned as [`DispatchError::Strategy`] without retry.
    pub fn send(
        &self,
        channel: &str,
        to: &str,
        message: &str,
    ) -> Result<DispatchReceipt, DispatchError> {
        if channel.is_empty() {
            return Err(DispatchError::EmptyChannel);
        }

        let strategy = self.registry.resolve(channel).inspect_err(|_| {
            tracing::warn!(channel, "Notification requested for unregistered channel");
        })?;

        strategy
            .send(to, message)
            .map_err(|source| DispatchError::Strategy {
                channel: channel.to_string(),
                source,
            })?;

        let receipt = DispatchReceipt {
            id: Uuid::new_v4(),
            channel: channel.to_string(),
            dispatched_at: Utc::now(),
        };

        tracing::info!(
            notification_id = %receipt.id,
            channel,
            label = strategy.label(),
            "Notification dispatched"
        );

        Ok(receipt)
    }
}
