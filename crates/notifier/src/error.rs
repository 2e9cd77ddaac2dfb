//! Error taxonomy for strategy lookup and delivery.

use thiserror::Error;

use herald_common::error::AppError;

/// Failure raised by a strategy while performing its send action.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors returned by the registry and the dispatcher.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Channel name must not be empty")]
    EmptyChannel,

    #[error("No strategy registered for channel '{0}'")]
    ChannelNotFound(String),

    #[error("Required channels are not registered: {}", .0.join(", "))]
    MissingChannels(Vec<String>),

    #[error("Strategy for channel '{channel}' failed: {source}")]
    Strategy {
        channel: String,
        #[source]
        source: StrategyError,
    },
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        let message = err.to_string();
        match err {
            DispatchError::EmptyChannel => AppError::Validation(message),
            DispatchError::ChannelNotFound(channel) => AppError::ChannelNotFound(channel),
            DispatchError::MissingChannels(_) => AppError::Config(message),
            DispatchError::Strategy { .. } => AppError::Delivery(message),
        }
    }
}
