//! Notification route.

use axum::extract::{Form, FromRequest, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use herald_common::error::AppError;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/notify", post(notify))
}

/// Parameters for `POST /notify`, all required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    pub channel: String,
    pub to: String,
    pub message: String,
}

/// Raw parameters as they arrive from one source (query string or form body).
#[derive(Debug, Default, Deserialize)]
struct RawParams {
    channel: Option<String>,
    to: Option<String>,
    message: Option<String>,
}

impl RawParams {
    /// Fill fields missing from `self` with values from `other`.
    fn or(self, other: RawParams) -> RawParams {
        RawParams {
            channel: self.channel.or(other.channel),
            to: self.to.or(other.to),
            message: self.message.or(other.message),
        }
    }

    fn into_request(self) -> Result<NotifyRequest, AppError> {
        Ok(NotifyRequest {
            channel: required("channel", self.channel)?,
            to: required("to", self.to)?,
            message: required("message", self.message)?,
        })
    }
}

fn required(name: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("Required parameter '{}' is missing", name)))
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Reads parameters from the query string and, for form-encoded bodies, the body.
/// Query values win when a parameter appears in both.
impl<S> FromRequest<S> for NotifyRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(from_query) = Query::<RawParams>::try_from_uri(req.uri())
            .map_err(|e| AppError::Validation(e.body_text()))?;

        let from_form = if is_form(&req) {
            let Form(params) = Form::<RawParams>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            params
        } else {
            RawParams::default()
        };

        from_query.or(from_form).into_request()
    }
}

/// POST /notify — Send a message through the strategy registered for `channel`.
async fn notify(State(state): State<AppState>, req: NotifyRequest) -> Result<String, AppError> {
    let receipt = state
        .dispatcher
        .send(&req.channel, &req.to, &req.message)?;

    tracing::debug!(notification_id = %receipt.id, channel = %receipt.channel, "Notify request served");

    Ok(format!("Notification send via {}", req.channel))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(channel: Option<&str>, to: Option<&str>, message: Option<&str>) -> RawParams {
        RawParams {
            channel: channel.map(String::from),
            to: to.map(String::from),
            message: message.map(String::from),
        }
    }

    #[test]
    fn test_query_takes_precedence_over_form() {
        let merged = raw(Some("email"), None, None).or(raw(Some("sms"), Some("bob"), Some("hi")));
        let req = merged.into_request().unwrap();
        assert_eq!(req.channel, "email");
        assert_eq!(req.to, "bob");
        assert_eq!(req.message, "hi");
    }

    #[test]
    fn test_missing_parameter_named_in_error() {
        let err = raw(Some("email"), Some("bob"), None).into_request().unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("'message'")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_values_are_present() {
        let req = raw(Some("email"), Some(""), Some("")).into_request().unwrap();
        assert_eq!(req.to, "");
        assert_eq!(req.message, "");
    }
}
