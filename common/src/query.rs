use serde::Deserialize;
use thiserror::Error;

use crate::order::Order;

/// Shown when a failure carries no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "Something went wrong while loading your orders.";

/// Why the "my orders" query failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderFetchError {
    /// The API answered with an error status.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or(GENERIC_FETCH_ERROR))]
    Server { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// A response arrived but the body was not an order list.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl OrderFetchError {
    /// Build from an error status and raw body, picking up `{ "message": .. }`.
    pub fn from_response(status: u16, body: &str) -> Self {
        OrderFetchError::Server {
            status,
            message: error_body_message(body),
        }
    }

    /// Text to show the customer.
    ///
    /// A server message is shown verbatim. Transport errors show their own
    /// text; everything else gets the generic message.
    pub fn user_message(&self) -> String {
        match self {
            OrderFetchError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            OrderFetchError::Transport(error) if !error.is_empty() => error.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the `message` field out of a JSON error body, if there is a usable one.
pub fn error_body_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Decode a successful "my orders" response body.
pub fn parse_orders(body: &str) -> Result<Vec<Order>, OrderFetchError> {
    serde_json::from_str(body).map_err(|e| OrderFetchError::Decode(e.to_string()))
}

/// State of the "my orders" query as seen by the views.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OrdersQuery {
    #[default]
    Loading,
    Loaded(Vec<Order>),
    Failed(OrderFetchError),
}

impl OrdersQuery {
    pub fn is_loading(&self) -> bool {
        matches!(self, OrdersQuery::Loading)
    }

    /// Loaded orders, or an empty slice while loading or after a failure.
    pub fn orders(&self) -> &[Order] {
        match self {
            OrdersQuery::Loaded(orders) => orders,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&OrderFetchError> {
        match self {
            OrdersQuery::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<Vec<Order>, OrderFetchError>> for OrdersQuery {
    fn from(result: Result<Vec<Order>, OrderFetchError>) -> Self {
        match result {
            Ok(orders) => OrdersQuery::Loaded(orders),
            Err(err) => OrdersQuery::Failed(err),
        }
    }
}
