//! Echo-style greeting endpoint.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use common::{Clock, Timestamp};
use serde::Serialize;
use serde_json::{Map, Value};

use super::AppState;
use crate::error::ApiError;

pub const DEFAULT_NAME: &str = "Guest";
pub const PROCESSED_MESSAGE: &str = "Processed by Rust Backend";

/// Fields of a `/greet` body.
///
/// The body is a flat JSON object of scalars. Numbers and booleans are read
/// as their text form, so `{"name": 5}` greets `"5"`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GreetRequest {
    pub name: Option<String>,
}

impl TryFrom<Map<String, Value>> for GreetRequest {
    type Error = ApiError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut name = None;
        for (key, value) in fields {
            let text = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ApiError::BadRequest(format!(
                        "Field {key:?} must be a string, number or boolean"
                    )));
                }
            };
            if key == "name" {
                name = text;
            }
        }
        Ok(Self { name })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetResponse {
    pub greeting: String,
    pub received_at: Timestamp,
    pub message: &'static str,
}

/// Builds `"Hello, <name>!"`, substituting [`DEFAULT_NAME`] when no name is given.
pub fn greeting_for(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}

/// Parses the request body. An empty body, `null` or `{}` all mean "no name".
fn parse_request(body: &[u8]) -> Result<GreetRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GreetRequest::default());
    }
    let fields: Option<Map<String, Value>> = serde_json::from_slice(body)?;
    fields.map_or_else(|| Ok(GreetRequest::default()), GreetRequest::try_from)
}

/// POST /greet: greets the name from the body, or a guest.
#[tracing::instrument(skip(state, body))]
pub async fn post<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    body: Bytes,
) -> Result<Json<GreetResponse>, ApiError> {
    let req = parse_request(&body)?;
    tracing::debug!(name = ?req.name, "greeting");

    Ok(Json(GreetResponse {
        greeting: greeting_for(req.name.as_deref()),
        received_at: state.clock.now(),
        message: PROCESSED_MESSAGE,
    }))
}
