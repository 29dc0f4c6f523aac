//! Lambda-proxy transport adapter.
//!
//! Turns an API Gateway style event into a credential pair, runs the
//! supplied authentication callback and maps the outcome onto a status code
//! and JSON body with CORS headers.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

use crate::core::constants;
use crate::core::types::{CredentialPair, EnrichedIdentity, ResolutionOutcome};
use crate::error::AuthFailure;

/// Incoming proxy event. Only the fields the handler reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default, rename = "httpMethod")]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Event {
    /// A `POST` event carrying `body`.
    pub fn post(body: impl Into<String>) -> Self {
        Self {
            http_method: Some("POST".to_string()),
            body: Some(body.into()),
        }
    }
}

#[derive(Deserialize)]
struct LoginRequest {
    #[serde(default)]
    access_key: String,
    #[serde(default)]
    secret_key: String,
}

/// Proxy response: status, headers and a JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Response {
    fn new(status_code: u16, body: serde_json::Value) -> Self {
        let headers = constants::CORS_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            status_code,
            headers,
            body: body.to_string(),
        }
    }

    /// Response for a successful authentication.
    pub fn success(user: &EnrichedIdentity) -> Self {
        Self::new(
            200,
            json!({
                "success": true,
                "message": "Authentication successful",
                "user": user,
            }),
        )
    }

    /// Response for a classified failure.
    pub fn failure(failure: &AuthFailure) -> Self {
        Self::new(
            failure.kind.status_code(),
            json!({
                "success": false,
                "error": failure.title,
                "kind": failure.kind.as_str(),
                "message": failure.message,
            }),
        )
    }

    /// Response for an outcome.
    pub fn from_outcome(outcome: &ResolutionOutcome) -> Self {
        match outcome {
            Ok(user) => Self::success(user),
            Err(failure) => Self::failure(failure),
        }
    }

    fn preflight() -> Self {
        Self::new(200, json!({ "message": "CORS preflight" }))
    }
}

/// Handle one proxy event.
///
/// `authenticate` only runs for events that carry a parseable request, so
/// preflight and malformed requests never reach the provider. A panic
/// inside it becomes an internal error response.
pub fn handle_event<F>(event: &Event, authenticate: F) -> Response
where
    F: FnOnce(&CredentialPair) -> ResolutionOutcome,
{
    if event
        .http_method
        .as_deref()
        .is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
    {
        return Response::preflight();
    }

    let body = event.body.as_deref().unwrap_or("{}");
    let request: LoginRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "unparseable request body");
            let message = if e.is_data() {
                "Request body must be a JSON object with access_key and secret_key"
            } else {
                "Request body must be valid JSON"
            };
            return Response::failure(&AuthFailure::invalid_request(message));
        }
    };

    let credentials = CredentialPair::new(&request.access_key, &request.secret_key);
    drop(request);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| authenticate(&credentials)))
        .unwrap_or_else(|_| {
            error!("authentication panicked");
            Err(AuthFailure::internal())
        });

    Response::from_outcome(&outcome)
}
