//! Mock JDE submission endpoint
//!
//! Simulates the JDE Orchestrator Studio order-submission API: accepts any
//! JSON payload, waits the configured downstream latency, and returns a
//! canned sales-order confirmation.

use crate::config::AppState;
use crate::http;
use crate::logger;
use chrono::Local;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Fixed path the scanner frontend posts order payloads to
pub const SUBMIT_PATH: &str = "/api/jde/submit";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Canned submission response body
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub order_number: String,
    pub timestamp: String,
}

/// Failure modes of a submission, mapped to 400 or 500
enum SubmitError {
    BadRequest(String),
    Internal(String),
}

/// Handle `POST /api/jde/submit`
pub async fn handle_submit<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body + Send,
    B::Data: Send,
    B::Error: std::fmt::Display,
{
    match process_submit(req, state).await {
        Ok(response) => response,
        Err(SubmitError::BadRequest(detail)) => {
            logger::log_warning(&format!("Rejected submission: {detail}"));
            http::build_400_response(&detail)
        }
        Err(SubmitError::Internal(detail)) => {
            logger::log_error(&format!("Submission failed: {detail}"));
            http::build_500_response(&detail)
        }
    }
}

async fn process_submit<B>(
    req: Request<B>,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, SubmitError>
where
    B: Body + Send,
    B::Data: Send,
    B::Error: std::fmt::Display,
{
    // The frontend always sends Content-Length; reject requests without it
    let content_length = req
        .headers()
        .get("content-length")
        .ok_or_else(|| SubmitError::BadRequest("missing Content-Length header".to_owned()))?;
    content_length
        .to_str()
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| SubmitError::BadRequest("invalid Content-Length header".to_owned()))?;

    let body = req
        .into_body()
        .collect()
        .await
        .map_err(|e| SubmitError::Internal(format!("failed to read request body: {e}")))?
        .to_bytes();

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| SubmitError::BadRequest(format!("malformed JSON payload: {e}")))?;

    logger::log_payload_received(payload_size(&payload));

    // Simulated downstream latency; every request observes the full delay
    let latency = Duration::from_millis(state.config.mock.latency_ms);
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let response = SubmitResponse {
        success: true,
        message: state.config.mock.message.clone(),
        order_number: state.config.mock.order_number.clone(),
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
    };

    Ok(http::build_json_response(&response))
}

/// Size of the decoded payload as logged: element count for objects and
/// arrays, character count for strings, zero for other scalars.
fn payload_size(payload: &Value) -> usize {
    match payload {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        Value::String(s) => s.chars().count(),
        _ => 0,
    }
}
