//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method/path dispatch, then CORS
//! finalization of whatever response comes back.

use crate::config::AppState;
use crate::handler::{static_files, submit};
use crate::http::{self, cors};
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// Generic over the request body so tests can drive it with `Full<Bytes>`
/// while the server feeds it `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body + Send,
    B::Data: Send,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    if state.config.logging.access_log {
        logger::log_request(&method, req.uri(), req.version());
    }

    let mut response = match method {
        Method::GET | Method::HEAD => {
            static_files::serve(&state, &path, method == Method::HEAD).await
        }
        Method::POST if path == submit::SUBMIT_PATH => submit::handle_submit(req, &state).await,
        Method::POST => {
            logger::log_warning(&format!("POST to unknown path: {path}"));
            http::build_404_response()
        }
        Method::OPTIONS => http::build_preflight_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    cors::apply(&mut response, &method);
    Ok(response)
}
