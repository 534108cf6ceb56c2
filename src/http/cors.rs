//! CORS header injection module
//!
//! Single finalization hook applied by the router to every outgoing response,
//! so the `Access-Control-Allow-Origin` invariant holds on every code path,
//! including error responses.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Method, Response};

pub const ALLOWED_METHODS: &str = "POST, GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Finalize a response's CORS headers.
///
/// Every response gets `Access-Control-Allow-Origin: *`. POST and OPTIONS
/// responses additionally advertise the allowed methods and headers, which is
/// what the scanner frontend's preflight checks expect.
pub fn apply(response: &mut Response<Full<Bytes>>, method: &Method) {
    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));

    if *method == Method::POST || *method == Method::OPTIONS {
        headers.insert(
            "Access-Control-Allow-Methods",
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            "Access-Control-Allow-Headers",
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}
