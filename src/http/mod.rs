//! HTTP protocol layer module
//!
//! Response builders, MIME lookup, and the CORS finalization hook, decoupled
//! from routing and business logic.

pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_400_response, build_404_response, build_405_response, build_500_response,
    build_file_response, build_html_response, build_json_response, build_preflight_response,
};
