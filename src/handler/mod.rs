//! Request handler module
//!
//! Routing dispatch plus the two business handlers: static file serving and
//! the mock JDE submission endpoint.

pub mod router;
pub mod static_files;
pub mod submit;

// Re-export main entry point
pub use router::handle_request;
