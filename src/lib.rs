//! BOL barcode scanner server library
//!
//! Serves the scanner's static assets and exposes a mock JDE Orchestrator
//! endpoint (`POST /api/jde/submit`) that fabricates a sales-order response
//! after a simulated downstream delay.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
