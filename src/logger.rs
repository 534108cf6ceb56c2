//! Logger module
//!
//! Stdout/stderr logging helpers. Operational output only; nothing downstream
//! depends on these lines.

use crate::config::Config;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("BOL scanner server started");
    println!("Listening on: http://{addr}");
    println!("Serving files from: {}", config.static_files.root);
    println!(
        "Mock JDE endpoint: POST /api/jde/submit ({} ms simulated latency)",
        config.mock.latency_ms
    );
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(bytes: usize) {
    println!("[Response] {bytes} bytes sent");
}

/// Size of the decoded JSON payload received by the mock endpoint.
///
/// Counts top-level entries of the parsed value, not wire bytes, matching the
/// reference server's log line.
pub fn log_payload_received(entries: usize) {
    println!("[JDE] Received payload: {entries} entries");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Interrupt received, stopping server");
}
