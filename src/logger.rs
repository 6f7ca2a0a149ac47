//! Logger module
//!
//! Plain-function logging for the server: startup banner, timestamped access
//! lines, warnings and errors to stderr.

use crate::config::Config;
use chrono::Utc;
use hyper::Method;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Static site server started");
    println!("Listening on: http://{addr}");
    println!("Serving root: {}", config.site.root);
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

/// Log one served request in access-log form.
pub fn log_access(method: &Method, path: &str, status: u16, bytes: usize) {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
    println!("[{now}] {method} {path} {status} {bytes}");
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
    println!("\n[Shutdown] Stopping server");
}
