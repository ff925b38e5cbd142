//! Logger module
//!
//! Logging for the upload server:
//! - Server lifecycle logging
//! - Access logging in Common Log Format
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Write to info/access log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_starting() {
    write_info("Starting server...");
}

/// Log the startup banner. Secrets (account key, API key) are never logged.
pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Upload server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Upload endpoint: http://{addr}/api/upload"));
    write_info(&format!(
        "Storage account: {}",
        config.storage_account_name
    ));
    write_info(&format!("Container: {}", config.container_name));
    write_info(&format!("Public base URL: {}", config.base_url));
    write_info("======================================\n");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.format());
}

pub fn log_upload_received() {
    write_info("[UPLOAD] Received POST request");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_shutdown() {
    write_info("======================================");
    write_info("Shutdown signal received, server stopping");
    write_info("======================================");
}
