//! Logger module
//!
//! Console logging for the server:
//! - Startup banner and shutdown notice (stdout)
//! - Optional access log lines (stdout)
//! - Errors and warnings (stderr)

mod format;

pub use format::AccessLogEntry;

/// Write to info/access output
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error output
fn write_error(message: &str) {
    eprintln!("{message}");
}

/// The two startup lines
pub fn log_server_start(port: u16) {
    write_info(&format!("Server running at http://localhost:{port}/"));
    write_info("Press Ctrl+C to stop the server");
}

pub fn log_shutdown() {
    write_info("\nShutting down, listening socket released");
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    write_error(&format!("[ERROR] Connection closed with error: {err}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
