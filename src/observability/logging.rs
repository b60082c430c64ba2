//! Debug sinks and sensitive data redaction.
//!
//! A [`DebugSink`] receives the diagnostic lines a client emits while in
//! debug mode. Sinks are owned by clients, so two clients never share
//! one unless the caller hands them the same `Arc`.

use chrono::Local;
use parking_lot::Mutex;
use std::io::{self, Stdout, Write};
use std::panic::Location;
use std::path::Path;

/// Line prefix used by the default stdout sink
pub const DEFAULT_PREFIX: &str = "slack-web-client ";

/// Destination for debug output
pub trait DebugSink: Send + Sync {
    /// Write one diagnostic line originating at `location`
    fn log(&self, location: &'static Location<'static>, message: &str);
}

/// Sink writing `<prefix><date> <time> <file>:<line>: <message>` lines
pub struct WriterSink<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

/// Sink writing to standard output
pub type StdoutSink = WriterSink<Stdout>;

impl<W: Write + Send> WriterSink<W> {
    /// Create a sink over an arbitrary writer
    pub fn new(writer: W, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<Stdout> {
    /// The sink installed when debug mode is enabled without a logger
    pub fn stdout() -> Self {
        Self::new(io::stdout(), DEFAULT_PREFIX)
    }
}

impl<W: Write + Send> DebugSink for WriterSink<W> {
    fn log(&self, location: &'static Location<'static>, message: &str) {
        let line = format_line(&self.prefix, location, message);
        // Debug output is best effort.
        let _ = self.writer.lock().write_all(line.as_bytes());
    }
}

impl<W: Write + Send> std::fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterSink")
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// Sink forwarding debug lines to `tracing` at DEBUG level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn log(&self, location: &'static Location<'static>, message: &str) {
        tracing::debug!(
            target: "slack_web_client::debug",
            file = location.file(),
            line = location.line(),
            "{}",
            message.trim_end_matches('\n')
        );
    }
}

fn format_line(prefix: &str, location: &Location<'_>, message: &str) -> String {
    let file = Path::new(location.file())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_else(|| location.file());

    let mut line = format!(
        "{}{} {}:{}: {}",
        prefix,
        Local::now().format("%Y/%m/%d %H:%M:%S"),
        file,
        location.line(),
        message
    );
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Redact token from a string, preserving prefix for debugging
pub fn redact_token(token: &str) -> String {
    match token.get(..8) {
        Some(prefix) if token.len() > 8 => format!("{}...[REDACTED]", prefix),
        _ => "[REDACTED]".to_string(),
    }
}

/// Render form fields for logging, hiding sensitive values
pub fn redact_fields(fields: &[(String, String)]) -> String {
    const SENSITIVE: [&str; 4] = ["token", "secret", "password", "client_secret"];

    fields
        .iter()
        .map(|(key, value)| {
            if SENSITIVE.iter().any(|s| key.eq_ignore_ascii_case(s)) {
                format!("{}={}", key, redact_token(value))
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
