//! Logging trait for client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows callers to
//! capture every prompt, completion, and failure passing through the
//! [`AzureOpenAI`](crate::AzureOpenAI) client.

use std::io::Write;

use crate::error::Error;

/// A trait for logging client operations.
///
/// Implement this trait to capture and record all API interactions. The
/// client calls each hook at most once per `complete` invocation.
pub trait ClientLogger: Send + Sync {
    /// Log an outbound prompt before the request is sent.
    fn log_prompt(&self, prompt: &str);

    /// Log the completion text of a successful call.
    fn log_completion(&self, completion: &str);

    /// Log the failure of a single call.
    fn log_error(&self, error: &Error);
}

/// A [`ClientLogger`] that writes one line per event to stderr.
///
/// Wired up by the chat binary behind its `--verbose` flag.
#[derive(Debug, Default)]
pub struct StderrLogger;

impl StderrLogger {
    /// Creates a new stderr logger.
    pub fn new() -> Self {
        Self
    }

    fn write_line(&self, label: &str, body: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "[{label}] {body}");
    }
}

impl ClientLogger for StderrLogger {
    fn log_prompt(&self, prompt: &str) {
        self.write_line("prompt", &format!("{} bytes", prompt.len()));
    }

    fn log_completion(&self, completion: &str) {
        self.write_line("completion", &format!("{} bytes", completion.len()));
    }

    fn log_error(&self, error: &Error) {
        self.write_line("error", &error.to_string());
    }
}
