//! Chat application module for the interactive REPL.
//!
//! This module provides the line-oriented command loop built on top of the
//! delphi client library:
//!
//! - [`commands`]: classification of input lines into commands
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: the single command-dispatch boundary

mod commands;
mod config;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{Command, DECIDE_USAGE, classify, help_text};
pub use config::{ChatArgs, ChatConfig};
pub use session::{
    CHAT_FALLBACK, ChatSession, CompletionBackend, DECIDE_FALLBACK, PLAN_FALLBACK,
};
