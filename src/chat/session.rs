//! Core chat session management.
//!
//! This module provides the `ChatSession` struct, the single dispatch
//! boundary between classified commands and the completion client. A
//! session holds the one long-lived client handle and nothing else; no
//! conversation history is kept across iterations.

use async_trait::async_trait;

use crate::chat::commands::Command;
use crate::client::AzureOpenAI;
use crate::error::Result;
use crate::observability;
use crate::prompt::{render_chat, render_decide, render_plan};
use crate::render::Renderer;

/// Fallback printed when a free-form chat completion fails.
pub const CHAT_FALLBACK: &str =
    "I apologize, but I encountered an error while processing your request.";

/// Fallback printed when a plan completion fails.
pub const PLAN_FALLBACK: &str = "I couldn't analyze the task. Please try again.";

/// Fallback printed when a decision completion fails.
pub const DECIDE_FALLBACK: &str = "I couldn't analyze the decision. Please try again.";

/// Completion behavior expected by the chat session.
///
/// [`AzureOpenAI`] is the production implementation; tests substitute
/// failing or canned backends at this seam.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Submit a rendered prompt and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl CompletionBackend for AzureOpenAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        AzureOpenAI::complete(self, prompt).await
    }
}

/// A chat session owning the completion client.
///
/// The client handle is fixed after construction and shared read-only
/// across loop iterations.
pub struct ChatSession<C: CompletionBackend> {
    client: C,
}

impl<C: CompletionBackend> ChatSession<C> {
    /// Creates a new chat session around a completion backend.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Dispatches one classified command.
    ///
    /// Returns `Some(response)` for commands that produce output
    /// (`Chat`/`Plan`/`Decide`/`Invalid`) and `None` for commands handled
    /// by the caller (`Empty`/`Help`/`Exit`). A failed completion is
    /// caught here: the error is reported through the renderer as an
    /// inline line and the per-command apologetic fallback is returned,
    /// so a single failure never terminates the loop.
    pub async fn respond(
        &self,
        command: &Command,
        renderer: &mut dyn Renderer,
    ) -> Option<String> {
        let (prompt, fallback) = match command {
            Command::Chat(input) => (render_chat(input), CHAT_FALLBACK),
            Command::Plan(task) => (render_plan(task), PLAN_FALLBACK),
            Command::Decide { scenario, options } => {
                (render_decide(scenario, options), DECIDE_FALLBACK)
            }
            Command::Invalid(usage) => return Some(usage.clone()),
            Command::Empty | Command::Help | Command::Exit => return None,
        };

        observability::COMMANDS_DISPATCHED.click();
        match self.client.complete(&prompt).await {
            Ok(text) => Some(text),
            Err(err) => {
                observability::COMMAND_FALLBACKS.click();
                renderer.print_error(&err.to_string());
                Some(fallback.to_string())
            }
        }
    }
}
