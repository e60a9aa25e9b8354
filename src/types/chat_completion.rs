//! Request and response types for the Azure OpenAI chat-completions API.

use serde::{Deserialize, Serialize};

use crate::types::Usage;

/// The role of a chat message.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// A message supplying instructions or context.
    System,
    /// A message from the user.
    User,
    /// A message generated by the model.
    Assistant,
}

/// One message in a chat-completions conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who produced the message.
    pub role: MessageRole,

    /// The text content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Create a new user message with the given content.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Parameters for one chat-completions request.
///
/// The client submits a single rendered prompt as one user message; there
/// is no multi-turn conversation memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// The messages to complete.
    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate, if overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature, if overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatCompletionRequest {
    /// Create a request carrying one user message.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: None,
            temperature: None,
        }
    }
}

/// One generated choice in a chat-completions response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatChoice {
    /// Position of this choice in the response.
    #[serde(default)]
    pub index: u32,

    /// The generated message.
    pub message: ChatMessage,

    /// Why generation stopped, when the service reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The response to a chat-completions request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// Service-assigned identifier for the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The model that produced the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// The generated choices; the client reads the first.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,

    /// Token usage for the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Returns the text of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    #[test]
    fn request_carries_one_user_message() {
        let request = ChatCompletionRequest::from_prompt("hello");
        let json = to_value(&request).unwrap();

        assert_eq!(
            json,
            json!({
                "messages": [
                    {"role": "user", "content": "hello"}
                ]
            })
        );
    }

    #[test]
    fn response_text_reads_first_choice() {
        let response: ChatCompletionResponse = from_value(json!({
            "id": "chatcmpl-123",
            "model": "gpt-4o",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hi there."},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 9, "completion_tokens": 4, "total_tokens": 13}
        }))
        .unwrap();

        assert_eq!(response.text(), Some("Hi there."));
        assert_eq!(response.usage.unwrap().total_tokens, 13);
    }

    #[test]
    fn response_without_choices_has_no_text() {
        let response: ChatCompletionResponse = from_value(json!({"choices": []})).unwrap();
        assert_eq!(response.text(), None);
    }
}
