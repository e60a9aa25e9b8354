// Public modules
pub mod chat_completion;
pub mod usage;

// Re-exports
pub use chat_completion::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, MessageRole,
};
pub use usage::Usage;
