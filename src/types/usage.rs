use serde::{Deserialize, Serialize};

/// Token usage reported for one chat-completions call.
///
/// The service bills and rate-limits by token counts; the client treats
/// these as informational only.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// The number of tokens in the submitted prompt.
    pub prompt_tokens: i32,

    /// The number of tokens in the generated completion.
    pub completion_tokens: i32,

    /// The sum of prompt and completion tokens.
    pub total_tokens: i32,
}

impl Usage {
    /// Create a new `Usage` with the given prompt and completion tokens.
    pub fn new(prompt_tokens: i32, completion_tokens: i32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn usage_serializes_all_fields() {
        let usage = Usage::new(50, 100);
        let json = to_value(usage).unwrap();

        assert_eq!(
            json,
            json!({
                "prompt_tokens": 50,
                "completion_tokens": 100,
                "total_tokens": 150
            })
        );
    }

    #[test]
    fn usage_deserializes() {
        let usage: Usage = serde_json::from_value(json!({
            "prompt_tokens": 12,
            "completion_tokens": 34,
            "total_tokens": 46
        }))
        .unwrap();
        assert_eq!(usage.prompt_tokens, 12);
        assert_eq!(usage.completion_tokens, 34);
        assert_eq!(usage.total_tokens, 46);
    }
}
