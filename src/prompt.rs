//! Prompt templates for the three request kinds.
//!
//! Each renderer is a pure function that embeds user-supplied text into a
//! fixed instructional template. User text is embedded verbatim; no
//! truncation, escaping, or sanitization is performed.

/// Instruction block prepended to free-form chat requests.
const CHAT_PREAMBLE: &str = "\
You are an intelligent AI assistant that can help with various tasks.
Analyze the user's request and provide helpful, accurate responses.
If the request involves multiple steps, break them down clearly.
Be concise but thorough in your responses.";

/// Render a free-form chat prompt.
pub fn render_chat(user_input: &str) -> String {
    format!("{CHAT_PREAMBLE}\n\nUser Request: {user_input}")
}

/// Render a task-planning prompt.
///
/// The response is asked for four sections in order: task analysis,
/// step-by-step plan, potential challenges, success criteria.
pub fn render_plan(task: &str) -> String {
    format!(
        "\
You are an AI planning assistant. Analyze the following task and create a step-by-step plan:

Task: {task}

Please provide:
1. Task analysis
2. Step-by-step plan
3. Potential challenges
4. Success criteria

Be specific and actionable."
    )
}

/// Render a decision-analysis prompt.
///
/// Options are listed 1-indexed in the supplied order; the response is
/// asked for three sections: per-option analysis, recommended decision
/// with reasoning, potential outcomes.
pub fn render_decide(scenario: &str, options: &[String]) -> String {
    let options_text = options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {option}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "\
You are an AI decision-making assistant. Analyze the following scenario and options:

Scenario: {scenario}

Options:
{options_text}

Please provide:
1. Analysis of each option
2. Recommended decision with reasoning
3. Potential outcomes

Be logical and consider multiple factors."
    )
}
