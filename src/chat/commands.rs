//! Input-line classification for the chat application.
//!
//! Each line of input is classified into exactly one [`Command`], which is
//! constructed per line and discarded after dispatch. The classification
//! order matches the router contract: blank, `exit`, `help`, `/plan`,
//! `/decide`, then free-form chat as the catch-all.

/// The literal usage hint printed when `/decide` has fewer than 2 options.
pub const DECIDE_USAGE: &str =
    "Please use format: /decide scenario | option1 | option2 | option3";

/// Separator between the `/decide` scenario and its options.
const DECIDE_SEPARATOR: &str = " | ";

/// A classified line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A blank or whitespace-only line; ignored without output.
    Empty,

    /// Terminate the loop.
    Exit,

    /// Print the static help text.
    Help,

    /// Create a step-by-step plan for a task.
    Plan(String),

    /// Analyze a scenario with at least two options, in supplied order.
    Decide {
        /// The scenario to decide about.
        scenario: String,
        /// The candidate options, in the order supplied.
        options: Vec<String>,
    },

    /// Free-form chat input.
    Chat(String),

    /// A malformed invocation; carries the usage hint to print. The
    /// completion client is never called for these.
    Invalid(String),
}

/// Classifies one line of user input.
///
/// # Examples
///
/// ```
/// # use delphi::chat::{Command, classify};
/// assert_eq!(classify("EXIT"), Command::Exit);
/// assert_eq!(classify("/plan ship it"), Command::Plan("ship it".to_string()));
/// assert_eq!(classify("hello"), Command::Chat("hello".to_string()));
/// ```
pub fn classify(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Empty;
    }
    if input.eq_ignore_ascii_case("exit") {
        return Command::Exit;
    }
    if input.eq_ignore_ascii_case("help") {
        return Command::Help;
    }

    if let Some(task) = strip_prefix_ignore_ascii_case(input, "/plan ")
        && !task.trim().is_empty()
    {
        return Command::Plan(task.trim().to_string());
    }

    if let Some(rest) = strip_prefix_ignore_ascii_case(input, "/decide ")
        && rest.contains(DECIDE_SEPARATOR)
    {
        let mut parts = rest.split(DECIDE_SEPARATOR).map(String::from);
        let scenario = parts.next().unwrap_or_default();
        let options: Vec<String> = parts.collect();
        // An upper bound and non-empty option text are deliberately not
        // enforced.
        if options.len() < 2 {
            return Command::Invalid(DECIDE_USAGE.to_string());
        }
        return Command::Decide { scenario, options };
    }

    Command::Chat(input.to_string())
}

/// Strips an ASCII prefix regardless of letter casing.
fn strip_prefix_ignore_ascii_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let (head, tail) = input.as_bytes().split_at_checked(prefix.len())?;
    if head.eq_ignore_ascii_case(prefix.as_bytes()) {
        // The prefix is pure ASCII, so the split lands on a char boundary.
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  <message>                       Chat with the assistant
  /plan <task>                    Create a step-by-step plan for a task
  /decide <scenario> | <option1> | <option2> [| ...]
                                  Get help making a decision
  help                            Show this help message
  exit                            Quit the application

Examples:
  What is machine learning?
  /plan organize a team meeting
  /decide choose a programming language | Python | C# | JavaScript"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(classify(""), Command::Empty);
        assert_eq!(classify("   "), Command::Empty);
        assert_eq!(classify("\t \t"), Command::Empty);
    }

    #[test]
    fn exit_is_case_insensitive() {
        assert_eq!(classify("exit"), Command::Exit);
        assert_eq!(classify("EXIT"), Command::Exit);
        assert_eq!(classify("Exit"), Command::Exit);
        assert_eq!(classify("  exit  "), Command::Exit);
    }

    #[test]
    fn help_is_case_insensitive() {
        assert_eq!(classify("help"), Command::Help);
        assert_eq!(classify("HELP"), Command::Help);
    }

    #[test]
    fn plan_extracts_task() {
        assert_eq!(
            classify("/plan organize a team meeting"),
            Command::Plan("organize a team meeting".to_string())
        );
        assert_eq!(
            classify("/PLAN organize a team meeting"),
            Command::Plan("organize a team meeting".to_string())
        );
    }

    #[test]
    fn plan_without_task_is_chat() {
        // "/plan" with no remainder does not classify as a plan command.
        assert_eq!(classify("/plan"), Command::Chat("/plan".to_string()));
        assert_eq!(classify("/plan   "), Command::Chat("/plan".to_string()));
    }

    #[test]
    fn decide_splits_scenario_and_options() {
        assert_eq!(
            classify("/decide choose a language | Python | C# | JavaScript"),
            Command::Decide {
                scenario: "choose a language".to_string(),
                options: vec![
                    "Python".to_string(),
                    "C#".to_string(),
                    "JavaScript".to_string(),
                ],
            }
        );
    }

    #[test]
    fn decide_with_one_option_is_invalid() {
        assert_eq!(
            classify("/decide pick one | onlyOption"),
            Command::Invalid(DECIDE_USAGE.to_string())
        );
    }

    #[test]
    fn decide_without_separator_is_chat() {
        assert_eq!(
            classify("/decide no separator here"),
            Command::Chat("/decide no separator here".to_string())
        );
    }

    #[test]
    fn decide_allows_empty_option_text() {
        assert_eq!(
            classify("/decide s |  | B"),
            Command::Decide {
                scenario: "s".to_string(),
                options: vec![String::new(), "B".to_string()],
            }
        );
    }

    #[test]
    fn decide_allows_many_options() {
        let line = "/decide s | a | b | c | d | e | f";
        match classify(line) {
            Command::Decide { options, .. } => assert_eq!(options.len(), 6),
            other => panic!("expected Decide, got {other:?}"),
        }
    }

    #[test]
    fn everything_else_is_chat() {
        assert_eq!(
            classify("What is machine learning?"),
            Command::Chat("What is machine learning?".to_string())
        );
        assert_eq!(
            classify("/unknown command"),
            Command::Chat("/unknown command".to_string())
        );
        // Multi-byte input must not trip the prefix comparison.
        assert_eq!(classify("héllo"), Command::Chat("héllo".to_string()));
    }

    #[test]
    fn help_text_documents_every_command_form() {
        let help = help_text();
        assert!(help.contains("/plan"));
        assert!(help.contains("/decide"));
        assert!(help.contains("help"));
        assert!(help.contains("exit"));
        assert!(help.contains("Chat with the assistant"));
    }
}
