//! Interactive chat application backed by an Azure OpenAI deployment.
//!
//! This binary provides a line-oriented REPL that forwards user text to a
//! hosted chat-completions deployment and prints the response.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage; reads appsettings.json from the working directory
//! delphi-chat
//!
//! # Point at a different settings file
//! delphi-chat --settings conf/agent.json
//!
//! # Disable colors (useful for piping output)
//! delphi-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting:
//! - any other text is sent as free-form chat
//! - `/plan <task>` - create a step-by-step plan for a task
//! - `/decide <scenario> | <option1> | <option2> [| ...]` - decision help
//! - `help` - show available commands
//! - `exit` - quit the application

use std::sync::Arc;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use delphi::chat::{
    ChatArgs, ChatConfig, ChatSession, Command, PlainTextRenderer, Renderer, classify, help_text,
};
use delphi::{AzureOpenAI, StderrLogger, config};

/// Main entry point for the delphi-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("delphi-chat [OPTIONS]");
    let chat_config = ChatConfig::from(args);
    let mut renderer = PlainTextRenderer::with_color(chat_config.use_color);

    let settings = match config::load_from(&chat_config.settings_path) {
        Ok(settings) => settings,
        Err(err) => {
            // Fatal startup condition: remediate and terminate without
            // entering the loop.
            renderer.print_error(&err.to_string());
            println!("Azure OpenAI settings not configured properly.");
            println!(
                "Please check your {} file.",
                chat_config.settings_path.display()
            );
            println!("Make sure you have:");
            for field in err.missing_fields() {
                println!("- {field}");
            }
            return Ok(());
        }
    };

    let client = match AzureOpenAI::new(&settings) {
        Ok(client) => client,
        Err(err) => {
            renderer.print_error(&format!("Failed to initialize AI agent: {err}"));
            println!("Please check your Azure OpenAI configuration.");
            return Ok(());
        }
    };
    let client = if chat_config.verbose {
        client.with_logger(Arc::new(StderrLogger::new()))
    } else {
        client
    };

    let session = ChatSession::new(client);
    let mut rl = DefaultEditor::new()?;

    println!("Azure OpenAI chat assistant started (deployment: {}).", settings.deployment_name);
    println!("Type 'help' for available commands or 'exit' to quit.\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let command = classify(&line);
                if command == Command::Empty {
                    continue;
                }
                let _ = rl.add_history_entry(line.trim());

                match &command {
                    Command::Exit => {
                        println!("Goodbye!");
                        break;
                    }
                    Command::Help => {
                        for line in help_text().lines() {
                            println!("    {line}");
                        }
                        println!();
                    }
                    _ => {
                        renderer.print_info("Processing your request...\n");
                        if let Some(response) = session.respond(&command, &mut renderer).await {
                            renderer.print_label();
                            renderer.print_text(&response);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - re-prompt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {err}"));
                break;
            }
        }
    }

    Ok(())
}
