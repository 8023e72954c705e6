//! Support chat entry point.
//!
//! Initialises the pipeline from environment configuration and runs an
//! interactive REPL loop. Type `exit` (or press Ctrl+C / EOF) to end the
//! session; the conversation history is discarded at teardown.

use std::io::{self, BufRead, Write};

use support_chat::config::load_config;
use support_chat::error::SupportChatError;
use support_chat::history::Session;
use support_chat::llm_api::OpenAiCompatClient;
use support_chat::pipeline::Pipeline;
use support_chat::store::MemoryTurnStore;

#[tokio::main]
async fn main() {
    // Initialise structured logging — default level WARN to keep output clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Load configuration from .env / system environment.
    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Please check your .env file. See .env.example for required variables.");
            std::process::exit(1);
        }
    };

    let oracle = Box::new(OpenAiCompatClient::new(&config));
    let store = Box::new(MemoryTurnStore::new());
    let mut pipeline = Pipeline::new(config, oracle, store);
    let mut session = Session::new();

    println!("Support Chat (type 'exit' to end)");
    println!("Note: This is a supportive tool and not a replacement for professional help.\n");
    println!("Bot: {}\n", pipeline.greeting());

    // REPL loop — one pipeline call per user input line.
    let stdin = io::stdin();
    loop {
        print!("You: ");
        io::stdout().flush().unwrap_or_default();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input.eq_ignore_ascii_case("exit") {
                    break;
                }

                match pipeline.process_turn(&mut session, input).await {
                    Ok(reply) => println!("\nBot: {}\n", reply),
                    Err(SupportChatError::InputValidation(msg)) => {
                        println!("\nBot: {}\n", msg);
                    }
                    Err(e) => {
                        eprintln!("\nError: {}\n", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }

    println!("\nTake care. Reaching out was a good step.");
}
