use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use haisha_core::config::{DEFAULT_OPENAI_MODEL, SecretConfig, normalize_credential};
use haisha_core::session::SessionContext;
use haisha_core::storage::SecretStorage;
use haisha_interaction::{
    InteractionManager, InteractionResult, OpenAIProvider, ResolverConfig, ResponseResolver,
};

mod helper;

use helper::{CliHelper, records_history};

#[derive(Parser)]
#[command(name = "haisha")]
#[command(about = "AI dispatch assistant demo - proposes staff-to-site assignments", long_about = None)]
struct Args {
    /// OpenAI API key. Without one, replies come from a canned mock template.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Chat model for the delegated path.
    #[arg(long, env = "OPENAI_MODEL_NAME")]
    model: Option<String>,

    /// Artificial thinking time of the mock path, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    mock_delay_ms: u64,

    /// Seed for the initial site table.
    #[arg(long)]
    seed: Option<u64>,
}

/// The main entry point for the Haisha REPL.
///
/// Each instruction is resolved before the next prompt is shown, so the loop
/// blocks for the mock delay or the API round trip.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let secrets = load_secrets();

    let credential = normalize_credential(args.api_key.as_deref())
        .or_else(|| secrets.openai_api_key().map(str::to_string));
    let model = args
        .model
        .clone()
        .or_else(|| secrets.openai_model().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

    let context = match args.seed {
        Some(seed) => SessionContext::with_rng(&mut StdRng::seed_from_u64(seed)),
        None => SessionContext::new(),
    };
    let resolver = ResponseResolver::new(
        std::sync::Arc::new(OpenAIProvider::new(model)),
        ResolverConfig {
            mock_delay: Duration::from_millis(args.mock_delay_ms),
            ..ResolverConfig::default()
        },
    );
    let mut manager = InteractionManager::new(context, resolver, credential);

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== 配車最適化AIアシスタント (Prototype) ===".bright_magenta().bold());
    println!(
        "{}",
        "ベテラン配車担当者の判断ロジックをAIに移植し、自然言語の指示でルート組みを提案させるデモです。"
            .bright_black()
    );
    println!();
    for command in ["/mode", "/staff", "/sites", "/quick"] {
        print_result(&manager.handle_input(command).await);
    }
    println!();
    if let Some(greeting) = manager.context().transcript().last() {
        print_assistant(&greeting.content);
    }
    println!("{}", "Type '/help' for commands or 'quit' to exit.".bright_black());

    // ===== Main REPL Loop =====
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if records_history(&line) {
                    let _ = rl.add_history_entry(trimmed);
                }
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if let Some(instruction) = manager.instruction_for(&line) {
                    println!("{}", format!("> {}", instruction).green());
                    println!("{}", "ベテランの思考ロジックで検討中...".bright_black());
                }

                match manager.handle_input(&line).await {
                    InteractionResult::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    InteractionResult::TablesRegenerated => {
                        println!("{}", "Tables regenerated.".bright_green());
                        for command in ["/staff", "/sites"] {
                            print_result(&manager.handle_input(command).await);
                        }
                    }
                    result => print_result(&result),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Reads `secret.json`, falling back to an empty config on any problem.
fn load_secrets() -> SecretConfig {
    let loaded = SecretStorage::new().and_then(|storage| storage.load_or_default());
    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Ignoring secret file: {}", err);
            SecretConfig::default()
        }
    }
}

fn print_assistant(content: &str) {
    for line in content.lines() {
        println!("{}", line.bright_blue());
    }
}

fn print_result(result: &InteractionResult) {
    match result {
        InteractionResult::NewMessage(message) => {
            print_assistant(message);
            println!();
        }
        InteractionResult::Info(text) => {
            for line in text.lines() {
                println!("{}", line.bright_black());
            }
        }
        InteractionResult::TablesRegenerated => {
            println!("{}", "Tables regenerated.".bright_green());
        }
        InteractionResult::NoOp => {
            println!("{}", "Unknown command".bright_black());
        }
        InteractionResult::Quit => {}
    }
}
