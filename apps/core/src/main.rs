// Kindred terminal front end
// Presentation only: the typing delay, name capture and farewell live here, never in the engine.

use anyhow::{Context, Result};
use std::env;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{sleep, Duration};
use tracing::{error, info};

use kindred_core::logging::init_tracing;
use kindred_core::{ConversationSession, EngineConfig, IntentCatalog};

const ENV_CATALOG_PATH: &str = "KINDRED_CATALOG_PATH";
const ENV_TYPING_DELAY_MS: &str = "KINDRED_TYPING_DELAY_MS";
const DEFAULT_TYPING_DELAY_MS: u64 = 20;

const EXIT_WORDS: &[&str] = &["quit", "exit", "bye"];

fn banner() {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("Welcome to Kindred, a mental health support companion");
    println!("I'm here to provide information and emotional support.");
    println!("You can share how you're feeling, ask questions about mental health,");
    println!("or just chat if you need someone to talk to.");
    println!("Type 'quit' to exit, '/insights' for a summary, '/clear' to start over.");
    println!("{rule}");
}

fn name_suffix(name: Option<&str>) -> String {
    name.map(|n| format!(", {}", n)).unwrap_or_default()
}

/// Prints character by character with a fixed delay.
async fn type_out(text: &str, delay: Duration) -> Result<()> {
    let mut stdout = std::io::stdout();
    for ch in text.chars() {
        write!(stdout, "{ch}")?;
        stdout.flush()?;
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
    writeln!(stdout)?;
    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

fn load_catalog() -> Result<IntentCatalog> {
    match env::var(ENV_CATALOG_PATH) {
        Ok(path) if !path.trim().is_empty() => {
            let extra = IntentCatalog::from_json_file(&path)
                .with_context(|| format!("failed to load intent catalog from {}", path))?;
            // The file's intents come after the built-in ones, as extensions
            Ok(IntentCatalog::builtin().extend(extra)?)
        }
        _ => Ok(IntentCatalog::builtin()),
    }
}

fn typing_delay() -> Result<Duration> {
    let ms = match env::var(ENV_TYPING_DELAY_MS) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{} has invalid value '{}'", ENV_TYPING_DELAY_MS, raw))?,
        Err(_) => DEFAULT_TYPING_DELAY_MS,
    };
    Ok(Duration::from_millis(ms))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing("warn");

    let config = EngineConfig::from_env()?;
    let catalog = Arc::new(load_catalog()?);
    let delay = typing_delay()?;
    info!(intents = catalog.len(), ?config, "starting kindred {}", env!("CARGO_PKG_VERSION"));

    let mut session = ConversationSession::with_config(catalog, &config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    banner();
    println!("To make our conversation more personal, may I know your name?");
    let name = prompt(&mut lines, "Your name (or press Enter to skip): ")
        .await?
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    match &name {
        Some(n) => type_out(&format!("Nice to meet you, {}! How are you feeling today?", n), delay).await?,
        None => type_out("How are you feeling today?", delay).await?,
    }

    while let Some(input) = prompt(&mut lines, "You: ").await? {
        let trimmed = input.trim();

        if EXIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
            let farewell = format!(
                "Take care of yourself{}! Remember that seeking support is a sign of strength, not weakness.",
                name_suffix(name.as_deref())
            );
            type_out(&format!("Kindred: {}", farewell), delay).await?;
            break;
        }

        match trimmed {
            "/insights" => {
                match serde_json::to_string_pretty(&session.insights()) {
                    Ok(json) => println!("{json}"),
                    Err(e) => error!("failed to serialize insights: {}", e),
                }
                continue;
            }
            "/clear" => {
                session.clear_history();
                println!("(conversation cleared)");
                continue;
            }
            _ => {}
        }

        let reply = session.process_message(&input, name.as_deref());
        type_out(&format!("Kindred: {}", reply.content), delay).await?;
    }

    Ok(())
}
