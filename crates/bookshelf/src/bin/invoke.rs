use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use bookshelf_core::storage::BookRepository;
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::storage::{DynamoDbRepository, InMemoryRepository};
use bookshelf::{dispatch, AppState, Config, ResolverEvent};

/// Replay AppSync resolver events against the book handlers
#[derive(Parser, Debug)]
#[command(name = "bookshelf-invoke")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file holding one resolver event or an array of events
    #[arg(long, short)]
    events: PathBuf,

    /// Storage backend the handlers run against
    #[arg(long, value_enum, default_value_t = Store::Memory)]
    store: Store,

    /// Books table name
    #[arg(long, short, env = "BOOKS_TABLE")]
    table: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Store {
    /// Process-local table, discarded on exit
    Memory,
    /// DynamoDB through the default AWS credential chain
    Dynamodb,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let events = read_events(&cli.events)?;

    let config = Config {
        books_table: cli.table.filter(|t| !t.trim().is_empty()),
        ..Config::from_env()
    };

    let books: Arc<dyn BookRepository> = match cli.store {
        Store::Memory => Arc::new(InMemoryRepository::new()),
        Store::Dynamodb => Arc::new(DynamoDbRepository::from_config(&config).await),
    };
    let state = AppState::new(config, books);

    for event in events {
        let result = dispatch(&state, event).await;
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

/// Reads a single event or an array of events.
fn read_events(path: &Path) -> Result<Vec<ResolverEvent>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    let events = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<ResolverEvent>, _>>(),
        value => serde_json::from_value(value).map(|event| vec![event]),
    };

    events.with_context(|| format!("Invalid resolver event in {}", path.display()))
}
