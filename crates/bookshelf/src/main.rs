use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::storage::DynamoDbRepository;
use bookshelf::{dispatch, AppState, Config, ResolverEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // JSON lines for CloudWatch
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .without_time(),
        )
        .init();

    let config = Config::from_env();
    if config.books_table.is_none() {
        tracing::error!("BOOKS_TABLE was not specified, every field will resolve to null");
    }
    tracing::info!(
        table = config.books_table.as_deref().unwrap_or_default(),
        field = config.resolver_field.map(|f| f.to_string()).unwrap_or_default(),
        "Starting resolver"
    );

    let repository = DynamoDbRepository::from_config(&config).await;
    let state = AppState::new(config, Arc::new(repository));

    run(service_fn(|event: LambdaEvent<ResolverEvent>| {
        let state = &state;
        async move { Ok::<Value, Error>(dispatch(state, event.payload).await) }
    }))
    .await
}
