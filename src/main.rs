use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use suggest_id::application::IdentifierSuggestionService;
use suggest_id::config::AppConfig;
use suggest_id::domain::identifier::{EntityType, TakenIdentifierLookup};
use suggest_id::infrastructure::{
    database,
    repositories::{InMemoryTakenIdentifierLookup, PostgresTakenIdentifierLookup},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "suggest-id", version, about = "Suggest a unique identifier for free-form text")]
struct Cli {
    /// Entity type to suggest for; also the table checked for collisions.
    #[arg(long)]
    entity: Option<String>,
    /// Check against an in-memory store instead of the database.
    #[arg(long)]
    offline: bool,
    /// Identifiers treated as taken in offline mode.
    #[arg(long, value_delimiter = ',')]
    taken: Vec<String>,
    /// Source text, one or more fragments.
    words: Vec<String>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let registry = Arc::new(config.registry()?);

    let entity = EntityType::new(cli.entity.as_deref().unwrap_or(config.default_entity()))?;
    let generation = registry
        .config_for(&entity)
        .ok_or_else(|| anyhow::anyhow!("no identifier generation declared for {entity}"))?;

    let lookup: Arc<dyn TakenIdentifierLookup> = if cli.offline {
        Arc::new(
            InMemoryTakenIdentifierLookup::new()
                .with_taken(generation.target_field(), cli.taken.iter().cloned()),
        )
    } else {
        let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
        Arc::new(PostgresTakenIdentifierLookup::new(pool, entity.as_str())?)
    };

    let service =
        IdentifierSuggestionService::new(Arc::clone(&registry)).with_lookup(entity.clone(), lookup);
    let id = service.suggest(&entity, cli.words).await?;
    println!("{id}");

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
