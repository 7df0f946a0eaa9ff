use employee_tracker::{Config, DialoguerPrompter, Menu, RosterStorage};
use mimalloc::MiMalloc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        seed = cfg.seed
    );

    let storage = match RosterStorage::connect(&cfg.database_url).await {
        Ok(storage) => storage,
        Err(e) => {
            error!(database_url = %cfg.database_url, error = %e, "connection failed");
            return Err(e.into());
        }
    };
    println!("Connected to the database");

    storage.init_schema().await?;
    if cfg.seed {
        storage.seed_if_empty().await?;
    }

    let menu = Menu::new(storage, DialoguerPrompter::new(), std::io::stdout());
    menu.run().await?;
    Ok(())
}
