use maskngo::{
    config::Config,
    error::Error,
    service::{renta::RentaService, seed::seed_admin},
    startup,
    util::time::now,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;

    seed_admin(&db, config).await?;

    let vencidas = RentaService::new(&db).mark_overdue(now()).await?;

    tracing::info!(vencidas, "MaskNGo database ready");

    Ok(())
}
