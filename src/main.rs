//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nfl_leaders::{
    cli::{Commands, NflLeaders},
    commands::{
        ingest::{handle_backfill, handle_ingest},
        serve::handle_serve,
    },
    Result,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let app = NflLeaders::parse();

    match app.command {
        Commands::Ingest {
            season,
            week,
            db,
            base_url,
        } => handle_ingest(season, week, db, base_url).await?,

        Commands::Backfill {
            season,
            from_week,
            to_week,
            db,
            base_url,
        } => handle_backfill(season, from_week, to_week, db, base_url).await?,

        Commands::Serve {
            bind,
            season,
            db,
            base_url,
        } => handle_serve(bind, season, db, base_url).await?,
    }

    Ok(())
}
