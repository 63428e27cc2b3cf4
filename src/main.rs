//! Main entry point for the Rolodex application.
//! Opens the contact database and serves the web interface.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rolodex::infra::config::Config;
use rolodex::infra::db::Database;
use rolodex::state::AppState;
use rolodex::web;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "Contact-management web application", long_about = None)]
struct Args {
    /// Port to listen on (overrides ROLODEX_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file location (overrides ROLODEX_DB_PATH)
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::load().with_overrides(args.port, args.db_path);

    // A database that can't be opened or initialized is fatal at startup.
    let db = match config.db_path.clone() {
        Some(path) => Database::open_at(path),
        None => Database::open(),
    }
    .context("failed to initialize the contact database")?;

    let app = web::router(AppState::new(db));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
