//! Bridge Announcer - Matrix bot for WhatsApp/Signal bridge rooms.
//!
//! Watches the account for newly created rooms, detects whether a room
//! is a WhatsApp or Signal bridge from its name, sets the bridge relay,
//! invites the on-duty bot and asks it to attach a Mattermost channel.

mod bridge;
mod common;
mod config;
mod matrix;

use anyhow::Result;
use tokio::signal;
use tracing::{error, info, warn};

use common::MatrixResult;
use config::Config;
use matrix::{register_room_created_handler, MatrixSession};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Bridge Announcer v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    for missing in config.missing_vars() {
        warn!("{}", missing);
    }
    info!("  Homeserver: {}", config.homeserver);
    info!("  Account: {}", config.user);

    let session = match MatrixSession::connect(&config).await {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to login: {}", e);
            return Ok(());
        }
    };

    run(&session, &config).await;

    session.close();
    info!("Exiting...");
    Ok(())
}

/// Log in and serve until failure or shutdown.
///
/// Every outcome is logged here; the caller always closes the session.
async fn run(session: &MatrixSession, config: &Config) {
    if let Err(e) = session.login(config).await {
        error!("Failed to login: {}", e);
        return;
    }

    tokio::select! {
        result = serve(session) => match result {
            Ok(()) => warn!("Sync loop ended"),
            Err(e) => error!("Error: {}", e),
        },
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }
}

/// Skip rooms that already exist, then announce new ones as they sync in.
async fn serve(session: &MatrixSession) -> MatrixResult<()> {
    info!("Running initial sync...");
    let since = session.catch_up().await?;

    let _room_created = register_room_created_handler(session);

    info!("Watching for new rooms...");
    session.sync_forever(since).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
