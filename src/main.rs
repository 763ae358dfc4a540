use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use client_ledger_api::database::{DatabaseManager, PgStore};
use client_ledger_api::{app, config, AppState};

#[derive(Debug, Parser)]
#[command(name = "client-ledger-api")]
#[command(about = "REST backend for user accounts and client project bookkeeping")]
#[command(version)]
struct Args {
    #[arg(long, env = "LEDGER_API_HOST", default_value = "0.0.0.0", help = "Address to bind")]
    host: String,

    #[arg(long, env = "LEDGER_API_PORT", help = "Port to listen on (falls back to PORT, then 3000)")]
    port: Option<u16>,

    #[arg(long, help = "Do not apply database migrations at startup")]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("client_ledger_api=debug,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let config = config::config();
    tracing::info!("Starting Client Ledger API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect_lazy(&config.database).context("failed to configure database pool")?;
    if args.skip_migrations {
        tracing::warn!("Skipping database migrations");
    } else {
        DatabaseManager::migrate(&pool).await.context("failed to apply migrations")?;
    }

    let state = AppState::from_pg(PgStore::new(pool.clone()));

    let port = args
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(3000);
    let bind_addr = format!("{}:{}", args.host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Client Ledger API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close(&pool).await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
