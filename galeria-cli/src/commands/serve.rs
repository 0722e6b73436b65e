//! HTTP server command for the galeria API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use galeria_core::config::DatabaseSettings;
use galeria_server::db::{create_lazy_pool, migrations};
use galeria_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides the DB_* environment variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Checked again here because .env files are loaded after clap has
    // already read the process environment.
    let database_url = match args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
    {
        Some(url) => url,
        None => DatabaseSettings::from_env()?.url(),
    };

    tracing::info!("Starting galeria server on {}", args.bind);

    // Lazy pool: the process must boot even with the database down.
    let pool = create_lazy_pool(&database_url).context("Invalid database URL")?;

    // A failed schema check must not stop startup; "/" stays available
    // for load-balancer probes.
    if let Err(err) = migrations::run(&pool).await {
        tracing::error!("could not ensure database schema: {err}");
        tracing::warn!(
            "serving anyway; database-backed endpoints will fail until the database is reachable"
        );
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
