//! Database connectivity diagnostics
//!
//! Three independent, best-effort steps: raw TCP reachability, a full
//! connection through the same pool mechanism the server uses, and the
//! local hostname. A failure in one step never blocks the next.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpStream;
use tokio::time::timeout;

use galeria_core::config::{mask_url, DatabaseSettings};
use galeria_server::db::create_pool;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Arguments for the check-db command
#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    /// Database URL (overrides the DB_* environment variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the connectivity check
pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let settings = DatabaseSettings::from_env()?;
    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| settings.url());

    println!("{}", "=".repeat(60));
    println!("Galeria database connectivity check");
    println!("{}", "=".repeat(60));

    // 1. Raw TCP reachability
    println!(
        "\n1. Testing network reachability of {}:{} ...",
        settings.host, settings.port
    );
    let addr = format!("{}:{}", settings.host, settings.port);
    match timeout(CONNECT_TIMEOUT, TcpStream::connect(&addr)).await {
        Ok(Ok(_)) => println!(
            "   ok: port {} is reachable on {}",
            settings.port, settings.host
        ),
        Ok(Err(err)) => println!(
            "   FAILED: port {} is not reachable on {} ({})",
            settings.port, settings.host, err
        ),
        Err(_) => println!(
            "   FAILED: connection attempt timed out after {}s",
            CONNECT_TIMEOUT.as_secs()
        ),
    }

    // 2. Full database connection, same pool mechanism as the server
    println!("\n2. Testing database connection ...");
    println!("   URL: {}", mask_url(&database_url));
    match server_version(&database_url).await {
        Ok(version) => {
            println!("   ok: connected");
            println!("   server version: {version}");
        }
        Err(err) => {
            println!("   FAILED: {err}");
            println!("\n   Possible causes:");
            println!("   - wrong host or port (check DB_HOST / DB_PORT)");
            println!("   - a firewall blocking port {}", settings.port);
            println!("   - PostgreSQL not running or not accepting remote connections");
            println!("   - wrong credentials (check DB_USER / DB_PASSWORD)");
        }
    }

    // 3. Local hostname
    let local = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_owned());
    println!("\n3. Hostname of this machine: {local}");

    println!("\n{}", "=".repeat(60));
    println!("Check complete");
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn server_version(database_url: &str) -> Result<String, sqlx::Error> {
    let pool = create_pool(database_url).await?;
    sqlx::query_scalar::<_, String>("SELECT version()")
        .fetch_one(&pool)
        .await
}
