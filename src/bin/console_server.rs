//! HTTP Server Binary for the Ecogestion display gateway
//!
//! Serves the console screens as JSON on top of the waste-management backend.
//!
//! Usage:
//!   cargo run --bin console_server -- --host 0.0.0.0 --port 8081 --api-url http://localhost:8000

use clap::Parser;
use ecogestion::{
    config::{ConsoleConfig, DEFAULT_API_URL, DEFAULT_LOG_FILTER, DEFAULT_TIMEOUT_SECS},
    http::start_server,
    logging, ConsoleClient,
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "Ecogestion Display Gateway")]
#[command(about = "JSON gateway serving the Ecogestion console screens", long_about = None)]
struct Args {
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    #[arg(short, long, default_value = "8081")]
    port: u16,

    /// Base URL of the waste-management backend
    #[arg(long, env = "ECOGESTION_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Backend request timeout in seconds
    #[arg(long, env = "ECOGESTION_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log filter, e.g. `info` or `ecogestion=debug,tower_http=debug`
    #[arg(long, env = "ECOGESTION_LOG", default_value = DEFAULT_LOG_FILTER)]
    log: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(&args.log);

    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║                 Ecogestion Operator Console                   ║");
    println!("║                   Display Gateway                             ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();

    let config = ConsoleConfig {
        api_url: args.api_url,
        timeout_secs: args.timeout_secs,
        log_filter: args.log,
    };
    let client = ConsoleClient::new(config)?;
    println!("Backend: {}", client.config().api_url);
    println!("  - Request timeout: {} seconds", client.config().timeout_secs);
    println!();

    let addr = format!("{}:{}", args.host, args.port);

    // Set up graceful shutdown
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
        println!();
        println!("Shutdown signal received, stopping server...");
    };

    // Run server with graceful shutdown
    tokio::select! {
        result = start_server(&addr, client) => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e);
            }
        }
        _ = shutdown_signal => {
            info!("Server shut down gracefully");
        }
    }

    Ok(())
}
