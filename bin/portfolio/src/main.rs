//! Portfolio - customers, projects and energy assets over GraphQL.
//!
//! # Usage
//!
//! ```bash
//! # Start with default config (seeded in-memory store, port 4000)
//! portfolio
//!
//! # Start with environment overrides
//! PORT=8080 MAX_PAGE_SIZE=50 portfolio --no-seed
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tokio::sync::watch;
use tracing::{Instrument, debug, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portfolio_core::metrics::init_metrics;
use portfolio_core::ports::{PageLimits, Repositories};
use portfolio_core::services::CatalogService;
use portfolio_graphql::{ServerConfig, build_schema, serve_with_shutdown};
use portfolio_storage::{MemRepositories, MemoryStore, seed_data};

/// Portfolio CLI - energy portfolio browser.
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Portfolio - GraphQL browser for customers, projects and energy assets")]
#[command(version)]
struct Cli {
    /// Interface to bind the GraphQL server to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// GraphQL server port.
    #[arg(long, env = "PORT", default_value = "4000")]
    port: u16,

    /// Prometheus metrics port.
    #[arg(long, env = "METRICS_PORT", default_value = "9090")]
    metrics_port: u16,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Disable the GraphiQL playground on `/`.
    #[arg(long)]
    no_playground: bool,

    /// Start with an empty store instead of the demo data set.
    #[arg(long)]
    no_seed: bool,

    /// Page size used when `first` is omitted or not positive.
    #[arg(long, env = "DEFAULT_PAGE_SIZE", default_value = "20")]
    default_page_size: u32,

    /// Upper bound for `first`.
    #[arg(long, env = "MAX_PAGE_SIZE", default_value = "100")]
    max_page_size: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    // Prometheus metrics exporter (optional - failures don't crash the app)
    let metrics_addr = format!("0.0.0.0:{}", cli.metrics_port);
    let metrics_enabled = match metrics_addr.parse::<std::net::SocketAddr>() {
        Ok(metrics_addr) => {
            match PrometheusBuilder::new()
                .with_http_listener(metrics_addr)
                .install()
            {
                Ok(()) => {
                    init_metrics();
                    true
                }
                Err(e) => {
                    warn!(
                        "⚠️  Failed to start metrics exporter: {}. Continuing without metrics.",
                        e
                    );
                    false
                }
            }
        }
        Err(e) => {
            warn!("⚠️  Invalid metrics address: {}. Continuing without metrics.", e);
            false
        }
    };

    // ─────────────────────────────────────────────────────────────────────────
    // 🚀 STARTUP
    // ─────────────────────────────────────────────────────────────────────────
    info!("🚀 Starting Portfolio");

    let limits = PageLimits::new(cli.default_page_size, cli.max_page_size);
    if limits.default_limit != cli.default_page_size || limits.max_limit != cli.max_page_size {
        warn!(
            default = limits.default_limit,
            max = limits.max_limit,
            "⚠️  Page size settings adjusted"
        );
    }
    debug!(
        default = limits.default_limit,
        max = limits.max_limit,
        "Page limits"
    );

    // ─────────────────────────────────────────────────────────────────────────
    // 🗄️ STORE
    // ─────────────────────────────────────────────────────────────────────────
    let store = if cli.no_seed {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(MemoryStore::with_seed(seed_data()))
    };

    let stats = store.stats().await;
    info!(
        customers = stats.customers,
        projects = stats.projects,
        energy_assets = stats.energy_assets,
        "🗄️  Store ready"
    );

    let repos: Arc<dyn Repositories> = Arc::new(MemRepositories::new(store));
    let catalog = CatalogService::new(repos, limits);

    // ─────────────────────────────────────────────────────────────────────────
    // ⚡ SERVICES START
    // ─────────────────────────────────────────────────────────────────────────
    let (shutdown_tx, mut graphql_shutdown_rx) = watch::channel(false);

    let graphql_config = ServerConfig {
        host: cli.host.clone(),
        port: cli.port,
        enable_playground: !cli.no_playground,
    };

    // Includes DoS protection: depth limit (15), complexity limit (500)
    let schema = build_schema(catalog);

    let graphql_handle = tokio::spawn(
        async move {
            let shutdown_signal = async move {
                while !*graphql_shutdown_rx.borrow() {
                    if graphql_shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
            };

            if let Err(e) = serve_with_shutdown(schema, graphql_config, shutdown_signal).await {
                error!(error = %e, "❌ Server error");
            }
        }
        .instrument(info_span!("graphql")),
    );

    // ─────────────────────────────────────────────────────────────────────────
    // ✅ READY
    // ─────────────────────────────────────────────────────────────────────────
    info!("✅ Portfolio ready");
    info!("   ⚡ GraphQL:  http://localhost:{}/graphql", cli.port);
    if !cli.no_playground {
        info!("   🎮 Playground:  http://localhost:{}/", cli.port);
    }
    if metrics_enabled {
        info!(
            "   📊 Metrics:  http://localhost:{}/metrics",
            cli.metrics_port
        );
    } else {
        info!("   📊 Metrics:  disabled");
    }
    info!("   Press Ctrl+C to stop");

    tokio::select! {
        _ = shutdown_signal() => {}
        _ = server_exited(&shutdown_tx) => {}
    }

    // ─────────────────────────────────────────────────────────────────────────
    // 🛑 SHUTDOWN
    // ─────────────────────────────────────────────────────────────────────────
    info!("🛑 Shutting down...");
    let _ = shutdown_tx.send(true);

    match tokio::time::timeout(std::time::Duration::from_secs(10), graphql_handle).await {
        Ok(joined) => {
            joined.context("GraphQL server task panicked")?;
            debug!("GraphQL stopped");
        }
        Err(_) => warn!("⚠️  GraphQL shutdown timed out"),
    }

    info!("🛑 Shutdown complete");
    Ok(())
}

/// Resolves when the server task has dropped its receiver (e.g. bind failure).
async fn server_exited(tx: &watch::Sender<bool>) {
    tx.closed().await;
}

/// Initialize tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["portfolio"]).unwrap();
        assert_eq!(cli.port, 4000);
        assert_eq!(cli.default_page_size, 20);
        assert_eq!(cli.max_page_size, 100);
        assert!(!cli.no_seed);
        assert!(!cli.no_playground);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "portfolio",
            "--port",
            "8080",
            "--no-seed",
            "--no-playground",
            "--max-page-size",
            "50",
        ])
        .unwrap();
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.max_page_size, 50);
        assert!(cli.no_seed);
        assert!(cli.no_playground);
    }
}
