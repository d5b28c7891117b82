use clap::Parser;
use precis_core::config;
use precis_server::api::create_router;
use precis_server::api::handlers::AppState;
use precis_server::api::models::SummaryMethod;
use precis_server::generator::{GeminiClient, GeminiConfig, TextGenerator};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "precis", about = "Text summarization service")]
struct Args {
    /// Address to bind
    #[arg(long, env = "PRECIS_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PRECIS_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Gemini API key. Without it every request uses the extractive summarizer.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = config::DEFAULT_GEMINI_MODEL)]
    gemini_model: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = config::DEFAULT_GEMINI_BASE_URL)]
    gemini_base_url: String,

    /// Timeout in seconds for one Gemini call
    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = config::DEFAULT_GEMINI_TIMEOUT_SECS)]
    gemini_timeout: u64,

    /// Method used when a request does not specify one
    #[arg(long, env = "PRECIS_DEFAULT_METHOD", value_enum, default_value_t = SummaryMethod::Auto)]
    default_method: SummaryMethod,

    /// Graceful shutdown timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    shutdown_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("precis_server=info".parse()?)
                .add_directive("precis_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }
    if args.gemini_timeout == 0 || args.gemini_timeout >= config::REQUEST_TIMEOUT_SECS {
        eprintln!(
            "Error: gemini-timeout must be 1-{} seconds",
            config::REQUEST_TIMEOUT_SECS - 1
        );
        std::process::exit(1);
    }

    let generator: Option<Arc<dyn TextGenerator>> = match args
        .gemini_api_key
        .filter(|key| !key.trim().is_empty())
    {
        Some(api_key) => {
            let client = GeminiClient::new(GeminiConfig {
                api_key,
                model: args.gemini_model.clone(),
                base_url: args.gemini_base_url.clone(),
                timeout: Duration::from_secs(args.gemini_timeout),
            })?;
            tracing::info!("Gemini enabled (model: {})", client.model());
            let client: Arc<dyn TextGenerator> = Arc::new(client);
            Some(client)
        }
        None => {
            tracing::info!("No GEMINI_API_KEY set, serving extractive summaries only");
            None
        }
    };

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let state = AppState {
        generator: generator.clone(),
        default_method: args.default_method,
        prometheus_handle,
        start_time: Instant::now(),
    };

    let app = create_router(state);
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %addr,
        gemini = generator.is_some(),
        default_method = args.default_method.as_str(),
        "precis ready"
    );

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        wait_for_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let shutdown_timeout = Duration::from_secs(args.shutdown_timeout);
    let drain_deadline = async move {
        if shutdown_rx.wait_for(|stopping| *stopping).await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server.into_future() => {
            result?;
            tracing::info!("All requests drained, exiting");
        }
        _ = drain_deadline => {
            tracing::error!(
                "Shutdown timeout ({}s) exceeded, aborting in-flight requests",
                args.shutdown_timeout
            );
        }
    }

    Ok(())
}

/// Resolves when a signal arrives. A handler that failed to install never
/// resolves, so it cannot trigger a shutdown on its own.
async fn signal_or_pending<E: std::fmt::Display>(installed: Result<(), E>, name: &str) {
    if let Err(e) = installed {
        tracing::error!("Failed to install {} handler: {}", name, e);
        std::future::pending::<()>().await;
    }
}

async fn wait_for_signal() {
    let ctrl_c = async { signal_or_pending(tokio::signal::ctrl_c().await, "Ctrl+C").await };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => signal_or_pending(Err(e), "SIGTERM").await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_signal_handler_never_resolves() {
        let failed = signal_or_pending(Err(std::io::Error::other("no signal driver")), "SIGTERM");
        let outcome = tokio::time::timeout(Duration::from_millis(50), failed).await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_delivered_signal_resolves() {
        let delivered = signal_or_pending(Ok::<(), std::io::Error>(()), "Ctrl+C");
        let outcome = tokio::time::timeout(Duration::from_millis(50), delivered).await;
        assert!(outcome.is_ok());
    }
}
