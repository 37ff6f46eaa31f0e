use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &lipika::config::CONFIG;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        loglevel = %cfg.basic.loglevel,
        upload_dir = %cfg.basic.upload_dir.display(),
        catalog_base = %cfg.gemini.catalog_base,
        endpoints = cfg.gemini.endpoints.len(),
        "Starting lipika"
    );

    let api_key = lipika::config::gemini_api_key();
    if api_key.is_none() {
        warn!(
            "{} is not set; chat requests will fail until it is configured",
            lipika::config::GEMINI_API_KEY_VAR
        );
    }

    let state = lipika::server::router::LipikaState::new(cfg, api_key);

    // One-shot configuration probe. Diagnostic only: the report is logged
    // and startup proceeds regardless of the outcome.
    let probe_client = state.gemini.clone();
    tokio::spawn(async move {
        let report = lipika::service::startup_probe::run_startup_probe(&probe_client).await;
        if report.generative_available {
            info!("Gemini API is properly configured");
        } else {
            warn!(
                diagnostic = report.diagnostic.as_deref().unwrap_or("-"),
                "No Gemini models available; chat functionality may not work"
            );
        }
    });

    // Build axum router and serve
    let app = lipika::server::router::lipika_router(state);

    let addr = SocketAddr::from((cfg.basic.listen_addr, cfg.basic.listen_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { /* ... */ },
        _ = terminate => { /* ... */ },
    }
}
