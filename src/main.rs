use anyhow::Result;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rayee_backend::{routes, AppState, Config};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rayee_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::discover()?;
    let addr = config.system_config.socket_addr()?;

    let app_state = AppState::new(config)?;
    info!(
        "Initialized: vision={}, tts={} ({}), translator={}",
        app_state.vision_model(),
        app_state.tts.engine(),
        app_state.tts.language(),
        app_state.translator.is_some()
    );

    let app = routes::create_app(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
