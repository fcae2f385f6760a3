use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use whatsapp_gateway::{
    config::DEFAULT_CONFIG_PATH, create_router, run_session, AppState, Config, SessionState,
};

#[derive(Debug, Parser)]
#[command(name = "whatsapp-gateway", about = "HTTP gateway for sending WhatsApp messages")]
struct Cli {
    /// Config file (extension optional)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Listening port, overrides the config file and PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;
    if let Some(port) = cli.port {
        cfg.service.http.port = port;
    }

    info!("Loaded config: {}", cfg.service.name);

    let session = Arc::new(SessionState::new());

    // The server keeps running whatever happens to the session
    tokio::spawn(run_session(cfg.whatsapp.clone(), session.clone()));

    let app = create_router(AppState::new(session));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
