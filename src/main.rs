use anyhow::Result;
use clap::Parser;
use meeting_insights::{create_router, inference, AppState, Config, FfmpegExtractor};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "meeting-insights")]
struct Cli {
    /// Configuration file name (without extension)
    #[arg(long, default_value = "config/meeting-insights")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("Meeting Insights v0.1.0");
    info!("Loaded config: {}", cfg.service.name);

    let upload_dir = PathBuf::from(&cfg.storage.upload_dir);
    tokio::fs::create_dir_all(&upload_dir).await?;
    info!("Upload directory: {}", upload_dir.display());

    // Inference engines initialize once, shared read-only by all requests.
    let gateway = Arc::new(inference::load(&cfg.inference));
    if gateway.is_degraded() {
        warn!("Serving in degraded mode: every stream will fail fast with the models-unavailable error");
    }

    let state = AppState::new(
        upload_dir,
        cfg.pipeline.clone(),
        gateway,
        Arc::new(FfmpegExtractor),
    );
    let router = create_router(state, &cfg.service.http.allow_origins);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
