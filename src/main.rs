//! AgriSense Server
//!
//! HTTP API server for crop yield prediction, plant disease detection, and
//! agronomic recommendations. Both models are loaded (or trained and
//! persisted) before the listener binds, so no request ever races model
//! initialization.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use agrisense::backend::{backend_name, default_device};
use agrisense::inference::{DiseaseDetector, YieldPredictor};
use agrisense::model::{
    DiseaseNetConfig, DiseaseTrainingConfig, YieldNetConfig, YieldTrainingConfig,
};
use agrisense::server::{build_router, state::AppState};
use agrisense::utils::{init_logging, LogConfig, LogLevel};

/// AgriSense Server
#[derive(Parser, Debug)]
#[command(name = "agrisense")]
#[command(version = "0.1.0")]
#[command(about = "HTTP API server for crop yield prediction and disease detection")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Directory for persisted model artifacts
    #[arg(long, env = "AGRISENSE_ARTIFACTS_DIR", default_value = "artifacts")]
    artifacts_dir: PathBuf,

    /// Discard any persisted models and retrain from scratch
    #[arg(long)]
    retrain: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "AGRISENSE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable verbose (debug) logging, overrides --log-level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::with_level(LogLevel::parse(&cli.log_level))
    };
    init_logging(&log_config).map_err(|e| anyhow::anyhow!(e))?;

    info!("AgriSense Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Backend: {}", backend_name());
    info!("Artifacts dir: {:?}", cli.artifacts_dir);

    if cli.retrain && cli.artifacts_dir.exists() {
        info!("--retrain given, removing persisted artifacts");
        std::fs::remove_dir_all(&cli.artifacts_dir)?;
    }

    // Initialize both models before accepting any traffic
    let device = default_device();

    let yield_predictor = YieldPredictor::load_or_train(
        &cli.artifacts_dir,
        &YieldNetConfig::default(),
        &YieldTrainingConfig::default(),
        &device,
    )?;

    let disease_detector = DiseaseDetector::load_or_train(
        &cli.artifacts_dir,
        &DiseaseNetConfig::default(),
        &DiseaseTrainingConfig::default(),
        &device,
    )?;

    let state = Arc::new(AppState::new(yield_predictor, disease_detector));
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
