// src/main.rs
use std::sync::Arc;

use slap_planner::advisor::{DisabledAdvisor, advisor_from_config};
use slap_planner::api::{self, ApiState};
use slap_planner::config::AppConfig;
use slap_planner::snapshot;
use slap_planner::state::Workspace;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "slap_planner=info";

#[tokio::main]
async fn main() {
    let dotenv_result = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(err) = dotenv_result {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            warn!("⚠️ Could not load .env: {}", err);
        }
    }

    let app_config = AppConfig::from_env();

    let workspace = match app_config.storage.data_file() {
        Some(path) => match snapshot::load(path).await {
            Ok(Some(registry)) => {
                info!("📂 Loaded {} SKUs from {}", registry.len(), path.display());
                Workspace::new(registry)
            }
            Ok(None) => {
                info!("📂 No snapshot at {}, starting empty", path.display());
                Workspace::default()
            }
            Err(err) => {
                error!("❌ Could not load snapshot {}: {}", path.display(), err);
                std::process::exit(1);
            }
        },
        None => Workspace::default(),
    };

    let advisor = match advisor_from_config(&app_config.advisor) {
        Ok(advisor) => advisor,
        Err(err) => {
            warn!("⚠️ Advisor client could not be built, optimization disabled: {}", err);
            Arc::new(DisabledAdvisor)
        }
    };

    let state = ApiState::new(
        workspace,
        app_config.layout.clone(),
        advisor,
        app_config.storage.data_file().map(|path| path.to_path_buf()),
    );

    info!("🚀 Slotting service starting...");
    api::start_api_server(app_config.api.clone(), state).await;
}
