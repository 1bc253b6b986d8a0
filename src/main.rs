use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use user_registry::{
    http, HttpConfig, LocalEmitterSink, UserStore, USER_ADD, USER_DELETE, USER_UPDATE,
};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match HttpConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let sink = LocalEmitterSink::new();
    for topic in [USER_ADD, USER_UPDATE, USER_DELETE] {
        sink.on(topic, move |payload| info!(topic, %payload, "domain event"));
    }

    let store = Arc::new(UserStore::new(sink));
    info!(addr = %config.addr, "starting user registry");

    if let Err(err) = http::serve(store, config.addr).await {
        error!(error = %err, "server stopped");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
