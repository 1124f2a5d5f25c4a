// --- Course schedule builder - API entry point ---

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use schedule_builder::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind = format!("{}:{}", host, port);

    info!("starting schedule builder API on http://{}", bind);
    run_server(&bind).await
}
