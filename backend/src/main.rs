//! Service entry point: configuration, pool construction, schema bootstrap,
//! HTTP server.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use atendimentos_backend::config::AppConfig;
use atendimentos_backend::outbound::persistence::{DbPool, PoolConfig, initialize_schema};
use atendimentos_backend::server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::from_app_config(&config))
        .await
        .map_err(std::io::Error::other)?;
    initialize_schema(&pool).await.map_err(std::io::Error::other)?;

    info!(port = config.listen_port, "atendimentos backend listening");
    server::create_server(&config, pool)?.await
}
