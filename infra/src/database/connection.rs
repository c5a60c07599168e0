//! MySQL connection pool management

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use bb_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from the database configuration
///
/// Store-call timeouts live here, at the pool level; the domain layer
/// imposes none of its own.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "connecting to MySQL"
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await
}
