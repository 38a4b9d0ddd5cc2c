use sqlx::{PgPool, migrate};
use tracing::info;

use crate::config::app_config::AppConfig;

pub async fn connect_and_migrate(config: &AppConfig) -> Result<PgPool, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    info!(
        host = %config.postgres_host,
        database = %config.postgres_database,
        "postgres pool ready"
    );

    Ok(pool)
}
