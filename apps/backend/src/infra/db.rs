//! Store bootstrap: connect and migrate in one entrypoint.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::db_url;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Open a connection pool against the given URL.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(10)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| AppError::db(ErrorCode::DbError, format!("Failed to connect: {e}")))
}

/// Single entrypoint used by `main`: build the URL from the environment,
/// connect, and bring the schema up to date.
pub async fn bootstrap_db() -> Result<DatabaseConnection, AppError> {
    let url = db_url()?;
    let conn = connect_db(&url).await?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| AppError::db(ErrorCode::DbError, format!("Migration failed: {e}")))?;
    info!("database schema up to date");

    Ok(conn)
}
