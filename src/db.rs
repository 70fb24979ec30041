//! Database connection and migration entry points.
//!
//! The schema itself lives in `migrations/`; this module only hands
//! the declarations to sqlx. Foreign-key enforcement is switched on
//! explicitly because the cascade rules of the schema depend on it.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::error::Result;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open a connection pool for the given database URL.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
	let options = SqliteConnectOptions::from_str(database_url)?
		.create_if_missing(true)
		.foreign_keys(true);
	let pool = SqlitePoolOptions::new().connect_with(options).await?;
	Ok(pool)
}

/// Apply any pending migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
	MIGRATOR.run(pool).await?;
	info!("migrations applied");
	Ok(())
}
