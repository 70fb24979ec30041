//! Application error type.
//!
//! Errors originate in the external collaborators (database engine,
//! template engine, environment); they are wrapped once here and
//! propagate unchanged otherwise.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),

	#[error("migration error: {0}")]
	Migration(#[from] sqlx::migrate::MigrateError),

	#[error("template error: {0}")]
	Template(#[from] tera::Error),

	#[error("configuration error: {0}")]
	Config(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
