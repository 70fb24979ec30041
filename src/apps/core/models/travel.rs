use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// A travel record with an engine-computed duration.
///
/// `duration` is a stored generated column (`end_date - start_date`,
/// in whole seconds); the engine recomputes it on every write and this
/// model only ever reads it back. Timestamps are persisted as unix
/// seconds so the generated expression stays plain integer arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Travel {
	pub id: i64,
	pub destination: String,
	pub start_date: DateTime<Utc>,
	pub end_date: DateTime<Utc>,
	duration: i64,
}

impl Travel {
	pub async fn create(
		pool: &SqlitePool,
		destination: &str,
		start_date: DateTime<Utc>,
		end_date: DateTime<Utc>,
	) -> Result<Self> {
		let done = sqlx::query(
			"INSERT INTO core_travel (destination, start_date, end_date) VALUES (?1, ?2, ?3)",
		)
		.bind(destination)
		.bind(start_date.timestamp())
		.bind(end_date.timestamp())
		.execute(pool)
		.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let travel = sqlx::query_as(
			"SELECT id, destination, start_date, end_date, duration \
			 FROM core_travel WHERE id = ?1",
		)
		.bind(id)
		.fetch_one(pool)
		.await?;
		Ok(travel)
	}

	/// All travels, ordered by start date.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let travels = sqlx::query_as(
			"SELECT id, destination, start_date, end_date, duration \
			 FROM core_travel ORDER BY start_date",
		)
		.fetch_all(pool)
		.await?;
		Ok(travels)
	}

	pub async fn save(&mut self, pool: &SqlitePool) -> Result<()> {
		sqlx::query(
			"UPDATE core_travel SET destination = ?1, start_date = ?2, end_date = ?3 \
			 WHERE id = ?4",
		)
		.bind(&self.destination)
		.bind(self.start_date.timestamp())
		.bind(self.end_date.timestamp())
		.bind(self.id)
		.execute(pool)
		.await?;
		*self = Self::get(pool, self.id).await?;
		Ok(())
	}

	pub async fn delete(self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("DELETE FROM core_travel WHERE id = ?1")
			.bind(self.id)
			.execute(pool)
			.await?;
		Ok(())
	}

	/// Engine-computed trip length.
	pub fn duration(&self) -> Duration {
		Duration::seconds(self.duration)
	}
}

impl fmt::Display for Travel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.destination)
	}
}
