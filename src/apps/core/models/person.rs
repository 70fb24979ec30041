use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// A person with an engine-computed display name.
///
/// `full_name` is a stored generated column joining first and last
/// name with a literal space via the SQL `||` operator. `||`
/// propagates NULL, so `full_name` is NULL whenever `last_name` is.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
	pub id: i64,
	pub first_name: String,
	pub last_name: Option<String>,
	full_name: Option<String>,
}

impl Person {
	pub async fn create(
		pool: &SqlitePool,
		first_name: &str,
		last_name: Option<&str>,
	) -> Result<Self> {
		let done = sqlx::query("INSERT INTO core_person (first_name, last_name) VALUES (?1, ?2)")
			.bind(first_name)
			.bind(last_name)
			.execute(pool)
			.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let person = sqlx::query_as(
			"SELECT id, first_name, last_name, full_name FROM core_person WHERE id = ?1",
		)
		.bind(id)
		.fetch_one(pool)
		.await?;
		Ok(person)
	}

	/// All people, ordered by first name.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let people = sqlx::query_as(
			"SELECT id, first_name, last_name, full_name FROM core_person ORDER BY first_name",
		)
		.fetch_all(pool)
		.await?;
		Ok(people)
	}

	pub async fn save(&mut self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("UPDATE core_person SET first_name = ?1, last_name = ?2 WHERE id = ?3")
			.bind(&self.first_name)
			.bind(&self.last_name)
			.bind(self.id)
			.execute(pool)
			.await?;
		*self = Self::get(pool, self.id).await?;
		Ok(())
	}

	/// Deleting a person cascades to their sales (and sale items).
	pub async fn delete(self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("DELETE FROM core_person WHERE id = ?1")
			.bind(self.id)
			.execute(pool)
			.await?;
		Ok(())
	}

	/// Engine-computed `first_name || ' ' || last_name`; NULL when the
	/// last name is absent.
	pub fn full_name(&self) -> Option<&str> {
		self.full_name.as_deref()
	}
}

impl fmt::Display for Person {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.full_name().unwrap_or(&self.first_name))
	}
}
