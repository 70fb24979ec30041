use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// Minimal account row, referenced by [`Article`](super::Article).
///
/// `is_active` and `date_joined` default at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
	pub id: i64,
	pub username: String,
	pub email: String,
	pub is_active: bool,
	pub date_joined: DateTime<Utc>,
}

impl User {
	pub async fn create(pool: &SqlitePool, username: &str, email: &str) -> Result<Self> {
		let done = sqlx::query("INSERT INTO auth_user (username, email) VALUES (?1, ?2)")
			.bind(username)
			.bind(email)
			.execute(pool)
			.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let user = sqlx::query_as(
			"SELECT id, username, email, is_active, date_joined FROM auth_user WHERE id = ?1",
		)
		.bind(id)
		.fetch_one(pool)
		.await?;
		Ok(user)
	}

	/// All users, ordered by username.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let users = sqlx::query_as(
			"SELECT id, username, email, is_active, date_joined FROM auth_user ORDER BY username",
		)
		.fetch_all(pool)
		.await?;
		Ok(users)
	}

	/// Deleting a user cascades to the articles they created or
	/// last updated.
	pub async fn delete(self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("DELETE FROM auth_user WHERE id = ?1")
			.bind(self.id)
			.execute(pool)
			.await?;
		Ok(())
	}
}

impl fmt::Display for User {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.username)
	}
}
