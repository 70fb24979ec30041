use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// An article with creator/updater attribution.
///
/// `created_by_id` is required; `updated_by_id` stays NULL until
/// someone other than the engine touches the row. Both foreign keys
/// cascade from `auth_user`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
	pub id: i64,
	pub title: String,
	pub created_by_id: i64,
	pub updated_by_id: Option<i64>,
}

impl Article {
	pub async fn create(pool: &SqlitePool, title: &str, created_by_id: i64) -> Result<Self> {
		let done = sqlx::query("INSERT INTO core_article (title, created_by_id) VALUES (?1, ?2)")
			.bind(title)
			.bind(created_by_id)
			.execute(pool)
			.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let article = sqlx::query_as(
			"SELECT id, title, created_by_id, updated_by_id FROM core_article WHERE id = ?1",
		)
		.bind(id)
		.fetch_one(pool)
		.await?;
		Ok(article)
	}

	/// All articles, ordered by title.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let articles = sqlx::query_as(
			"SELECT id, title, created_by_id, updated_by_id FROM core_article ORDER BY title",
		)
		.fetch_all(pool)
		.await?;
		Ok(articles)
	}

	/// Update the title, recording who made the change.
	pub async fn update_title(
		&mut self,
		pool: &SqlitePool,
		title: &str,
		updated_by_id: i64,
	) -> Result<()> {
		sqlx::query("UPDATE core_article SET title = ?1, updated_by_id = ?2 WHERE id = ?3")
			.bind(title)
			.bind(updated_by_id)
			.bind(self.id)
			.execute(pool)
			.await?;
		*self = Self::get(pool, self.id).await?;
		Ok(())
	}

	pub async fn delete(self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("DELETE FROM core_article WHERE id = ?1")
			.bind(self.id)
			.execute(pool)
			.await?;
		Ok(())
	}
}

impl fmt::Display for Article {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.title)
	}
}
