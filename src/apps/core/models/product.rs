use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// A sellable product.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
	pub id: i64,
	pub title: String,
}

impl Product {
	pub async fn create(pool: &SqlitePool, title: &str) -> Result<Self> {
		let done = sqlx::query("INSERT INTO core_product (title) VALUES (?1)")
			.bind(title)
			.execute(pool)
			.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let product = sqlx::query_as("SELECT id, title FROM core_product WHERE id = ?1")
			.bind(id)
			.fetch_one(pool)
			.await?;
		Ok(product)
	}

	/// All products, ordered by title.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let products = sqlx::query_as("SELECT id, title FROM core_product ORDER BY title")
			.fetch_all(pool)
			.await?;
		Ok(products)
	}

	pub async fn delete(self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("DELETE FROM core_product WHERE id = ?1")
			.bind(self.id)
			.execute(pool)
			.await?;
		Ok(())
	}
}

impl fmt::Display for Product {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.title)
	}
}
