use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// A task on the todo list.
///
/// `completed` and `created` have storage-layer defaults (`TRUE` and
/// the current time), so a fresh row needs nothing but its task text.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
	pub id: i64,
	pub task: String,
	pub completed: bool,
	pub created: DateTime<Utc>,
}

impl Todo {
	pub async fn create(pool: &SqlitePool, task: &str) -> Result<Self> {
		let done = sqlx::query("INSERT INTO core_todo (task) VALUES (?1)")
			.bind(task)
			.execute(pool)
			.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let todo = sqlx::query_as(
			"SELECT id, task, completed, created FROM core_todo WHERE id = ?1",
		)
		.bind(id)
		.fetch_one(pool)
		.await?;
		Ok(todo)
	}

	/// All todos. No default ordering is declared for this model.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let todos = sqlx::query_as("SELECT id, task, completed, created FROM core_todo")
			.fetch_all(pool)
			.await?;
		Ok(todos)
	}

	pub async fn save(&mut self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("UPDATE core_todo SET task = ?1, completed = ?2 WHERE id = ?3")
			.bind(&self.task)
			.bind(self.completed)
			.bind(self.id)
			.execute(pool)
			.await?;
		*self = Self::get(pool, self.id).await?;
		Ok(())
	}

	pub async fn delete(self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("DELETE FROM core_todo WHERE id = ?1")
			.bind(self.id)
			.execute(pool)
			.await?;
		Ok(())
	}
}

impl fmt::Display for Todo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.task)
	}
}
