use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// Medal awarded to a winner. Stored as TEXT, constrained by a CHECK
/// to exactly these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Medal {
	Gold,
	Silver,
	Bronze,
}

impl Medal {
	pub const fn choices() -> [Medal; 3] {
		[Medal::Gold, Medal::Silver, Medal::Bronze]
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			Medal::Gold => "GOLD",
			Medal::Silver => "SILVER",
			Medal::Bronze => "BRONZE",
		}
	}
}

impl fmt::Display for Medal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Sport a medal was won in. The category grouping is presentation
/// only; the storage layer sees the flat value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sport {
	Judo,
	Karate,
	Badminton,
	Tennis,
	Unknown,
}

impl Sport {
	/// Grouped choices for presentation. `Unknown` stays ungrouped.
	pub const CATEGORIES: [(&'static str, &'static [Sport]); 2] = [
		("Martial Arts", &[Sport::Judo, Sport::Karate]),
		("Racket", &[Sport::Badminton, Sport::Tennis]),
	];

	pub const fn choices() -> [Sport; 5] {
		[
			Sport::Judo,
			Sport::Karate,
			Sport::Badminton,
			Sport::Tennis,
			Sport::Unknown,
		]
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			Sport::Judo => "judo",
			Sport::Karate => "karate",
			Sport::Badminton => "badminton",
			Sport::Tennis => "tennis",
			Sport::Unknown => "unknown",
		}
	}

	/// Presentation category of this sport, if it has one.
	pub fn category(&self) -> Option<&'static str> {
		Self::CATEGORIES
			.iter()
			.find(|(_, sports)| sports.contains(self))
			.map(|(name, _)| *name)
	}
}

impl fmt::Display for Sport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A medal winner.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Winner {
	pub id: i64,
	pub name: String,
	pub medal: Medal,
	pub sport: Sport,
}

impl Winner {
	pub async fn create(
		pool: &SqlitePool,
		name: &str,
		medal: Medal,
		sport: Sport,
	) -> Result<Self> {
		let done = sqlx::query("INSERT INTO core_winner (name, medal, sport) VALUES (?1, ?2, ?3)")
			.bind(name)
			.bind(medal)
			.bind(sport)
			.execute(pool)
			.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let winner =
			sqlx::query_as("SELECT id, name, medal, sport FROM core_winner WHERE id = ?1")
				.bind(id)
				.fetch_one(pool)
				.await?;
		Ok(winner)
	}

	/// All winners, ordered by name.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let winners =
			sqlx::query_as("SELECT id, name, medal, sport FROM core_winner ORDER BY name")
				.fetch_all(pool)
				.await?;
		Ok(winners)
	}

	pub async fn delete(self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("DELETE FROM core_winner WHERE id = ?1")
			.bind(self.id)
			.execute(pool)
			.await?;
		Ok(())
	}
}

impl fmt::Display for Winner {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name)
	}
}
