use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::Result;

/// A sale made to one person.
///
/// `created` has a storage-layer default of the current time. The
/// foreign key cascades, so deleting the person deletes the sale (and
/// the sale's items with it).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sale {
	pub id: i64,
	pub person_id: i64,
	pub created: DateTime<Utc>,
}

impl Sale {
	pub async fn create(pool: &SqlitePool, person_id: i64) -> Result<Self> {
		let done = sqlx::query("INSERT INTO core_sale (person_id) VALUES (?1)")
			.bind(person_id)
			.execute(pool)
			.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let sale = sqlx::query_as("SELECT id, person_id, created FROM core_sale WHERE id = ?1")
			.bind(id)
			.fetch_one(pool)
			.await?;
		Ok(sale)
	}

	/// All sales, most recent first.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let sales =
			sqlx::query_as("SELECT id, person_id, created FROM core_sale ORDER BY created DESC")
				.fetch_all(pool)
				.await?;
		Ok(sales)
	}

	/// Items of this sale, in default `SaleItem` order.
	pub async fn items(&self, pool: &SqlitePool) -> Result<Vec<SaleItem>> {
		let items = sqlx::query_as(
			"SELECT id, sale_id, product_id, quantity, price, subtotal \
			 FROM core_saleitem WHERE sale_id = ?1 ORDER BY id DESC",
		)
		.bind(self.id)
		.fetch_all(pool)
		.await?;
		Ok(items)
	}

	pub async fn delete(self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("DELETE FROM core_sale WHERE id = ?1")
			.bind(self.id)
			.execute(pool)
			.await?;
		Ok(())
	}
}

impl fmt::Display for Sale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:03}", self.id)
	}
}

/// One line of a sale.
///
/// `subtotal` is a stored generated column (`quantity * price`,
/// rendered at the declared two-decimal scale); like every generated
/// column here it is read back, never written. `price` is carried as
/// exact decimal text at rest and as [`Decimal`] in the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
	pub id: i64,
	pub sale_id: i64,
	pub product_id: i64,
	pub quantity: u32,
	pub price: Decimal,
	subtotal: Decimal,
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for SaleItem {
	fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
		let price: String = row.try_get("price")?;
		let subtotal: String = row.try_get("subtotal")?;
		Ok(Self {
			id: row.try_get("id")?,
			sale_id: row.try_get("sale_id")?,
			product_id: row.try_get("product_id")?,
			quantity: row.try_get("quantity")?,
			price: parse_decimal(&price, "price")?,
			subtotal: parse_decimal(&subtotal, "subtotal")?,
		})
	}
}

fn parse_decimal(raw: &str, column: &str) -> sqlx::Result<Decimal> {
	raw.parse().map_err(|err: rust_decimal::Error| {
		sqlx::Error::ColumnDecode {
			index: column.to_string(),
			source: Box::new(err),
		}
	})
}

impl SaleItem {
	pub async fn create(
		pool: &SqlitePool,
		sale_id: i64,
		product_id: i64,
		quantity: u32,
		price: Decimal,
	) -> Result<Self> {
		let done = sqlx::query(
			"INSERT INTO core_saleitem (sale_id, product_id, quantity, price) \
			 VALUES (?1, ?2, ?3, ?4)",
		)
		.bind(sale_id)
		.bind(product_id)
		.bind(quantity)
		// normalize to the declared DECIMAL(7,2) scale
		.bind(price.round_dp(2).to_string())
		.execute(pool)
		.await?;
		Self::get(pool, done.last_insert_rowid()).await
	}

	pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self> {
		let item = sqlx::query_as(
			"SELECT id, sale_id, product_id, quantity, price, subtotal \
			 FROM core_saleitem WHERE id = ?1",
		)
		.bind(id)
		.fetch_one(pool)
		.await?;
		Ok(item)
	}

	/// All sale items, newest first.
	pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>> {
		let items = sqlx::query_as(
			"SELECT id, sale_id, product_id, quantity, price, subtotal \
			 FROM core_saleitem ORDER BY id DESC",
		)
		.fetch_all(pool)
		.await?;
		Ok(items)
	}

	pub async fn save(&mut self, pool: &SqlitePool) -> Result<()> {
		sqlx::query("UPDATE core_saleitem SET quantity = ?1, price = ?2 WHERE id = ?3")
			.bind(self.quantity)
			.bind(self.price.round_dp(2).to_string())
			.bind(self.id)
			.execute(pool)
			.await?;
		*self = Self::get(pool, self.id).await?;
		Ok(())
	}

	/// Engine-computed `quantity * price`.
	pub fn subtotal(&self) -> Decimal {
		self.subtotal
	}
}

impl fmt::Display for SaleItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} - {} - {}", self.id, self.sale_id, self.product_id)
	}
}
