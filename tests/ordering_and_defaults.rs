//! Declared default ordering and storage-layer defaults.

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use dicas::apps::core::models::{
	Article, Medal, Person, Product, Sale, SaleItem, Sport, Todo, Travel, User, Winner,
};

#[sqlx::test]
async fn todo_defaults_come_from_the_storage_layer(pool: SqlitePool) {
	let todo = Todo::create(&pool, "estudar generated columns").await.unwrap();

	assert!(todo.completed, "completed defaults to TRUE at the engine");
	let age = Utc::now() - todo.created;
	assert!(
		age < Duration::minutes(5) && age > Duration::minutes(-5),
		"created defaults to the current time, got {}",
		todo.created
	);
}

#[sqlx::test]
async fn sale_created_defaults_to_now(pool: SqlitePool) {
	let person = Person::create(&pool, "Regis", None).await.unwrap();
	let sale = Sale::create(&pool, person.id).await.unwrap();

	let age = Utc::now() - sale.created;
	assert!(age < Duration::minutes(5) && age > Duration::minutes(-5));
}

#[sqlx::test]
async fn travels_list_by_start_date_ascending(pool: SqlitePool) {
	let day = |d| Utc.with_ymd_and_hms(2024, 6, d, 12, 0, 0).unwrap();
	Travel::create(&pool, "Salvador", day(20), day(25)).await.unwrap();
	Travel::create(&pool, "Fortaleza", day(5), day(9)).await.unwrap();
	Travel::create(&pool, "Manaus", day(12), day(15)).await.unwrap();

	let travels = Travel::all(&pool).await.unwrap();
	let destinations: Vec<_> = travels.iter().map(|t| t.destination.as_str()).collect();
	assert_eq!(destinations, ["Fortaleza", "Manaus", "Salvador"]);
}

#[sqlx::test]
async fn sales_list_most_recent_first(pool: SqlitePool) {
	let person = Person::create(&pool, "Regis", None).await.unwrap();
	for stamp in [
		"2024-02-01 09:00:00",
		"2024-02-03 09:00:00",
		"2024-02-02 09:00:00",
	] {
		sqlx::query("INSERT INTO core_sale (person_id, created) VALUES (?1, ?2)")
			.bind(person.id)
			.bind(stamp)
			.execute(&pool)
			.await
			.unwrap();
	}

	let sales = Sale::all(&pool).await.unwrap();
	let days: Vec<_> = sales
		.iter()
		.map(|s| s.created.format("%Y-%m-%d").to_string())
		.collect();
	assert_eq!(days, ["2024-02-03", "2024-02-02", "2024-02-01"]);
}

#[sqlx::test]
async fn sale_items_list_newest_first(pool: SqlitePool) {
	let person = Person::create(&pool, "Regis", None).await.unwrap();
	let sale = Sale::create(&pool, person.id).await.unwrap();
	let product = Product::create(&pool, "Cabo").await.unwrap();

	let first = SaleItem::create(&pool, sale.id, product.id, 1, Decimal::ONE)
		.await
		.unwrap();
	let second = SaleItem::create(&pool, sale.id, product.id, 2, Decimal::ONE)
		.await
		.unwrap();

	let items = SaleItem::all(&pool).await.unwrap();
	let ids: Vec<_> = items.iter().map(|i| i.id).collect();
	assert_eq!(ids, [second.id, first.id]);

	let via_sale = sale.items(&pool).await.unwrap();
	let ids: Vec<_> = via_sale.iter().map(|i| i.id).collect();
	assert_eq!(ids, [second.id, first.id]);
}

#[sqlx::test]
async fn people_products_winners_articles_use_declared_order(pool: SqlitePool) {
	Person::create(&pool, "Carla", None).await.unwrap();
	Person::create(&pool, "Ana", None).await.unwrap();
	Person::create(&pool, "Bruno", None).await.unwrap();
	let first_names: Vec<_> = Person::all(&pool)
		.await
		.unwrap()
		.into_iter()
		.map(|p| p.first_name)
		.collect();
	assert_eq!(first_names, ["Ana", "Bruno", "Carla"]);

	Product::create(&pool, "Teclado").await.unwrap();
	Product::create(&pool, "Mouse").await.unwrap();
	let titles: Vec<_> = Product::all(&pool)
		.await
		.unwrap()
		.into_iter()
		.map(|p| p.title)
		.collect();
	assert_eq!(titles, ["Mouse", "Teclado"]);

	Winner::create(&pool, "Zeca", Medal::Gold, Sport::Judo).await.unwrap();
	Winner::create(&pool, "Alice", Medal::Silver, Sport::Tennis).await.unwrap();
	let names: Vec<_> = Winner::all(&pool)
		.await
		.unwrap()
		.into_iter()
		.map(|w| w.name)
		.collect();
	assert_eq!(names, ["Alice", "Zeca"]);

	let user = User::create(&pool, "regis", "regis@example.com").await.unwrap();
	Article::create(&pool, "Views", user.id).await.unwrap();
	Article::create(&pool, "Models", user.id).await.unwrap();
	let titles: Vec<_> = Article::all(&pool)
		.await
		.unwrap()
		.into_iter()
		.map(|a| a.title)
		.collect();
	assert_eq!(titles, ["Models", "Views"]);
}

#[sqlx::test]
async fn todos_keep_insertion_order(pool: SqlitePool) {
	// no ordering is declared for todos
	Todo::create(&pool, "b").await.unwrap();
	Todo::create(&pool, "a").await.unwrap();

	let tasks: Vec<_> = Todo::all(&pool)
		.await
		.unwrap()
		.into_iter()
		.map(|t| t.task)
		.collect();
	assert_eq!(tasks, ["b", "a"]);
}
