//! Cascade-delete rules: Person -> Sale -> SaleItem and User -> Article.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use dicas::apps::core::models::{Article, Person, Product, Sale, SaleItem, User};

async fn count(pool: &SqlitePool, sql: &str) -> i64 {
	sqlx::query_scalar(sql).fetch_one(pool).await.unwrap()
}

#[sqlx::test]
async fn deleting_a_person_cascades_through_sales_to_items(pool: SqlitePool) {
	let person = Person::create(&pool, "Regis", Some("Santos")).await.unwrap();
	let bystander = Person::create(&pool, "Outra", None).await.unwrap();
	let product = Product::create(&pool, "Mouse").await.unwrap();

	let sale = Sale::create(&pool, person.id).await.unwrap();
	SaleItem::create(&pool, sale.id, product.id, 2, Decimal::new(1990, 2))
		.await
		.unwrap();
	SaleItem::create(&pool, sale.id, product.id, 1, Decimal::new(990, 2))
		.await
		.unwrap();

	let other_sale = Sale::create(&pool, bystander.id).await.unwrap();
	SaleItem::create(&pool, other_sale.id, product.id, 1, Decimal::new(100, 2))
		.await
		.unwrap();

	person.delete(&pool).await.unwrap();

	assert_eq!(count(&pool, "SELECT count(*) FROM core_person").await, 1);
	assert_eq!(count(&pool, "SELECT count(*) FROM core_sale").await, 1);
	assert_eq!(count(&pool, "SELECT count(*) FROM core_saleitem").await, 1);
	// the unrelated product survives
	assert_eq!(count(&pool, "SELECT count(*) FROM core_product").await, 1);
}

#[sqlx::test]
async fn deleting_a_product_cascades_to_its_sale_items(pool: SqlitePool) {
	let person = Person::create(&pool, "Regis", None).await.unwrap();
	let sale = Sale::create(&pool, person.id).await.unwrap();
	let product = Product::create(&pool, "Teclado").await.unwrap();
	SaleItem::create(&pool, sale.id, product.id, 1, Decimal::new(500, 2))
		.await
		.unwrap();

	product.delete(&pool).await.unwrap();

	assert_eq!(count(&pool, "SELECT count(*) FROM core_saleitem").await, 0);
	// the sale itself is untouched
	assert_eq!(count(&pool, "SELECT count(*) FROM core_sale").await, 1);
}

#[sqlx::test]
async fn deleting_a_user_cascades_to_their_articles(pool: SqlitePool) {
	let author = User::create(&pool, "regis", "regis@example.com").await.unwrap();
	let other = User::create(&pool, "outra", "outra@example.com").await.unwrap();

	Article::create(&pool, "Generated columns", author.id)
		.await
		.unwrap();
	Article::create(&pool, "Choice fields", other.id).await.unwrap();

	author.delete(&pool).await.unwrap();

	let remaining = Article::all(&pool).await.unwrap();
	assert_eq!(remaining.len(), 1);
	assert_eq!(remaining[0].title, "Choice fields");
}

#[sqlx::test]
async fn deleting_the_updater_also_removes_the_article(pool: SqlitePool) {
	let author = User::create(&pool, "autor", "autor@example.com").await.unwrap();
	let editor = User::create(&pool, "editor", "editor@example.com").await.unwrap();

	let mut article = Article::create(&pool, "Rascunho", author.id).await.unwrap();
	article
		.update_title(&pool, "Publicado", editor.id)
		.await
		.unwrap();
	assert_eq!(article.updated_by_id, Some(editor.id));

	editor.delete(&pool).await.unwrap();

	assert!(Article::all(&pool).await.unwrap().is_empty());
}

#[sqlx::test]
async fn sale_requires_an_existing_person(pool: SqlitePool) {
	let result = Sale::create(&pool, 4242).await;
	assert!(result.is_err(), "foreign key violation should surface");
}
