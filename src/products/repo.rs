use anyhow::Context;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use time::OffsetDateTime;

use super::query::ProductQuery;

/// Rows per INSERT statement on the generate path.
pub const INSERT_BATCH_SIZE: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub sku: String,
    pub created_at: OffsetDateTime,
}

/// A product about to be inserted; `id` and `created_at` are store-assigned.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub sku: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOutcome {
    pub inserted: i64,
    pub skipped: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CatalogStats {
    pub total_products: i64,
    pub total_categories: i64,
    pub total_brands: i64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub avg_price: Option<f64>,
    pub total_stock: Option<i64>,
}

/// Count and fetch one page of products under the same predicate.
pub async fn list_products(
    db: &SqlitePool,
    query: &ProductQuery,
) -> anyhow::Result<(Vec<Product>, i64)> {
    let mut count_qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM products");
    query.filter.push_where(&mut count_qb);
    let total: i64 = count_qb
        .build_query_scalar()
        .fetch_one(db)
        .await
        .context("count products")?;

    let mut select_qb = QueryBuilder::<Sqlite>::new(
        "SELECT id, name, description, category, brand, price, stock_quantity, sku, created_at \
         FROM products",
    );
    query.filter.push_where(&mut select_qb);
    select_qb
        .push(" ORDER BY ")
        .push(query.sort.field.as_str())
        .push(" ")
        .push(query.sort.order.as_str())
        .push(" LIMIT ")
        .push_bind(query.window.limit)
        .push(" OFFSET ")
        .push_bind(query.window.offset());

    let products = select_qb
        .build_query_as::<Product>()
        .fetch_all(db)
        .await
        .context("select products")?;

    Ok((products, total))
}

/// Insert drafts in fixed-size batches, skipping rows whose SKU already
/// exists. A non-constraint failure aborts the remaining batches; batches
/// already committed stay committed.
pub async fn insert_batches(
    db: &SqlitePool,
    drafts: &[NewProduct],
) -> anyhow::Result<InsertOutcome> {
    let mut outcome = InsertOutcome::default();
    for batch in drafts.chunks(INSERT_BATCH_SIZE) {
        let inserted = insert_batch(db, batch).await?;
        outcome.inserted += inserted;
        outcome.skipped += batch.len() as i64 - inserted;
    }
    Ok(outcome)
}

async fn insert_batch(db: &SqlitePool, batch: &[NewProduct]) -> anyhow::Result<i64> {
    let mut qb = QueryBuilder::<Sqlite>::new(
        "INSERT INTO products (name, description, category, brand, price, stock_quantity, sku) ",
    );
    qb.push_values(batch, |mut row, product| {
        row.push_bind(&product.name)
            .push_bind(&product.description)
            .push_bind(&product.category)
            .push_bind(&product.brand)
            .push_bind(product.price)
            .push_bind(product.stock_quantity)
            .push_bind(&product.sku);
    });
    qb.push(" ON CONFLICT(sku) DO NOTHING");

    let result = qb
        .build()
        .execute(db)
        .await
        .context("insert product batch")?;
    Ok(result.rows_affected() as i64)
}

pub async fn delete_all(db: &SqlitePool) -> anyhow::Result<i64> {
    let result = sqlx::query("DELETE FROM products")
        .execute(db)
        .await
        .context("delete all products")?;
    Ok(result.rows_affected() as i64)
}

/// Aggregates over the full store; any active listing filter is ignored.
pub async fn aggregate_stats(db: &SqlitePool) -> anyhow::Result<CatalogStats> {
    let stats = sqlx::query_as::<_, CatalogStats>(
        r#"
        SELECT
            COUNT(*) as total_products,
            COUNT(DISTINCT category) as total_categories,
            COUNT(DISTINCT brand) as total_brands,
            MIN(price) as min_price,
            MAX(price) as max_price,
            AVG(price) as avg_price,
            SUM(stock_quantity) as total_stock
        FROM products
        "#,
    )
    .fetch_one(db)
    .await
    .context("aggregate product stats")?;
    Ok(stats)
}
