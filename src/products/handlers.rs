use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::state::AppState;

use super::dto::{
    AppliedFilters, FilterOptions, GenerateRequest, GenerateResponse, ListProductsQuery,
    MessageResponse, PaginationMeta, ProductListResponse,
};
use super::generator;
use super::lookup;
use super::query::ProductQuery;
use super::repo::{self, CatalogStats};

const DEFAULT_GENERATE_COUNT: i64 = 100;
const MAX_GENERATE_COUNT: i64 = 10_000;

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/stats", get(product_stats))
        .route("/products/filters", get(filter_options))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products/generate", post(generate_products))
        .route("/products", delete(clear_products))
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsQuery>,
) -> Result<Json<ProductListResponse>, (StatusCode, String)> {
    let query = ProductQuery::from_params(&params, state.config.max_page_size);
    let (products, total) = repo::list_products(&state.db, &query)
        .await
        .map_err(|e| store_failure(e, "Failed to retrieve products"))?;

    Ok(Json(ProductListResponse {
        products,
        pagination: PaginationMeta::new(total, &query.window),
        filters: AppliedFilters::from_query(&query),
    }))
}

#[instrument(skip(state, body))]
pub async fn generate_products(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let count = body.count.unwrap_or(DEFAULT_GENERATE_COUNT);
    if !(1..=MAX_GENERATE_COUNT).contains(&count) {
        warn!(count, "generate count out of range");
        return Err((
            StatusCode::BAD_REQUEST,
            "Count must be between 1 and 10000".into(),
        ));
    }

    info!(count, clear_existing = body.clear_existing, "generating products");
    let drafts = generator::generate_products(count as usize);

    if body.clear_existing {
        repo::delete_all(&state.db)
            .await
            .map_err(|e| store_failure(e, "Failed to generate products"))?;
    }

    let outcome = repo::insert_batches(&state.db, &drafts)
        .await
        .map_err(|e| store_failure(e, "Failed to generate products"))?;

    info!(
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        "products generated"
    );
    Ok(Json(GenerateResponse {
        message: format!("Successfully generated {} products", outcome.inserted),
        count: outcome.inserted,
        skipped: outcome.skipped,
    }))
}

#[instrument(skip(state))]
pub async fn product_stats(
    State(state): State<AppState>,
) -> Result<Json<CatalogStats>, (StatusCode, String)> {
    let stats = repo::aggregate_stats(&state.db)
        .await
        .map_err(|e| store_failure(e, "Failed to get statistics"))?;
    Ok(Json(stats))
}

pub async fn filter_options() -> Json<FilterOptions> {
    Json(FilterOptions {
        categories: &lookup::CATEGORIES,
        brands: &lookup::BRANDS,
    })
}

#[instrument(skip(state))]
pub async fn clear_products(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let deleted = repo::delete_all(&state.db)
        .await
        .map_err(|e| store_failure(e, "Failed to clear products"))?;
    info!(deleted, "cleared products");
    Ok(Json(MessageResponse {
        message: "All products cleared successfully".into(),
    }))
}

/// Store failures become a generic 500; the detail stays in the server log.
fn store_failure(e: anyhow::Error, message: &str) -> (StatusCode, String) {
    error!(error = %e, "{}", message);
    (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
}

#[cfg(test)]
mod handler_tests {
    use super::*;
    use crate::config::AppConfig;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;

    async fn test_state() -> AppState {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            max_page_size: 500,
        });
        AppState::from_parts(pool, config)
    }

    #[tokio::test]
    async fn generate_rejects_out_of_range_count() {
        let state = test_state().await;
        for count in [0, -5, 10_001] {
            let body = GenerateRequest {
                count: Some(count),
                clear_existing: false,
            };
            let err = generate_products(State(state.clone()), Json(body))
                .await
                .expect_err("count should be rejected");
            assert_eq!(err.0, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn generate_then_list_round_trip() {
        let state = test_state().await;
        let body = GenerateRequest {
            count: Some(25),
            clear_existing: false,
        };
        let generated = generate_products(State(state.clone()), Json(body))
            .await
            .expect("generate products");
        assert_eq!(generated.0.count + generated.0.skipped, 25);

        let listed = list_products(State(state), Query(ListProductsQuery::default()))
            .await
            .expect("list products");
        assert_eq!(listed.0.pagination.total, generated.0.count);
        assert_eq!(listed.0.pagination.page, 1);
        assert_eq!(listed.0.filters.sort_by, "name");
        assert_eq!(listed.0.filters.sort_order, "ASC");
    }

    #[tokio::test]
    async fn clear_existing_resets_the_store() {
        let state = test_state().await;
        let first = GenerateRequest {
            count: Some(30),
            clear_existing: false,
        };
        generate_products(State(state.clone()), Json(first))
            .await
            .expect("first generate");

        let second = GenerateRequest {
            count: Some(10),
            clear_existing: true,
        };
        let regenerated = generate_products(State(state.clone()), Json(second))
            .await
            .expect("second generate");

        let listed = list_products(State(state), Query(ListProductsQuery::default()))
            .await
            .expect("list products");
        assert_eq!(listed.0.pagination.total, regenerated.0.count);
    }

    #[tokio::test]
    async fn invalid_sort_field_echoes_fallback() {
        let state = test_state().await;
        let params = ListProductsQuery {
            sort_by: Some("nonexistent".into()),
            sort_order: Some("sideways".into()),
            ..Default::default()
        };
        let listed = list_products(State(state), Query(params))
            .await
            .expect("list products");
        assert_eq!(listed.0.filters.sort_by, "name");
        assert_eq!(listed.0.filters.sort_order, "ASC");
    }

    #[tokio::test]
    async fn clear_products_reports_success() {
        let state = test_state().await;
        let cleared = clear_products(State(state))
            .await
            .expect("clear products");
        assert_eq!(cleared.0.message, "All products cleared successfully");
    }
}
