use serde::{Deserialize, Serialize};

use super::query::{PageWindow, ProductQuery};
use super::repo::Product;

/// Raw listing parameters. Everything arrives as an optional string and is
/// normalized by [`ProductQuery::from_params`]; malformed numbers are treated
/// as absent, never as a request error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_stock: Option<String>,
    pub max_stock: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub count: Option<i64>,
    #[serde(default)]
    pub clear_existing: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub message: String,
    pub count: i64,
    pub skipped: i64,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pagination: PaginationMeta,
    pub filters: AppliedFilters,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(total: i64, window: &PageWindow) -> Self {
        Self {
            total,
            page: window.page,
            limit: window.limit,
            total_pages: window.total_pages(total),
        }
    }
}

/// Echo of the filter values actually applied, post-normalization, so callers
/// can observe what a defaulted or invalid input resolved to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stock: Option<i64>,
    pub sort_by: &'static str,
    pub sort_order: &'static str,
}

impl AppliedFilters {
    pub fn from_query(query: &ProductQuery) -> Self {
        Self {
            search: query.filter.search.clone(),
            category: query.filter.category.clone(),
            brand: query.filter.brand.clone(),
            min_price: query.filter.min_price,
            max_price: query.filter.max_price,
            min_stock: query.filter.min_stock,
            max_stock: query.filter.max_stock,
            sort_by: query.sort.field.as_str(),
            sort_order: query.sort.order.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub categories: &'static [&'static str],
    pub brands: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use crate::products::query::{ProductFilter, SortSpec};

    #[test]
    fn generate_request_defaults() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.count, None);
        assert!(!req.clear_existing);

        let req: GenerateRequest =
            serde_json::from_str(r#"{"count": 42, "clearExisting": true}"#).unwrap();
        assert_eq!(req.count, Some(42));
        assert!(req.clear_existing);
    }

    #[test]
    fn pagination_serializes_camel_case() {
        let meta = PaginationMeta::new(101, &PageWindow { page: 2, limit: 50 });
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains(r#""totalPages":3"#));
        assert!(json.contains(r#""total":101"#));
    }

    #[test]
    fn applied_filters_echo_normalized_sort() {
        let query = ProductQuery {
            filter: ProductFilter::default(),
            sort: SortSpec::default(),
            window: PageWindow::default(),
        };
        let filters = AppliedFilters::from_query(&query);
        let json = serde_json::to_string(&filters).unwrap();
        assert!(json.contains(r#""sortBy":"name""#));
        assert!(json.contains(r#""sortOrder":"ASC""#));
        // Absent criteria are omitted from the echo entirely.
        assert!(!json.contains("search"));
        assert!(!json.contains("minPrice"));
    }

    #[test]
    fn list_query_accepts_arbitrary_strings() {
        let params: ListProductsQuery =
            serde_json::from_str(r#"{"minPrice": "not-a-number", "page": "-3"}"#).unwrap();
        assert_eq!(params.min_price.as_deref(), Some("not-a-number"));
        assert_eq!(params.page.as_deref(), Some("-3"));
    }
}
