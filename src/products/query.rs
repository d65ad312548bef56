//! Translates raw listing parameters into a safe, composable query shape.
//!
//! Sort identifiers are only ever interpolated from [`SortField::as_str`] /
//! [`SortOrder::as_str`], so request text never reaches the SQL string; every
//! filter value is bound as a parameter. The count query and the row query
//! share [`ProductFilter::push_where`], which keeps their predicates from
//! drifting apart.

use sqlx::{QueryBuilder, Sqlite};

use super::dto::ListProductsQuery;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Allow-listed sortable columns. Anything else falls back to `Name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    StockQuantity,
    Category,
    Brand,
    CreatedAt,
}

impl SortField {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => Self::Name,
            Some("price") => Self::Price,
            Some("stock_quantity") => Self::StockQuantity,
            Some("category") => Self::Category,
            Some("brand") => Self::Brand,
            Some("created_at") => Self::CreatedAt,
            _ => Self::Name,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::StockQuantity => "stock_quantity",
            Self::Category => "category",
            Self::Brand => "brand",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only a case-insensitive `DESC` selects descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.eq_ignore_ascii_case("DESC") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            order: SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn new(page: Option<&str>, limit: Option<&str>, max_limit: i64) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(max_limit);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// `ceil(total / limit)`, 0 for an empty result set.
    pub fn total_pages(&self, total: i64) -> i64 {
        if total == 0 {
            0
        } else {
            (total + self.limit - 1) / self.limit
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Conjunctive filter criteria. Absent fields contribute no clause; an empty
/// filter matches every row.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_stock: Option<i64>,
    pub max_stock: Option<i64>,
}

impl ProductFilter {
    /// Normalize raw query strings: empty strings and unparseable numbers are
    /// treated as absent rather than erroring the request.
    pub fn from_params(params: &ListProductsQuery) -> Self {
        Self {
            search: non_empty(params.search.as_deref()),
            category: non_empty(params.category.as_deref()),
            brand: non_empty(params.brand.as_deref()),
            min_price: parse_number(params.min_price.as_deref()),
            max_price: parse_number(params.max_price.as_deref()),
            min_stock: parse_integer(params.min_stock.as_deref()),
            max_stock: parse_integer(params.max_stock.as_deref()),
        }
    }

    /// Append the WHERE clause for this filter. Used for both the count and
    /// the row query so the two always apply the identical predicate.
    pub(super) fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        let mut first = true;

        if let Some(search) = &self.search {
            let pattern = format!("%{search}%");
            clause_prefix(qb, &mut first);
            qb.push("(name LIKE ")
                .push_bind(pattern.clone())
                .push(" OR description LIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(category) = &self.category {
            clause_prefix(qb, &mut first);
            qb.push("category = ").push_bind(category.clone());
        }
        if let Some(brand) = &self.brand {
            clause_prefix(qb, &mut first);
            qb.push("brand = ").push_bind(brand.clone());
        }
        if let Some(min_price) = self.min_price {
            clause_prefix(qb, &mut first);
            qb.push("price >= ").push_bind(min_price);
        }
        if let Some(max_price) = self.max_price {
            clause_prefix(qb, &mut first);
            qb.push("price <= ").push_bind(max_price);
        }
        if let Some(min_stock) = self.min_stock {
            clause_prefix(qb, &mut first);
            qb.push("stock_quantity >= ").push_bind(min_stock);
        }
        if let Some(max_stock) = self.max_stock {
            clause_prefix(qb, &mut first);
            qb.push("stock_quantity <= ").push_bind(max_stock);
        }
    }
}

fn clause_prefix(qb: &mut QueryBuilder<'_, Sqlite>, first: &mut bool) {
    qb.push(if *first { " WHERE " } else { " AND " });
    *first = false;
}

/// The fully normalized shape of one listing request.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: SortSpec,
    pub window: PageWindow,
}

impl ProductQuery {
    pub fn from_params(params: &ListProductsQuery, max_page_size: i64) -> Self {
        Self {
            filter: ProductFilter::from_params(params),
            sort: SortSpec {
                field: SortField::parse(params.sort_by.as_deref()),
                order: SortOrder::parse(params.sort_order.as_deref()),
            },
            window: PageWindow::new(
                params.page.as_deref(),
                params.limit.as_deref(),
                max_page_size,
            ),
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_string)
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn parse_integer(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
}
