use crate::db::{DbConnection, DbPool};
use crate::domain::company::{Company, NewCompany};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductCode;
use crate::dto::image_product::ImageProductDto;
use crate::repository::criteria::ProductCriteria;

pub use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod criteria;
pub mod errors;
pub mod image;
pub mod product;
pub mod sql;
pub mod store;

diesel::define_sql_function! {
    /// SQL `lower()`, used for case-insensitive name matching.
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between callers. Every operation runs inside its
/// own transaction: any error propagated out of the unit of work rolls back
/// all writes made within it.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for product entities.
///
/// The three search methods are deliberately redundant: they express the
/// same query through the criteria list, a raw SQL string and a built SQL
/// statement, and must return identical result sets.
pub trait ProductReader {
    /// Products matching an AND-combined predicate list, ordered by id.
    fn search_products(&self, criteria: &ProductCriteria) -> RepositoryResult<Vec<Product>>;
    /// Same search expressed as a raw SQL string with positional binds.
    fn search_products_raw(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> RepositoryResult<Vec<Product>>;
    /// Same search expressed through the sea-query statement builder.
    fn search_products_built(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> RepositoryResult<Vec<Product>>;
    /// The unique product with the given code stocked above `min_quantity`.
    ///
    /// Fails with [`RepositoryError::NotFound`] on zero matches and
    /// [`RepositoryError::NonUnique`] on more than one.
    fn get_product_in_stock(
        &self,
        code: &ProductCode,
        min_quantity: i32,
    ) -> RepositoryResult<Product>;
}

/// Read-only projections over images joined to their products.
pub trait ImageReader {
    /// Distinct image/product name pairs ordered by image name.
    fn list_image_products(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> RepositoryResult<Vec<ImageProductDto>>;
    /// Same projection expressed through the sea-query statement builder.
    fn list_image_products_built(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> RepositoryResult<Vec<ImageProductDto>>;
}

/// Write operations for seeding and clearing the store.
pub trait StoreWriter {
    /// Persist a new company.
    fn create_company(&self, company: &NewCompany) -> RepositoryResult<Company>;
    /// Persist products together with their images and warehouse records in
    /// a single unit of work.
    fn create_products(&self, products: &[NewProduct]) -> RepositoryResult<usize>;
    /// Delete every row in the store, children first.
    fn clear(&self) -> RepositoryResult<()>;
}

/// LIKE pattern for a case-insensitive substring match.
pub(crate) fn like_pattern(needle: &str) -> String {
    format!("%{}%", needle.to_lowercase())
}

/// Enforces exactly-one-result semantics on a loaded row set.
pub(crate) fn exactly_one<T>(mut items: Vec<T>) -> RepositoryResult<T> {
    match items.len() {
        0 => Err(RepositoryError::NotFound),
        1 => Ok(items.remove(0)),
        _ => Err(RepositoryError::NonUnique),
    }
}
