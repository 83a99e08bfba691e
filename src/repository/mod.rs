use crate::db::{DbConnection, DbPool};
use crate::domain::{
    brand::{Brand, NewBrand},
    category::{Category, NewCategory},
    product::{NewProduct, Product, ProductListQuery},
    purpose::{NewPurpose, Purpose},
};

pub use errors::{RepositoryError, RepositoryResult};

pub mod brand;
pub mod category;
pub mod errors;
pub mod product;
pub mod purpose;

#[cfg(test)]
pub mod memory;
#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only access to brands, ordered by name.
pub trait BrandReader {
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;
}

pub trait BrandWriter {
    /// Insert the brand or refresh the existing row with the same id.
    fn upsert_brand(&self, brand: &NewBrand) -> RepositoryResult<Brand>;
}

/// Read-only access to categories, ordered by name.
pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

pub trait CategoryWriter {
    /// Insert the category or refresh the existing row with the same id.
    fn upsert_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only access to purposes, ordered by name.
pub trait PurposeReader {
    fn list_purposes(&self) -> RepositoryResult<Vec<Purpose>>;
}

pub trait PurposeWriter {
    /// Insert the purpose or refresh the existing row with the same id.
    fn upsert_purpose(&self, purpose: &NewPurpose) -> RepositoryResult<Purpose>;
}

/// Read-only operations over catalog products.
pub trait ProductReader {
    /// List products matching the query with relations and images attached,
    /// ordered by priority (highest first).
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Fetch a single visible product.
    fn get_product_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;
}

pub trait ProductWriter {
    /// Insert or refresh a product and replace its image set.
    fn upsert_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Delete every product whose id is not in `keep_ids`, images included.
    /// Returns the number of products removed.
    fn delete_products_except(&self, keep_ids: &[String]) -> RepositoryResult<usize>;
}
