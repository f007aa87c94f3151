use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
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
pub trait ProductReader {
    /// List every stored product, ordered by identifier.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product and return the stored row.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite the mutable fields of a product.
    fn update_product(&self, id: ProductId, update: &ProductUpdate) -> RepositoryResult<usize>;
    /// Set the availability flag of a product.
    fn set_product_availability(&self, id: ProductId, available: bool)
    -> RepositoryResult<usize>;
    /// Delete a product permanently.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
