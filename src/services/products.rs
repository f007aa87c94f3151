use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::dto::products::ProductResponse;
use crate::forms::products::ProductRequestPayload;
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Message returned when the catalogue holds no products.
pub const EMPTY_PRODUCT_LIST: &str = "The product list is empty";

fn not_found(product_id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Product not found by id {product_id}"))
}

/// Loads a product or converts its absence into [`ServiceError::NotFound`].
///
/// Identifiers outside `1..=i32::MAX` can never match a stored row and are
/// reported as not found as well.
fn load_product<R>(product_id: i64, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let Some(id) = i32::try_from(product_id)
        .ok()
        .and_then(|id| ProductId::new(id).ok())
    else {
        log::warn!("Product id {product_id} is out of range");
        return Err(not_found(product_id));
    };

    match repo.get_product_by_id(id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => {
            log::warn!("Product with ID {product_id} not found");
            Err(not_found(product_id))
        }
        Err(e) => {
            log::error!("Failed to get product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Returns every product in the catalogue.
///
/// An empty catalogue is reported as [`ServiceError::NotFound`] rather than an
/// empty list; clients rely on the 404.
pub fn find_all<R>(repo: &R) -> ServiceResult<Vec<ProductResponse>>
where
    R: ProductReader,
{
    log::info!("Initiating find all products operation");

    let products = match repo.list_products() {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if products.is_empty() {
        log::warn!("No products found in the repository");
        return Err(ServiceError::NotFound(EMPTY_PRODUCT_LIST.to_string()));
    }

    log::info!("Found {} products", products.len());
    Ok(products.into_iter().map(ProductResponse::from).collect())
}

/// Returns a single product.
pub fn find_by_id<R>(product_id: i64, repo: &R) -> ServiceResult<ProductResponse>
where
    R: ProductReader,
{
    log::info!("Attempting to find product with ID: {product_id}");

    let product = load_product(product_id, repo)?;
    log::info!("Product found: ID = {}, Name = {}", product.id, product.name);

    Ok(product.into())
}

/// Creates a product. New products are always available regardless of the
/// requested flag; identity and timestamps come from storage.
pub fn save<R>(payload: ProductRequestPayload, repo: &R) -> ServiceResult<ProductResponse>
where
    R: ProductWriter,
{
    log::info!(
        "Starting save operation for product with name: {}",
        payload.name
    );

    let new_product = payload.into_new_product();
    match repo.create_product(&new_product) {
        Ok(product) => {
            log::info!("Product saved with ID: {}", product.id);
            Ok(product.into())
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrites every mutable field of an existing product.
pub fn update<R>(payload: ProductRequestPayload, product_id: i64, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    log::info!("Starting update operation for product with ID: {product_id}");

    let product = load_product(product_id, repo)?;
    let update = payload.into_product_update();

    match repo.update_product(product.id, &update) {
        Ok(0) => {
            log::warn!("Product with ID {product_id} disappeared before update");
            Err(not_found(product_id))
        }
        Ok(_) => {
            log::info!("Product updated successfully with ID: {product_id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to update product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Permanently removes a product.
pub fn delete<R>(product_id: i64, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    log::info!("Starting delete operation for product with ID: {product_id}");

    let product = load_product(product_id, repo)?;

    match repo.delete_product(product.id) {
        Ok(0) => {
            log::warn!("Product with ID {product_id} disappeared before delete");
            Err(not_found(product_id))
        }
        Ok(_) => {
            log::info!("Product with ID: {product_id} has been successfully deleted");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Flips the availability flag of a product.
pub fn update_available_product<R>(product_id: i64, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    log::info!("Starting update of product availability for product with ID: {product_id}");

    let product = load_product(product_id, repo)?;
    let new_availability = !product.available;
    log::info!("Updating product availability to: {new_availability}");

    match repo.set_product_availability(product.id, new_availability) {
        Ok(0) => {
            log::warn!("Product with ID {product_id} disappeared before availability update");
            Err(not_found(product_id))
        }
        Ok(_) => {
            log::info!("Product availability updated successfully for ID: {product_id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to update availability of product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
