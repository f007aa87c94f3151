use actix_web::web;

pub mod errors;
pub mod products;

/// Base path of the product endpoints.
pub const PRODUCTS_SCOPE: &str = "/api/v1/products";

/// Register the product endpoints together with the extractor configuration
/// that turns malformed bodies and identifiers into `ApiError` responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
        .service(
            web::scope(PRODUCTS_SCOPE)
                .service(products::find_all_products)
                .service(products::save_product)
                .service(products::find_product_by_id)
                .service(products::update_product)
                .service(products::update_available_product)
                .service(products::delete_product),
        );
}
