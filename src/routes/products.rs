use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, patch, post, put, web};

use crate::forms::products::{ProductRequest, ProductRequestPayload};
use crate::repository::DieselRepository;
use crate::routes::errors::{form_error_response, service_error_response};
use crate::services::products::{
    delete as delete_service, find_all as find_all_service, find_by_id as find_by_id_service,
    save as save_service, update as update_service,
    update_available_product as update_available_product_service,
};

#[get("")]
pub async fn find_all_products(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match find_all_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => service_error_response(&request, err),
    }
}

#[get("/{product_id}")]
pub async fn find_product_by_id(
    request: HttpRequest,
    product_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match find_by_id_service(product_id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(&request, err),
    }
}

#[post("")]
pub async fn save_product(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductRequest>,
) -> impl Responder {
    let payload: ProductRequestPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return form_error_response(&request, e),
    };

    match save_service(payload, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => service_error_response(&request, err),
    }
}

#[put("/{product_id}")]
pub async fn update_product(
    request: HttpRequest,
    product_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductRequest>,
) -> impl Responder {
    let payload: ProductRequestPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return form_error_response(&request, e),
    };

    match update_service(payload, product_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => service_error_response(&request, err),
    }
}

#[patch("/{product_id}")]
pub async fn update_available_product(
    request: HttpRequest,
    product_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_available_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => service_error_response(&request, err),
    }
}

#[delete("/{product_id}")]
pub async fn delete_product(
    request: HttpRequest,
    product_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_service(product_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(&request, err),
    }
}
