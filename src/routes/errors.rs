//! Uniform JSON error envelope returned by every failing endpoint.

use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse};
use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::forms::products::ProductRequestError;
use crate::services::ServiceError;

/// Format used for the `timestamp` field of [`ApiError`].
pub const API_ERROR_TIMESTAMP_FORMAT: &str = "%d:%m:%Y %H:%M:%S";

fn serialize_timestamp<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(API_ERROR_TIMESTAMP_FORMAT))
}

/// Error body shared by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub http_code: u16,
    pub url: String,
    pub http_method: String,
    pub message: String,
    pub backend_message: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    /// Remediation hints, most relevant first.
    pub details: Vec<String>,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        request: &HttpRequest,
        message: impl Into<String>,
        backend_message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            http_code: status.as_u16(),
            url: request.uri().to_string(),
            http_method: request.method().to_string(),
            message: message.into(),
            backend_message: backend_message.into(),
            timestamp: Local::now().naive_local(),
            details,
        }
    }

    pub fn not_found(request: &HttpRequest, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            request,
            message,
            "The requested product does not exist in the database.",
            vec![
                "Verify that the product id is correct".to_string(),
                "List the available products with GET /api/v1/products".to_string(),
            ],
        )
    }

    pub fn empty_list(request: &HttpRequest, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            request,
            message,
            "The request was successful, but there are no products available in the database.",
            vec![
                "Ensure products are added to the database".to_string(),
                "Check the database connection".to_string(),
            ],
        )
    }

    pub fn bad_request(
        request: &HttpRequest,
        backend_message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            request,
            "Invalid request",
            backend_message,
            details,
        )
    }

    pub fn internal(request: &HttpRequest) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            request,
            "Internal server error",
            "An unexpected error occurred while processing the request.",
            vec![
                "Retry the request later".to_string(),
                "Check the service logs".to_string(),
            ],
        )
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.http_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status()).json(self)
    }
}

/// Render a service failure.
pub fn service_error_response(request: &HttpRequest, err: ServiceError) -> HttpResponse {
    let api_error = match err {
        ServiceError::NotFound(message)
            if message == crate::services::products::EMPTY_PRODUCT_LIST =>
        {
            ApiError::empty_list(request, message)
        }
        ServiceError::NotFound(message) => ApiError::not_found(request, message),
        ServiceError::Internal => ApiError::internal(request),
    };
    api_error.into_response()
}

/// Render a rejected request body.
pub fn form_error_response(request: &HttpRequest, err: ProductRequestError) -> HttpResponse {
    ApiError::bad_request(request, err.to_string(), err.details()).into_response()
}

/// Error handler for `web::JsonConfig`: malformed or mistyped bodies.
pub fn json_error_handler(err: JsonPayloadError, request: &HttpRequest) -> Error {
    log::warn!("Rejected request body for {}: {err}", request.uri());
    let response = ApiError::bad_request(
        request,
        err.to_string(),
        vec!["Send a JSON object with `name`, `price` and `available` fields".to_string()],
    )
    .into_response();
    InternalError::from_response(err, response).into()
}

/// Error handler for `web::PathConfig`: non-numeric identifiers.
pub fn path_error_handler(err: PathError, request: &HttpRequest) -> Error {
    log::warn!("Rejected path parameters for {}: {err}", request.uri());
    let response = ApiError::bad_request(
        request,
        err.to_string(),
        vec!["The product id must be an integer".to_string()],
    )
    .into_response();
    InternalError::from_response(err, response).into()
}

/// Fallback for paths that match no route.
pub async fn route_not_found(request: HttpRequest) -> HttpResponse {
    ApiError::new(
        StatusCode::NOT_FOUND,
        &request,
        "Resource not found",
        format!("No route matches {} {}", request.method(), request.uri()),
        vec!["Product endpoints live under /api/v1/products".to_string()],
    )
    .into_response()
}
