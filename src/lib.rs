//! Core library exports for the product service.
//!
//! The `data` feature exposes the domain model, Diesel schema, repositories,
//! request forms, response DTOs and service layer. The `server` feature adds
//! the Actix-web routes and configuration used by the `product-api` binary.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;
