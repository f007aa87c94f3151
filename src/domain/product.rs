use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, ProductName, ProductPrice};

/// A product as stored in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub available: bool,
    /// Stamped by storage on insert and never changed afterwards.
    pub created_date: NaiveDateTime,
    /// Stamped by storage on insert and refreshed by every update.
    pub last_modified_date: NaiveDateTime,
}

/// Information required to create a new [`Product`].
///
/// Availability is not part of the payload: new products always start out
/// available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
}

/// Full overwrite of every mutable [`Product`] field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: ProductName,
    pub price: ProductPrice,
    pub available: bool,
}
