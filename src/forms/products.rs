use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::product::{NewProduct, ProductUpdate};
use crate::domain::types::{ProductName, ProductPrice, TypeConstraintError};

const BLANK_NAME_MESSAGE: &str = "The name field cannot be blank.";

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(BLANK_NAME_MESSAGE.into()));
    }
    Ok(())
}

/// JSON body accepted by the create and update endpoints.
///
/// Missing `name` deserializes as an empty string so that it is reported as a
/// field error rather than a malformed body. `available` defaults to `false`
/// and is ignored on creation.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        required(message = "Price cannot be null."),
        range(min = 0.01, message = "Price must be greater than 0.")
    )]
    pub price: Option<f64>,
    #[serde(default)]
    pub available: bool,
}

/// Validated, strongly typed form of [`ProductRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRequestPayload {
    pub name: ProductName,
    pub price: ProductPrice,
    pub available: bool,
}

impl ProductRequestPayload {
    /// Creation ignores the requested availability.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
        }
    }

    pub fn into_product_update(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            price: self.price,
            available: self.available,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ProductRequestError {
    #[error("Product request validation failed")]
    Validation(Vec<String>),
    #[error("Product request contains invalid data: {0}")]
    TypeConstraint(String),
}

impl ProductRequestError {
    /// Field-level messages suitable for an error envelope, sorted by field.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Validation(details) => details.clone(),
            Self::TypeConstraint(message) => vec![message.clone()],
        }
    }
}

impl From<ValidationErrors> for ProductRequestError {
    fn from(value: ValidationErrors) -> Self {
        let mut details = value
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: {}", error.code),
                })
            })
            .collect::<Vec<_>>();
        details.sort();
        Self::Validation(details)
    }
}

impl From<TypeConstraintError> for ProductRequestError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ProductRequest> for ProductRequestPayload {
    type Error = ProductRequestError;

    fn try_from(value: ProductRequest) -> Result<Self, Self::Error> {
        value.validate()?;
        // `validate` guarantees the price is present.
        let price = value
            .price
            .ok_or_else(|| TypeConstraintError::NotFinite("price"))?;

        Ok(Self {
            name: ProductName::new(value.name)?,
            price: ProductPrice::new(price)?,
            available: value.available,
        })
    }
}
