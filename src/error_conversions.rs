//! Error conversion glue between the domain layer and the repository layer.
//!
//! The domain layer must not depend on repository error types, so the
//! conversion lives here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
