//! Error conversion glue between domain constraint failures and the
//! repository layer.
//!
//! The domain layer must not depend on repository error types, so the
//! conversion lives here instead of next to `TypeConstraintError`.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}
