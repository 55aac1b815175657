//! Error conversion glue.
//!
//! The domain layer must not depend on repository error types, so the
//! conversion into the shared `pushkind-common` error lives here.

use pushkind_common::repository::errors::RepositoryError;

use crate::domain::types::TypeConstraintError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
