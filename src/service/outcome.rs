//! Failure normalization at the service boundary.
//!
//! The persistence layer's convention is that every fallible operation
//! resolves to a `Result<T, ServiceError>` instead of panicking; this
//! module is the single place foreign failures are folded into that
//! taxonomy. Errors already in the taxonomy convert via `From` with
//! their message preserved untouched.

use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use crate::asset::ValidationError;
use crate::store::StoreError;

/// Uniform error taxonomy for persistence operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input or a merged record failed schema constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Mutation target identifier absent from the collection.
    #[error("Asset '{id}' not found")]
    NotFound { id: Uuid },

    /// Underlying read/write failure; the backend message is forwarded
    /// verbatim.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Await `op` and fold any failure outside the taxonomy into a storage
/// error carrying the failure's display text verbatim.
///
/// Never panics and always resolves; this is the bridge for futures
/// whose error type is anything printable.
pub async fn normalize<T, E, F>(op: F) -> ServiceResult<T>
where
    E: std::fmt::Display,
    F: Future<Output = Result<T, E>>,
{
    op.await
        .map_err(|e| ServiceError::Storage(StoreError::Backend(e.to_string())))
}
