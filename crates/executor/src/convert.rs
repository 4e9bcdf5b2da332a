//! Error conversion from engine error types.
//!
//! This module provides conversions from [`docgraph_core::Error`] to the
//! executor's [`Error`] type, and from per-item engine results to batch
//! slots.

use crate::error::BatchItem;
use crate::Error;
use docgraph_core::Error as CoreError;

/// Convert an engine error to an executor Error.
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            // Not Found errors
            CoreError::DocumentNotFound { id } => Error::DocumentNotFound { id },
            CoreError::CollectionNotFound { name } => Error::CollectionNotFound { collection: name },

            // Conflict errors
            CoreError::Conflict {
                id,
                expected,
                actual,
            } => Error::Conflict {
                id,
                reason: format!("expected revision {}, found {}", expected, actual),
            },
            CoreError::WriteContention { id, attempts } => Error::Conflict {
                id,
                reason: format!("lost {} consecutive write races", attempts),
            },
            CoreError::UniqueConstraintViolated { id } => Error::UniqueConstraintViolated { id },
            CoreError::DuplicateName { name } => Error::DuplicateName { name },

            // Validation errors
            CoreError::IllegalName { name } => Error::IllegalName { name },
            CoreError::DocumentHandleBad { reason } => Error::DocumentHandleBad { reason },
            CoreError::DocumentKeyBad { reason } => Error::DocumentKeyBad { reason },
            CoreError::DocumentTypeInvalid { reason } => Error::DocumentTypeInvalid { reason },
            CoreError::InvalidEdgeAttribute { reason } => Error::InvalidEdgeAttribute { reason },
            CoreError::DocumentTooLarge { reason } => Error::DocumentTooLarge { reason },
            CoreError::BadParameter { reason } => Error::InvalidInput { reason },

            // System errors
            CoreError::Internal { reason } => Error::Internal { reason },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Convert an engine result to an executor result.
pub fn convert_result<T>(result: docgraph_core::Result<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}

/// Turn per-item engine results into batch slots, keeping their order.
pub(crate) fn batch_items<T>(results: Vec<docgraph_core::Result<T>>) -> Vec<BatchItem<T>> {
    results
        .into_iter()
        .map(|result| match result {
            Ok(value) => BatchItem::Ok(value),
            Err(err) => BatchItem::Err(Error::from(err).descriptor()),
        })
        .collect()
}
