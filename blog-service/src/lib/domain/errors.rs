use thiserror::Error;

/// Failure of the backing store itself (connection, query, decoding).
///
/// Carries operator-facing detail only; the HTTP layer never renders it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Store error: {0}")]
pub struct StoreError(pub String);
