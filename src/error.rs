/// Storage error type shared by every store.
///
/// Connection acquisition failures and statement failures are both reported
/// as a [`StorageError`]. The two are told apart only through the context
/// message or by inspecting the wrapped [`sqlx::Error`].

use thiserror::Error;

/// Result alias used by all store operations
pub type Result<T> = std::result::Result<T, StorageError>;

const CONNECTION_CONTEXT: &str = "error when connecting to the workflow database";
const QUERY_CONTEXT: &str = "error when executing the sql statement";

/// Failure raised by the persistence layer
#[derive(Debug, Error)]
#[error("{context}: {source}")]
pub struct StorageError {
    context: &'static str,
    #[source]
    source: sqlx::Error,
}

impl StorageError {
    /// Wrap a failure that happened while obtaining a connection or transaction
    pub(crate) fn connection(source: sqlx::Error) -> Self {
        Self {
            context: CONNECTION_CONTEXT,
            source,
        }
    }

    /// Wrap a failure that happened while running a statement or committing
    pub(crate) fn query(source: sqlx::Error) -> Self {
        Self {
            context: QUERY_CONTEXT,
            source,
        }
    }

    /// The underlying driver error
    pub fn cause(&self) -> &sqlx::Error {
        &self.source
    }
}
