use thiserror::Error;

/// Outcomes of contact store operations that handlers map to HTTP status
/// codes. Source errors stay server-side; clients only ever see the generic
/// messages.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not acquire a database connection")]
    Unavailable(#[source] sqlx::Error),
    #[error("duplicate record")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("database query failed")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(error)
            }
            sqlx::Error::Database(database_error) if database_error.is_unique_violation() => {
                Self::Conflict
            }
            _ => Self::Query(error),
        }
    }
}
