use thiserror::Error;

/// Failures detected while turning builder state into query text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid query: no metric provided")]
    MissingMetric,

    #[error("Invalid query: timestamp {0} is outside the representable range")]
    InvalidTimestamp(i64),

    #[error("Invalid query: time zone offset {0} seconds is out of range")]
    InvalidTimeZone(i32),

    #[error("Invalid query: unknown sort direction '{0}'")]
    InvalidSortOrder(String),
}

impl QueryError {
    /// Whether this error came from formatting a time range
    pub fn is_time_range_error(&self) -> bool {
        matches!(
            self,
            QueryError::InvalidTimestamp(_) | QueryError::InvalidTimeZone(_)
        )
    }
}

/// Error returned by `QueryBuilder::execute`
///
/// Executor failures are carried untouched in `Executor`.
#[derive(Error, Debug)]
pub enum ExecuteError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Executor(E),
}

/// Returned by the `Detached` executor, which never runs anything
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No query executor attached: query text was {query}")]
pub struct DetachedError {
    pub query: String,
}
