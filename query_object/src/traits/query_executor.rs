use crate::errors::DetachedError;
use async_trait::async_trait;

/// Async trait for running finished query text against a database
///
/// Implementors own transport, authentication and result decoding. The builder
/// only hands over the text and relays the result or error unchanged.
///
/// ```
/// use async_trait::async_trait;
/// use query_object::QueryExecutor;
///
/// struct Echo;
///
/// #[async_trait]
/// impl QueryExecutor for Echo {
///     type Output = String;
///     type Error = std::io::Error;
///
///     async fn run_query(&self, query: &str) -> Result<String, std::io::Error> {
///         Ok(query.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Result representation produced by the database
    type Output: Send;

    /// Failure surfaced by the database or its transport
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run one query and return its result set
    async fn run_query(&self, query: &str) -> Result<Self::Output, Self::Error>;
}

/// Executor used by builders that only produce query text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detached;

#[async_trait]
impl QueryExecutor for Detached {
    type Output = ();
    type Error = DetachedError;

    async fn run_query(&self, query: &str) -> Result<(), DetachedError> {
        Err(DetachedError {
            query: query.to_string(),
        })
    }
}
