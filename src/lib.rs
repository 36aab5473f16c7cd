//! # QueryHaus
//!
//! A fluent query-text builder for InfluxQL-style time-series databases.
//! QueryHaus assembles selections, time ranges, conditions, grouping, ordering
//! and pagination in any order and serializes them in grammar order. Running
//! the query is left to a `QueryExecutor` you provide.
//!
//! ## Quick Start
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! struct HttpClient;
//!
//! #[async_trait]
//! impl QueryExecutor for HttpClient {
//!     type Output = Value;
//!     type Error = std::io::Error;
//!
//!     async fn run_query(&self, query: &str) -> Result<Value, std::io::Error> {
//!         // send `query` to the database here
//!         Ok(json!({ "query": query }))
//!     }
//! }
//!
//! let queryhaus = QueryHaus::with_defaults(HttpClient);
//!
//! let text = queryhaus
//!     .metric("load")
//!     .set_time_range(1000, 2000)
//!     .where_eq("host", "serverA")
//!     .limit(10)
//!     .build_query_text()?;
//!
//! assert_eq!(
//!     text,
//!     "SELECT * FROM \"load\" WHERE (time >= '1970-01-01 00:16:40' AND time <= '1970-01-01 00:33:20') AND (host = 'serverA') LIMIT 10"
//! );
//! # Ok::<(), QueryHausError>(())
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::QueryHaus;
pub use errors::QueryHausError;

// Re-export centralized config
pub use config::{AppConfig, EscapeStrategy, QueryConfig, TimeZoneSetting};

// Re-export internal crates used by the public API
pub use query_object;

// Re-export external dependencies used in public API
pub use async_trait;
