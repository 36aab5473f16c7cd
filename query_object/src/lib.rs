//! Query Object - Core query construction layer for QueryHaus
//!
//! This crate provides the fluent query builder, the escaping rules applied to
//! condition text, and the executor trait that finished queries are handed to.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod escaping;
pub mod prelude;
pub mod query_builder;
pub mod traits;

pub use config::{EscapeStrategy, QueryConfig, TimeZoneSetting};
pub use errors::{DetachedError, ExecuteError, QueryError};
pub use query_builder::{
    AggregateFunction, LogicalOperator, QueryBuilder, QueryCondition, QueryOperator, SortOrder,
    TimeRange,
};
pub use traits::{Detached, QueryExecutor};
