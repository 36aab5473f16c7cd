//! Convenience re-exports for common query-object usage

// Query building
pub use crate::query_builder::{
    AggregateFunction, LogicalOperator, QueryBuilder, QueryCondition, QueryOperator, SortOrder,
    TimeRange,
};

// Execution seam
pub use crate::traits::{Detached, QueryExecutor};

// Error types
pub use crate::errors::{DetachedError, ExecuteError, QueryError};

// Rendering settings
pub use config::{EscapeStrategy, QueryConfig, TimeZoneSetting};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde_json::{json, Value};
