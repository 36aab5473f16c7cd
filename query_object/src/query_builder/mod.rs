//! Query builder utilities
//!
//! This module provides query text construction for InfluxQL-style databases.

pub mod aggregation;
pub mod builder;
pub mod filter;
pub mod grouping;
pub mod ordering;
pub mod pagination;
pub mod query_generation;
pub mod time_range;



pub use aggregation::AggregateFunction;
pub use builder::QueryBuilder;
pub use filter::{LogicalOperator, QueryCondition, QueryOperator};
pub use ordering::SortOrder;
pub use time_range::TimeRange;
