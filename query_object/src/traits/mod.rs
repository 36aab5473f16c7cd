//! Trait definitions
//!
//! This module defines the seam between query construction and query execution.

pub mod query_executor;

pub use query_executor::{Detached, QueryExecutor};
