//! Convenience re-exports for common QueryHaus usage
//!
//! This prelude module re-exports the most commonly used items from the QueryHaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! let query = QueryBuilder::detached().select_metric("cpu").build_query_text();
//! assert!(query.is_ok());
//! ```

// Core QueryHaus components
pub use crate::core::QueryHaus;
pub use crate::errors::QueryHausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, EscapeStrategy, QueryConfig, TimeZoneSetting};

// Re-export commonly used query-object types for convenience
pub use query_object::prelude::*;

// Common external dependencies
pub use async_trait;
