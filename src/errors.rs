//! Error types for the QueryHaus crate
//!
//! This module contains the error type returned by QueryHaus setup and by
//! callers that want one error for both configuration and query building.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryHausError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Query(#[from] query_object::QueryError),
}
