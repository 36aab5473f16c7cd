//! Core QueryHaus functionality
//!
//! This module contains the main QueryHaus struct, which pairs one query
//! executor with one rendering configuration and hands out builders bound to both.

use config::{AppConfig, QueryConfig};
use query_object::{QueryBuilder, QueryExecutor};

use crate::errors::QueryHausError;

/// Main QueryHaus coordinator that owns the executor and query configuration
pub struct QueryHaus<E> {
    executor: E,
    config: QueryConfig,
}

impl<E: QueryExecutor> QueryHaus<E> {
    /// Create new QueryHaus with an explicit configuration
    pub fn new(executor: E, config: QueryConfig) -> Result<Self, QueryHausError> {
        config.validate()?;
        Ok(Self { executor, config })
    }

    /// Create QueryHaus with the default configuration
    pub fn with_defaults(executor: E) -> Self {
        Self {
            executor,
            config: QueryConfig::default(),
        }
    }

    /// Create QueryHaus from a loaded application configuration
    pub fn from_app_config(executor: E, app_config: AppConfig) -> Self {
        Self {
            executor,
            config: app_config.query,
        }
    }

    /// Create QueryHaus from `QUERYHAUS_CONFIG` or `./queryhaus.toml`
    pub fn load(executor: E) -> Result<Self, QueryHausError> {
        let app_config = AppConfig::load()?;
        Ok(Self::from_app_config(executor, app_config))
    }

    /// Start a new query bound to this executor and configuration
    pub fn query(&self) -> QueryBuilder<'_, E> {
        QueryBuilder::new(&self.executor).with_config(&self.config)
    }

    /// Start a new query against `metric`
    pub fn metric(&self, metric: &str) -> QueryBuilder<'_, E> {
        self.query().select_metric(metric)
    }

    /// Get executor reference
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Get the active query configuration
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }
}
