//! Query builder
//!
//! Fluent accumulation of query fragments, serialized on demand.

use crate::errors::{ExecuteError, QueryError};
use crate::query_builder::aggregation::AggregateFunction;
use crate::query_builder::filter::{LogicalOperator, QueryCondition, QueryOperator};
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::query_generation::QueryGenerator;
use crate::query_builder::time_range::TimeRange;
use crate::traits::{Detached, QueryExecutor};
use config::{EscapeStrategy, QueryConfig, TimeZoneSetting};
use serde_json::Value;
use std::fmt;

/// Query builder for constructing time-series query text
///
/// Configuration calls may come in any order. `build_query_text` always emits
/// clauses as SELECT, FROM, WHERE, GROUP BY, ORDER BY, LIMIT, OFFSET.
///
/// ```
/// use query_object::{QueryBuilder, QueryCondition};
///
/// let query = QueryBuilder::detached()
///     .select_metric("load")
///     .mean("value")
///     .filter(QueryCondition::eq("host", "serverA"))
///     .limit(10)
///     .build_query_text()
///     .unwrap();
///
/// assert_eq!(
///     query,
///     "SELECT mean(value) FROM \"load\" WHERE (host = 'serverA') LIMIT 10"
/// );
/// ```
pub struct QueryBuilder<'e, E: ?Sized = Detached> {
    executor: &'e E,
    pub(crate) selection: String,
    pub(crate) metric: String,
    pub(crate) retention_policy: Option<String>,
    pub(crate) time_range: Option<TimeRange>,
    pub(crate) conditions: Vec<QueryCondition>,
    pub(crate) group_by: GroupBy,
    pub(crate) order_by: Vec<String>,
    pub(crate) pagination: Pagination,
    pub(crate) config: QueryConfig,
    // Held until build time so setters stay infallible
    pub(crate) deferred_error: Option<QueryError>,
}

impl QueryBuilder<'static, Detached> {
    /// Create a builder that only produces query text
    pub fn detached() -> Self {
        Self::new(&Detached)
    }
}

impl Default for QueryBuilder<'static, Detached> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<'e, E: ?Sized> QueryBuilder<'e, E> {
    pub fn new(executor: &'e E) -> Self {
        Self {
            executor,
            selection: "*".to_string(),
            metric: String::new(),
            retention_policy: None,
            time_range: None,
            conditions: Vec::new(),
            group_by: GroupBy::default(),
            order_by: Vec::new(),
            pagination: Pagination::new(),
            config: QueryConfig::default(),
            deferred_error: None,
        }
    }

    /// Apply rendering settings and aggregate defaults
    pub fn with_config(mut self, config: &QueryConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Time zone used by later `set_time_range` calls
    pub fn with_time_zone(mut self, time_zone: TimeZoneSetting) -> Self {
        self.config.time_zone = time_zone;
        self
    }

    pub fn with_escape_strategy(mut self, escape: EscapeStrategy) -> Self {
        self.config.escape = escape;
        self
    }

    /// Set the measurement to query
    pub fn select_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = metric.into();
        self
    }

    /// Qualify the measurement with a retention policy
    pub fn with_retention_policy(mut self, policy: impl Into<String>) -> Self {
        self.retention_policy = Some(policy.into());
        self
    }

    /// Replace the selection with a raw expression
    pub fn select(mut self, expression: impl Into<String>) -> Self {
        self.selection = expression.into();
        self
    }

    /// Replace the selection with `function` over the default field
    pub fn aggregate(self, function: AggregateFunction) -> Self {
        let field = self.config.default_field.clone();
        self.aggregate_on(function, &field)
    }

    /// Replace the selection with `function` over `field`
    pub fn aggregate_on(mut self, function: AggregateFunction, field: &str) -> Self {
        self.selection = function.render(field);
        self
    }

    pub fn count(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Count, field)
    }

    pub fn median(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Median, field)
    }

    pub fn mean(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Mean, field)
    }

    pub fn sum(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Sum, field)
    }

    pub fn first(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::First, field)
    }

    pub fn last(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Last, field)
    }

    pub fn min(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Min, field)
    }

    pub fn max(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Max, field)
    }

    pub fn spread(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Spread, field)
    }

    pub fn stddev(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Stddev, field)
    }

    pub fn distinct(self, field: &str) -> Self {
        self.aggregate_on(AggregateFunction::Distinct, field)
    }

    pub fn percentile(self, field: &str, percentile: u32) -> Self {
        self.aggregate_on(AggregateFunction::Percentile(percentile), field)
    }

    /// `percentile` with the configured default percentile (95 unless overridden)
    pub fn percentile_default(self, field: &str) -> Self {
        let percentile = self.config.default_percentile;
        self.percentile(field, percentile)
    }

    /// Append one condition
    pub fn add_condition(
        self,
        column: impl Into<String>,
        operator: QueryOperator,
        value: impl Into<Value>,
        boolean: LogicalOperator,
    ) -> Self {
        let mut condition = QueryCondition::new(column, operator, value);
        condition.boolean = boolean;
        self.filter(condition)
    }

    /// Append a `column = 'value'` condition joined with AND
    pub fn where_eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(QueryCondition::eq(column, value))
    }

    /// Append a prebuilt condition
    pub fn filter(mut self, condition: QueryCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Append several conditions, keeping their order
    pub fn add_conditions<I>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = QueryCondition>,
    {
        self.conditions.extend(conditions);
        self
    }

    /// Run `configure` only when `predicate` holds
    ///
    /// ```
    /// use query_object::QueryBuilder;
    ///
    /// let host: Option<&str> = None;
    /// let query = QueryBuilder::detached()
    ///     .select_metric("cpu")
    ///     .when(host.is_some(), |q| q.where_eq("host", host.unwrap_or_default()))
    ///     .build_query_text()
    ///     .unwrap();
    ///
    /// assert_eq!(query, "SELECT * FROM \"cpu\"");
    /// ```
    pub fn when<F>(self, predicate: bool, configure: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if predicate { configure(self) } else { self }
    }

    /// Append a grouping field
    pub fn group_by(mut self, field: impl Into<String>) -> Self {
        self.group_by.push(field);
        self
    }

    /// Append a `time(<interval>)` grouping bucket
    pub fn group_by_time(mut self, interval: &str) -> Self {
        self.group_by.push_time(interval);
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push(format!("{} {}", field, order.to_sql()));
        self
    }

    pub fn order_by_asc(self, field: &str) -> Self {
        self.order_by(field, SortOrder::Asc)
    }

    /// Add ordering from a textual direction (`asc`/`desc`, any case)
    ///
    /// An unknown direction is reported by `build_query_text`.
    pub fn order_by_direction(mut self, field: &str, direction: &str) -> Self {
        match direction.parse::<SortOrder>() {
            Ok(order) => self.order_by(field, order),
            Err(err) => {
                self.deferred_error = Some(err);
                self
            }
        }
    }

    /// Set the inclusive time range from epoch seconds
    ///
    /// Bounds are formatted immediately using the current time zone. A
    /// timestamp that cannot be represented is reported by `build_query_text`.
    pub fn set_time_range(mut self, from: i64, to: i64) -> Self {
        match TimeRange::from_epoch_seconds(from, to, self.config.time_zone) {
            Ok(range) => {
                self.time_range = Some(range);
                if self
                    .deferred_error
                    .as_ref()
                    .is_some_and(QueryError::is_time_range_error)
                {
                    self.deferred_error = None;
                }
            }
            Err(err) => {
                self.time_range = None;
                if self
                    .deferred_error
                    .as_ref()
                    .is_none_or(QueryError::is_time_range_error)
                {
                    self.deferred_error = Some(err);
                }
            }
        }
        self
    }

    /// Add limit
    pub fn limit(mut self, limit: u64) -> Self {
        self.pagination = self.pagination.with_limit(limit);
        self
    }

    /// Add offset
    pub fn offset(mut self, offset: u64) -> Self {
        self.pagination = self.pagination.with_offset(offset);
        self
    }

    /// Serialize the current state into query text
    pub fn build_query_text(&self) -> Result<String, QueryError> {
        if self.metric.is_empty() {
            debug_log!("Refusing to build query without a metric");
            return Err(QueryError::MissingMetric);
        }
        if let Some(err) = &self.deferred_error {
            debug_log!("Refusing to build query: {}", err);
            return Err(err.clone());
        }

        let clauses = [
            QueryGenerator::build_select_clause(
                &self.selection,
                self.retention_policy.as_deref(),
                &self.metric,
            ),
            QueryGenerator::build_time_range_clause(self.time_range.as_ref()),
            QueryGenerator::build_condition_clause(
                &self.conditions,
                self.config.escape,
                self.time_range.is_some(),
            ),
            QueryGenerator::build_group_by_clause(&self.group_by),
            QueryGenerator::build_order_clause(&self.order_by),
            QueryGenerator::build_limit_clause(&self.pagination),
        ];

        let query = clauses
            .iter()
            .filter(|clause| !clause.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        trace_log!("Built query: {}", query);
        Ok(query)
    }
}

impl<'e, E> QueryBuilder<'e, E>
where
    E: QueryExecutor + ?Sized,
{
    /// Build the query text and hand it to the executor
    ///
    /// A build failure returns before the executor is called.
    pub async fn execute(&self) -> Result<E::Output, ExecuteError<E::Error>> {
        let query = self.build_query_text()?;

        debug_log!("Executing query: {}", query);
        self.executor.run_query(&query).await.map_err(|err| {
            debug_log!("Query executor failed: {}", err);
            ExecuteError::Executor(err)
        })
    }
}

impl<'e, E: ?Sized> Clone for QueryBuilder<'e, E> {
    fn clone(&self) -> Self {
        Self {
            executor: self.executor,
            selection: self.selection.clone(),
            metric: self.metric.clone(),
            retention_policy: self.retention_policy.clone(),
            time_range: self.time_range.clone(),
            conditions: self.conditions.clone(),
            group_by: self.group_by.clone(),
            order_by: self.order_by.clone(),
            pagination: self.pagination.clone(),
            config: self.config.clone(),
            deferred_error: self.deferred_error.clone(),
        }
    }
}

impl<'e, E: ?Sized> fmt::Debug for QueryBuilder<'e, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("selection", &self.selection)
            .field("metric", &self.metric)
            .field("retention_policy", &self.retention_policy)
            .field("time_range", &self.time_range)
            .field("conditions", &self.conditions)
            .field("group_by", &self.group_by)
            .field("order_by", &self.order_by)
            .field("pagination", &self.pagination)
            .field("config", &self.config)
            .field("deferred_error", &self.deferred_error)
            .finish_non_exhaustive()
    }
}
