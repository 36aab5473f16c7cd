//! Query conditions
//!
//! Filter predicates that make up the condition group of a WHERE clause.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query condition operators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryOperator {
    #[default]
    Eq, // =
    Ne,            // !=
    Gt,            // >
    Gte,           // >=
    Lt,            // <
    Lte,           // <=
    RegexMatch,    // =~
    RegexNotMatch, // !~
}

impl QueryOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::Ne => "!=",
            QueryOperator::Gt => ">",
            QueryOperator::Gte => ">=",
            QueryOperator::Lt => "<",
            QueryOperator::Lte => "<=",
            QueryOperator::RegexMatch => "=~",
            QueryOperator::RegexNotMatch => "!~",
        }
    }
}

/// Logical operators for joining a condition to the one after it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

/// Single condition in the WHERE clause
///
/// `boolean` joins this condition to the next one. It is ignored on the last
/// condition of a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryCondition {
    pub column: String,
    pub operator: QueryOperator,
    pub value: Value,
    pub boolean: LogicalOperator,
}

impl QueryCondition {
    /// Create a condition joined with AND
    pub fn new(column: impl Into<String>, operator: QueryOperator, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
            boolean: LogicalOperator::And,
        }
    }

    /// Equal condition
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, QueryOperator::Eq, value)
    }

    /// Not equal condition
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, QueryOperator::Ne, value)
    }

    /// Greater than condition
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, QueryOperator::Gt, value)
    }

    /// Greater than or equal condition
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, QueryOperator::Gte, value)
    }

    /// Less than condition
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, QueryOperator::Lt, value)
    }

    /// Less than or equal condition
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, QueryOperator::Lte, value)
    }

    /// Regular expression match
    pub fn matches(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::new(column, QueryOperator::RegexMatch, pattern)
    }

    /// Negated regular expression match
    pub fn not_matches(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::new(column, QueryOperator::RegexNotMatch, pattern)
    }

    /// Join the next condition with OR
    pub fn or(mut self) -> Self {
        self.boolean = LogicalOperator::Or;
        self
    }

    /// Join the next condition with AND
    pub fn and(mut self) -> Self {
        self.boolean = LogicalOperator::And;
        self
    }
}
