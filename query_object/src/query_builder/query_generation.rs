//! Query text generation
//!
//! Each clause is built on its own and comes back empty when it has nothing to
//! say. `QueryBuilder::build_query_text` joins the non-empty ones in grammar order.

use crate::escaping::{escape_column, escape_value, quote_identifier, regex_literal, render_value};
use crate::query_builder::filter::{QueryCondition, QueryOperator};
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::time_range::TimeRange;
use config::EscapeStrategy;

pub struct QueryGenerator;

impl QueryGenerator {
    /// Build `SELECT <selection> FROM [<"rp">.]<"metric">`
    pub fn build_select_clause(
        selection: &str,
        retention_policy: Option<&str>,
        metric: &str,
    ) -> String {
        let source = match retention_policy {
            Some(policy) => format!("{}.{}", quote_identifier(policy), quote_identifier(metric)),
            None => quote_identifier(metric),
        };

        format!("SELECT {} FROM {}", selection, source)
    }

    /// Build the time-range WHERE clause
    pub fn build_time_range_clause(time_range: Option<&TimeRange>) -> String {
        match time_range {
            Some(range) => format!(
                "WHERE (time >= '{}' AND time <= '{}')",
                range.from, range.to
            ),
            None => "".to_string(),
        }
    }

    /// Build the condition group
    ///
    /// Opens with `WHERE` unless a time-range clause already did. Each
    /// condition's own boolean joins it to the next; the last one's is dropped.
    pub fn build_condition_clause(
        conditions: &[QueryCondition],
        escape: EscapeStrategy,
        after_time_range: bool,
    ) -> String {
        if conditions.is_empty() {
            return "".to_string();
        }

        let keyword = if after_time_range { "AND" } else { "WHERE" };
        let mut clause = format!("{} (", keyword);

        for (index, condition) in conditions.iter().enumerate() {
            clause.push_str(&Self::build_single_condition(condition, escape));

            if index + 1 < conditions.len() {
                clause.push(' ');
                clause.push_str(condition.boolean.to_sql());
                clause.push(' ');
            }
        }

        clause.push(')');
        clause
    }

    fn build_single_condition(condition: &QueryCondition, escape: EscapeStrategy) -> String {
        let column = escape_column(escape, &condition.column);
        let value = render_value(&condition.value);

        match condition.operator {
            QueryOperator::RegexMatch | QueryOperator::RegexNotMatch => format!(
                "{} {} {}",
                column,
                condition.operator.to_sql(),
                regex_literal(&value)
            ),
            _ => format!(
                "{} {} '{}'",
                column,
                condition.operator.to_sql(),
                escape_value(escape, &value)
            ),
        }
    }

    /// Build GROUP BY clause
    pub fn build_group_by_clause(group_by: &GroupBy) -> String {
        if group_by.is_empty() {
            return "".to_string();
        }

        format!("GROUP BY {}", group_by.fields.join(","))
    }

    /// Build ORDER BY clause from pre-joined `field DIR` entries
    pub fn build_order_clause(order_by: &[String]) -> String {
        if order_by.is_empty() {
            return "".to_string();
        }

        format!("ORDER BY {}", order_by.join(","))
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(pagination: &Pagination) -> String {
        pagination.to_sql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_clause_without_retention_policy() {
        assert_eq!(
            QueryGenerator::build_select_clause("*", None, "load"),
            "SELECT * FROM \"load\""
        );
    }

    #[test]
    fn test_select_clause_with_retention_policy() {
        assert_eq!(
            QueryGenerator::build_select_clause("mean(value)", Some("weekly"), "events"),
            "SELECT mean(value) FROM \"weekly\".\"events\""
        );
    }

    #[test]
    fn test_empty_clauses() {
        assert_eq!(QueryGenerator::build_time_range_clause(None), "");
        assert_eq!(
            QueryGenerator::build_condition_clause(&[], EscapeStrategy::PercentEncode, true),
            ""
        );
        assert_eq!(QueryGenerator::build_group_by_clause(&GroupBy::default()), "");
        assert_eq!(QueryGenerator::build_order_clause(&[]), "");
        assert_eq!(QueryGenerator::build_limit_clause(&Pagination::new()), "");
    }

    #[test]
    fn test_condition_clause_keyword() {
        let conditions = vec![QueryCondition::eq("host", "serverA")];

        assert_eq!(
            QueryGenerator::build_condition_clause(
                &conditions,
                EscapeStrategy::PercentEncode,
                false
            ),
            "WHERE (host = 'serverA')"
        );
        assert_eq!(
            QueryGenerator::build_condition_clause(
                &conditions,
                EscapeStrategy::PercentEncode,
                true
            ),
            "AND (host = 'serverA')"
        );
    }

    #[test]
    fn test_condition_joins_use_earlier_condition_boolean() {
        let conditions = vec![
            QueryCondition::eq("a", 1).or(),
            QueryCondition::eq("b", 2),
            QueryCondition::eq("c", 3).or(),
        ];

        assert_eq!(
            QueryGenerator::build_condition_clause(
                &conditions,
                EscapeStrategy::PercentEncode,
                false
            ),
            "WHERE (a = '1' OR b = '2' AND c = '3')"
        );
    }

    #[test]
    fn test_regex_conditions_use_slash_literals() {
        let conditions = vec![
            QueryCondition::matches("host", "/^web.*/"),
            QueryCondition::not_matches("path", "api/v1"),
        ];

        assert_eq!(
            QueryGenerator::build_condition_clause(
                &conditions,
                EscapeStrategy::PercentEncode,
                false
            ),
            "WHERE (host =~ /^web.*/ AND path !~ /api\\/v1/)"
        );
        assert_eq!(
            QueryGenerator::build_condition_clause(
                &conditions,
                EscapeStrategy::InfluxLiteral,
                false
            ),
            "WHERE (\"host\" =~ /^web.*/ AND \"path\" !~ /api\\/v1/)"
        );
    }

    #[test]
    fn test_group_and_order_are_comma_joined() {
        let group_by = GroupBy::new(vec!["host".to_string(), "time(1h)".to_string()]);
        assert_eq!(
            QueryGenerator::build_group_by_clause(&group_by),
            "GROUP BY host,time(1h)"
        );

        let order_by = vec!["time DESC".to_string(), "host ASC".to_string()];
        assert_eq!(
            QueryGenerator::build_order_clause(&order_by),
            "ORDER BY time DESC,host ASC"
        );
    }
}
