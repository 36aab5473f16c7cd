/// Aggregate and selector functions usable as a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    /// count(field)
    Count,
    /// median(field)
    Median,
    /// mean(field)
    Mean,
    /// sum(field)
    Sum,
    /// first(field)
    First,
    /// last(field)
    Last,
    /// percentile(field, n)
    Percentile(u32),
    /// min(field)
    Min,
    /// max(field)
    Max,
    /// spread(field)
    Spread,
    /// stddev(field)
    Stddev,
    /// distinct(field)
    Distinct,
}

impl AggregateFunction {
    /// Function name as written in query text
    pub fn to_sql(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Median => "median",
            AggregateFunction::Mean => "mean",
            AggregateFunction::Sum => "sum",
            AggregateFunction::First => "first",
            AggregateFunction::Last => "last",
            AggregateFunction::Percentile(_) => "percentile",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
            AggregateFunction::Spread => "spread",
            AggregateFunction::Stddev => "stddev",
            AggregateFunction::Distinct => "distinct",
        }
    }

    /// Render the call over `field`, e.g. `mean(cpu)` or `percentile(value, 95)`
    pub fn render(&self, field: &str) -> String {
        match self {
            AggregateFunction::Percentile(n) => format!("{}({}, {})", self.to_sql(), field, n),
            _ => format!("{}({})", self.to_sql(), field),
        }
    }
}
