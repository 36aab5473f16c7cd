/// Represents a GROUP BY clause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupBy {
    /// Fields to group by, in insertion order
    pub fields: Vec<String>,
}

impl GroupBy {
    /// Create a new GROUP BY clause with the specified fields
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Create a GROUP BY clause with a single field
    pub fn single(field: impl Into<String>) -> Self {
        Self {
            fields: vec![field.into()],
        }
    }

    /// Append a field; duplicates are kept
    pub fn push(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    /// Append a `time(<interval>)` bucket
    pub fn push_time(&mut self, interval: &str) {
        self.fields.push(format!("time({})", interval));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
