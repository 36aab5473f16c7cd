//! Pagination
//!
//! LIMIT and OFFSET settings, each overwritten by later calls.

/// Pagination configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            limit: None,
            offset: None,
        }
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn to_sql(&self) -> String {
        let mut clauses = Vec::new();

        if let Some(limit) = self.limit {
            clauses.push(format!("LIMIT {}", limit));
        }

        if let Some(offset) = self.offset {
            clauses.push(format!("OFFSET {}", offset));
        }

        clauses.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pagination() {
        assert_eq!(Pagination::new().to_sql(), "");
    }

    #[test]
    fn test_limit_then_offset() {
        let pagination = Pagination::new().with_offset(20).with_limit(10);
        assert_eq!(pagination.to_sql(), "LIMIT 10 OFFSET 20");
    }

    #[test]
    fn test_offset_only() {
        let pagination = Pagination::new().with_offset(5);
        assert_eq!(pagination.to_sql(), "OFFSET 5");
    }

    #[test]
    fn test_last_write_wins() {
        let pagination = Pagination::new().with_limit(10).with_limit(3);
        assert_eq!(pagination.limit, Some(3));
    }
}
