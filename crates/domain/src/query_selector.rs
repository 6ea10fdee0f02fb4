use crate::{DomainError, RecordKind};
use std::fmt;
use std::str::FromStr;

/// Which batches a preload run executes: one record kind, or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySelector {
    All,
    Single(RecordKind),
}

impl QuerySelector {
    /// Concrete kinds to run, in execution order.
    pub fn kinds(&self) -> Vec<RecordKind> {
        match self {
            QuerySelector::All => RecordKind::ALL.to_vec(),
            QuerySelector::Single(kind) => vec![*kind],
        }
    }
}

impl fmt::Display for QuerySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuerySelector::All => write!(f, "all"),
            QuerySelector::Single(kind) => write!(f, "{}", kind.as_str()),
        }
    }
}

impl FromStr for QuerySelector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(QuerySelector::All);
        }
        RecordKind::from_str(s)
            .map(QuerySelector::Single)
            .map_err(|_| DomainError::UnknownQueryType(s.to_string()))
    }
}
