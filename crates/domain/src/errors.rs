use crate::dns_record::RecordKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown query type: {0}")]
    UnknownQueryType(String),

    #[error("unexpected result type {shape} for {kind} lookup")]
    UnexpectedResultType { kind: RecordKind, shape: &'static str },

    #[error("{kind} lookup for {subject} failed: {reason}")]
    LookupFailed {
        subject: String,
        kind: RecordKind,
        reason: String,
    },

    #[error("{kind} lookup for {subject} timed out")]
    LookupTimeout { subject: String, kind: RecordKind },

    #[error("Invalid query subject: {0}")]
    InvalidSubject(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("{kind} batch failed: {}", join_errors(.failures))]
    BatchFailed {
        kind: RecordKind,
        failures: Vec<DomainError>,
    },

    #[error("preload failed: {}", join_errors(.0))]
    QueriesFailed(Vec<DomainError>),

    #[error("{0} is not implemented")]
    NotImplemented(String),
}

impl DomainError {
    pub fn lookup_failed(
        subject: impl Into<String>,
        kind: RecordKind,
        reason: impl Into<String>,
    ) -> Self {
        DomainError::LookupFailed {
            subject: subject.into(),
            kind,
            reason: reason.into(),
        }
    }

    /// Number of individual lookup failures carried by this error.
    pub fn failure_count(&self) -> usize {
        match self {
            DomainError::BatchFailed { failures, .. } | DomainError::QueriesFailed(failures) => {
                failures.iter().map(DomainError::failure_count).sum()
            }
            _ => 1,
        }
    }
}

fn join_errors(errors: &[DomainError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
