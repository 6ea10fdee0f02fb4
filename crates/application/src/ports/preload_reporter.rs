use dns_preload_domain::RecordKind;
use std::time::Duration;

/// A completed lookup, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    pub subject: String,
    pub kind: RecordKind,
    pub elapsed: Duration,
    pub values: Vec<String>,
}

/// Receives progress of a preload run.
///
/// Lookups inside a batch complete in any order, so implementations must
/// accept interleaved `lookup_completed` calls.
pub trait PreloadReporter: Send + Sync {
    fn batch_started(&self, nameserver: &str, kind: RecordKind, subjects: &[String]);

    fn lookup_completed(&self, report: &LookupReport);

    fn batch_completed(&self, kind: RecordKind, elapsed: Duration);

    /// Nothing is configured for `kind`.
    fn batch_skipped(&self, kind: RecordKind);
}
