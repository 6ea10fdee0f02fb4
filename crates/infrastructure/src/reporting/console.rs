use dns_preload_application::ports::{LookupReport, PreloadReporter};
use dns_preload_domain::RecordKind;
use std::time::Duration;

/// Prints preload progress to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn started_line(nameserver: &str, kind: RecordKind, subjects: &[String]) -> String {
        format!(
            "Preloading Nameserver: {} with query type: {} for domains: {}",
            nameserver,
            kind.label(),
            subjects.join(", ")
        )
    }

    pub fn lookup_line(report: &LookupReport) -> String {
        format!(
            "Preloaded {} type {} in {:?} to {}",
            report.subject,
            report.kind.label(),
            report.elapsed,
            report.values.join(", ")
        )
    }

    pub fn completed_line(kind: RecordKind, elapsed: Duration) -> String {
        format!("{} batch completed in {:?}", kind.label(), elapsed)
    }

    pub fn skipped_line(kind: RecordKind) -> String {
        format!("no {} entries configured, skipping", kind.as_str())
    }
}

impl PreloadReporter for ConsoleReporter {
    fn batch_started(&self, nameserver: &str, kind: RecordKind, subjects: &[String]) {
        println!("{}", Self::started_line(nameserver, kind, subjects));
    }

    fn lookup_completed(&self, report: &LookupReport) {
        println!("{}", Self::lookup_line(report));
    }

    fn batch_completed(&self, kind: RecordKind, elapsed: Duration) {
        println!("{}", Self::completed_line(kind, elapsed));
    }

    fn batch_skipped(&self, kind: RecordKind) {
        println!("{}", Self::skipped_line(kind));
    }
}
