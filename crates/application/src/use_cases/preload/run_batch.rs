use crate::ports::{DnsLookup, LookupReport, PreloadReporter};
use dns_preload_domain::{normalize, DomainError, RecordKind};
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Tuning for a single batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Maximum lookups in flight per batch. Zero is treated as one.
    pub workers: usize,

    /// Deadline applied to each lookup on its own.
    pub timeout: Duration,

    /// Follow MX and NS answers with a hosts batch on the names they return.
    pub full: bool,

    /// Suppress per-lookup and batch completion reports.
    pub quiet: bool,
}

impl BatchOptions {
    pub fn effective_workers(&self) -> usize {
        self.workers.max(1)
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: 1,
            timeout: DEFAULT_TIMEOUT,
            full: true,
            quiet: false,
        }
    }
}

/// Aggregate of every lookup in one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub kind: RecordKind,
    pub succeeded: usize,
    /// Failed lookups, including those of a chained hosts batch.
    pub failures: Vec<DomainError>,
    /// Distinct hostnames discovered by MX or NS lookups, sorted.
    pub hostnames: Vec<String>,
    pub elapsed: Duration,
}

impl BatchResult {
    fn empty(kind: RecordKind) -> Self {
        Self {
            kind,
            succeeded: 0,
            failures: Vec::new(),
            hostnames: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_result(self) -> Result<Self, DomainError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(DomainError::BatchFailed {
                kind: self.kind,
                failures: self.failures,
            })
        }
    }
}

/// Runs the lookups of one record kind with bounded concurrency.
///
/// Every lookup runs to completion; failures are collected and returned
/// together once the batch is done.
pub struct RunBatchUseCase {
    resolver: Arc<dyn DnsLookup>,
    reporter: Arc<dyn PreloadReporter>,
    options: BatchOptions,
}

impl RunBatchUseCase {
    pub fn new(
        resolver: Arc<dyn DnsLookup>,
        reporter: Arc<dyn PreloadReporter>,
        options: BatchOptions,
    ) -> Self {
        Self {
            resolver,
            reporter,
            options,
        }
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    pub async fn execute(
        &self,
        kind: RecordKind,
        subjects: &[String],
    ) -> Result<BatchResult, DomainError> {
        self.run(kind, subjects).await.into_result()
    }

    /// Boxed so a hosts batch can be chained from an MX or NS batch.
    fn run<'a>(&'a self, kind: RecordKind, subjects: &'a [String]) -> BoxFuture<'a, BatchResult> {
        Box::pin(async move {
            let mut result = BatchResult::empty(kind);
            if subjects.is_empty() {
                return result;
            }

            let started = Instant::now();
            let workers = self.options.effective_workers();
            info!(kind = %kind, subjects = subjects.len(), workers, "Starting batch");

            let mut discovered = BTreeSet::new();
            // boxed up front so the stream holds concrete Send futures
            let pending: Vec<BoxFuture<'a, Result<LookupReport, DomainError>>> = subjects
                .iter()
                .map(|subject| self.lookup(kind, subject).boxed())
                .collect();
            let mut lookups = stream::iter(pending).buffer_unordered(workers);

            while let Some(outcome) = lookups.next().await {
                match outcome {
                    Ok(report) => {
                        result.succeeded += 1;
                        if kind.yields_hostnames() {
                            discovered.extend(report.values.iter().cloned());
                        }
                        if !self.options.quiet {
                            self.reporter.lookup_completed(&report);
                        }
                    }
                    Err(e) => {
                        warn!(kind = %kind, error = %e, "Lookup failed");
                        result.failures.push(e);
                    }
                }
            }
            drop(lookups);

            result.elapsed = started.elapsed();
            result.hostnames = discovered.into_iter().collect();
            info!(
                kind = %kind,
                succeeded = result.succeeded,
                failed = result.failures.len(),
                elapsed_ms = result.elapsed.as_millis() as u64,
                "Batch finished"
            );
            if !self.options.quiet {
                self.reporter.batch_completed(kind, result.elapsed);
            }

            if self.options.full && !result.hostnames.is_empty() {
                debug!(kind = %kind, hostnames = result.hostnames.len(), "Resolving discovered hostnames");
                let chained = self.run(RecordKind::Hosts, &result.hostnames).await;
                if let Err(e) = chained.into_result() {
                    result.failures.push(e);
                }
            }

            result
        })
    }

    async fn lookup(&self, kind: RecordKind, subject: &str) -> Result<LookupReport, DomainError> {
        let started = Instant::now();
        let outcome =
            tokio::time::timeout(self.options.timeout, self.resolver.lookup(kind, subject)).await;
        let elapsed = started.elapsed();

        let answer = match outcome {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                debug!(subject, kind = %kind, elapsed_ms = elapsed.as_millis() as u64, error = %e, "Lookup returned an error");
                return Err(e);
            }
            Err(_) => {
                debug!(subject, kind = %kind, elapsed_ms = elapsed.as_millis() as u64, "Lookup deadline expired");
                return Err(DomainError::LookupTimeout {
                    subject: subject.to_string(),
                    kind,
                });
            }
        };

        let values = normalize(kind, &answer)?;
        debug!(subject, kind = %kind, elapsed_ms = elapsed.as_millis() as u64, records = values.len(), "Lookup completed");

        Ok(LookupReport {
            subject: subject.to_string(),
            kind,
            elapsed,
            values,
        })
    }
}
