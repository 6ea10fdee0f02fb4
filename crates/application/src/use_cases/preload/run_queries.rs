use super::run_batch::RunBatchUseCase;
use crate::ports::PreloadReporter;
use dns_preload_domain::{DomainError, PreloadConfig, QuerySelector, RecordKind};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Selects the batches to run from a query type name and runs them in
/// order against the configured subjects.
pub struct RunQueriesUseCase {
    batch: RunBatchUseCase,
    reporter: Arc<dyn PreloadReporter>,
    nameserver: String,
    mute: bool,
    debug: bool,
}

impl RunQueriesUseCase {
    pub fn new(batch: RunBatchUseCase, reporter: Arc<dyn PreloadReporter>) -> Self {
        Self {
            batch,
            reporter,
            nameserver: String::new(),
            mute: false,
            debug: false,
        }
    }

    /// Nameserver shown in the batch introduction.
    pub fn with_nameserver(mut self, nameserver: impl Into<String>) -> Self {
        self.nameserver = nameserver.into();
        self
    }

    /// Suppress the batch introduction.
    pub fn with_mute(mut self, mute: bool) -> Self {
        self.mute = mute;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// With `all`, every kind runs even when an earlier one fails, and the
    /// failures are returned together.
    #[instrument(skip(self, config))]
    pub async fn execute(&self, query_type: &str, config: &PreloadConfig) -> Result<(), DomainError> {
        let selector = match query_type.parse::<QuerySelector>() {
            Ok(selector) => selector,
            Err(e) => {
                if self.debug {
                    info!(query_type, "Requested query type is not one of hosts, cname, mx, ns, txt, ptr or all");
                }
                return Err(e);
            }
        };

        let mut failures = Vec::new();
        for kind in selector.kinds() {
            if let Err(e) = self.run_kind(kind, config).await {
                failures.push(e);
            }
        }

        match selector {
            QuerySelector::Single(_) => failures.pop().map_or(Ok(()), Err),
            QuerySelector::All if failures.is_empty() => Ok(()),
            QuerySelector::All => Err(DomainError::QueriesFailed(failures)),
        }
    }

    async fn run_kind(&self, kind: RecordKind, config: &PreloadConfig) -> Result<(), DomainError> {
        let subjects = config.subjects(kind);
        if subjects.is_empty() {
            if self.debug {
                debug!(kind = kind.as_str(), "No entries configured, skipping");
                self.reporter.batch_skipped(kind);
            }
            return Ok(());
        }

        if !self.mute {
            self.reporter.batch_started(&self.nameserver, kind, subjects);
        }
        self.batch.execute(kind, subjects).await.map(|_| ())
    }
}
