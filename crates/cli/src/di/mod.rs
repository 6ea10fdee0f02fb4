use crate::args::PreloadArgs;
use dns_preload_application::ports::{DnsLookup, PreloadReporter};
use dns_preload_application::use_cases::{BatchOptions, RunBatchUseCase, RunQueriesUseCase};
use dns_preload_infrastructure::ConsoleReporter;
use std::sync::Arc;

pub struct UseCases {
    pub run_queries: RunQueriesUseCase,
}

impl UseCases {
    pub fn new(lookup: Arc<dyn DnsLookup>, args: &PreloadArgs) -> Self {
        let reporter: Arc<dyn PreloadReporter> = Arc::new(ConsoleReporter::new());

        let options = BatchOptions {
            workers: args.workers,
            timeout: args.timeout,
            full: args.full,
            quiet: args.quiet,
        };

        let batch = RunBatchUseCase::new(lookup, reporter.clone(), options);
        let run_queries = RunQueriesUseCase::new(batch, reporter)
            .with_nameserver(args.nameserver())
            .with_mute(args.mute)
            .with_debug(args.debug);

        Self { run_queries }
    }
}
