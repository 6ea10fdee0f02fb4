mod run_batch;
mod run_queries;

pub use run_batch::{BatchOptions, BatchResult, RunBatchUseCase};
pub use run_queries::RunQueriesUseCase;
