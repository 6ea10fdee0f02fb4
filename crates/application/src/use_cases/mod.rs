pub mod preload;

pub use preload::{BatchOptions, BatchResult, RunBatchUseCase, RunQueriesUseCase};
