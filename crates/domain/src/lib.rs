//! dns-preload domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_selector;
pub mod validators;

pub use config::{ConfigError, PreloadConfig, QueryType};
pub use dns_record::{normalize, LookupAnswer, MailExchanger, RecordKind};
pub use errors::DomainError;
pub use query_selector::QuerySelector;
