//! dns-preload application layer: ports and the preload use cases.
pub mod ports;
pub mod use_cases;
