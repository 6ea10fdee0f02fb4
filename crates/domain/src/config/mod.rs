//! Preload configuration
//!
//! The YAML document groups the names to preload by record kind under a
//! single `query_type` mapping:
//!
//! ```yaml
//! query_type:
//!   hosts: [google.com]
//!   cname: []
//!   ns: [github.com]
//!   mx: [gmail.com]
//!   txt: []
//!   ptr: [8.8.8.8]
//! ```

pub mod errors;
pub mod preload;

pub use errors::ConfigError;
pub use preload::{PreloadConfig, QueryType};
