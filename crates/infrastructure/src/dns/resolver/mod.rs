//! Live resolution against a single recursive nameserver.
//!
//! Queries are built and parsed with `hickory-proto`, sent over UDP and
//! retried over TCP when the answer comes back truncated.

pub mod nameserver;
pub mod reverse;

pub use nameserver::NameserverLookup;
pub use reverse::ip_to_reverse_domain;
