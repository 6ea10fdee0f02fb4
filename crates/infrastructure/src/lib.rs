//! dns-preload infrastructure: live resolution and console reporting.

pub mod dns;
pub mod reporting;

pub use dns::resolver::NameserverLookup;
pub use reporting::ConsoleReporter;
