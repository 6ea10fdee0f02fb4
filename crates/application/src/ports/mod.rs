mod dns_lookup;
mod preload_reporter;

pub use dns_lookup::DnsLookup;
pub use preload_reporter::{LookupReport, PreloadReporter};
