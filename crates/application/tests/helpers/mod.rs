#![allow(dead_code)]
#![allow(unused_imports)]

mod log_capture;
mod mock_lookup;

pub use log_capture::CapturedLogs;
pub use mock_lookup::{MockDnsLookup, GOOGLE_DNS_1, GOOGLE_DNS_2, GOOGLE_IPV6};
pub use recording_reporter::{RecordingReporter, ReporterEvent};
