#![allow(dead_code)]
#![allow(unused_imports)]

pub mod dns_server_mock;
pub mod log_capture;

pub use dns_server_mock::{MockDnsServer, MockZone};
pub use log_capture::CapturedLogs;
