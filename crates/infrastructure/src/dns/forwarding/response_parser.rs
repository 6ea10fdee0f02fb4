use dns_preload_domain::{DomainError, MailExchanger};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }

    pub fn addresses(&self) -> Vec<IpAddr> {
        self.answers
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
                _ => None,
            })
            .collect()
    }

    /// First canonical name in the answer section.
    pub fn canonical_name(&self) -> Option<String> {
        self.answers.iter().find_map(|record| match record.data() {
            RData::CNAME(canonical) => Some(canonical.to_utf8()),
            _ => None,
        })
    }

    pub fn mail_exchangers(&self) -> Vec<MailExchanger> {
        self.answers
            .iter()
            .filter_map(|record| match record.data() {
                RData::MX(mx) => Some(MailExchanger::new(
                    mx.exchange().to_utf8(),
                    mx.preference(),
                )),
                _ => None,
            })
            .collect()
    }

    pub fn name_servers(&self) -> Vec<String> {
        self.answers
            .iter()
            .filter_map(|record| match record.data() {
                RData::NS(ns) => Some(ns.to_utf8()),
                _ => None,
            })
            .collect()
    }

    /// One entry per TXT record, its character strings concatenated.
    pub fn texts(&self) -> Vec<String> {
        self.answers
            .iter()
            .filter_map(|record| match record.data() {
                RData::TXT(txt) => Some(
                    txt.txt_data()
                        .iter()
                        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                        .collect::<String>(),
                ),
                _ => None,
            })
            .collect()
    }

    pub fn reverse_names(&self) -> Vec<String> {
        self.answers
            .iter()
            .filter_map(|record| match record.data() {
                RData::PTR(ptr) => Some(ptr.to_utf8()),
                _ => None,
            })
            .collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
