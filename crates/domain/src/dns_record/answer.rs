use super::RecordKind;
use crate::DomainError;
use std::net::IpAddr;

/// Mail exchanger returned by an MX lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailExchanger {
    pub host: String,
    pub preference: u16,
}

impl MailExchanger {
    pub fn new(host: impl Into<String>, preference: u16) -> Self {
        Self {
            host: host.into(),
            preference,
        }
    }
}

/// Typed answer of a single successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupAnswer {
    Addresses(Vec<IpAddr>),
    CanonicalName(String),
    MailExchangers(Vec<MailExchanger>),
    NameServers(Vec<String>),
    Texts(Vec<String>),
    ReverseNames(Vec<String>),
}

impl LookupAnswer {
    pub fn shape(&self) -> &'static str {
        match self {
            LookupAnswer::Addresses(_) => "addresses",
            LookupAnswer::CanonicalName(_) => "canonical name",
            LookupAnswer::MailExchangers(_) => "mail exchangers",
            LookupAnswer::NameServers(_) => "name servers",
            LookupAnswer::Texts(_) => "texts",
            LookupAnswer::ReverseNames(_) => "reverse names",
        }
    }

    /// The record kind that produces this shape.
    pub fn kind(&self) -> RecordKind {
        match self {
            LookupAnswer::Addresses(_) => RecordKind::Hosts,
            LookupAnswer::CanonicalName(_) => RecordKind::Cname,
            LookupAnswer::MailExchangers(_) => RecordKind::Mx,
            LookupAnswer::NameServers(_) => RecordKind::Ns,
            LookupAnswer::Texts(_) => RecordKind::Txt,
            LookupAnswer::ReverseNames(_) => RecordKind::Ptr,
        }
    }
}

/// Flattens an answer into display strings, one per resolved record.
///
/// MX preferences are dropped; the hosts are what gets displayed and what
/// full resolution follows up on. An answer whose shape does not belong to
/// `kind` is rejected.
pub fn normalize(kind: RecordKind, answer: &LookupAnswer) -> Result<Vec<String>, DomainError> {
    if answer.kind() != kind {
        return Err(DomainError::UnexpectedResultType {
            kind,
            shape: answer.shape(),
        });
    }

    let values = match answer {
        LookupAnswer::Addresses(addrs) => addrs.iter().map(ToString::to_string).collect(),
        LookupAnswer::CanonicalName(name) => vec![name.clone()],
        LookupAnswer::MailExchangers(exchangers) => {
            exchangers.iter().map(|mx| mx.host.clone()).collect()
        }
        LookupAnswer::NameServers(hosts)
        | LookupAnswer::Texts(hosts)
        | LookupAnswer::ReverseNames(hosts) => hosts.clone(),
    };

    Ok(values)
}
