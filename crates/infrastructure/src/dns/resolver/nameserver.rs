use super::reverse::ip_to_reverse_domain;
use crate::dns::forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser};
use crate::dns::transport::{tcp::TcpTransport, udp::UdpTransport, Transport};
use async_trait::async_trait;
use dns_preload_application::ports::DnsLookup;
use dns_preload_domain::{DomainError, MailExchanger, RecordKind};
use futures::future::join_all;
use hickory_proto::rr::RecordType;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Resolves every record kind against one recursive nameserver.
pub struct NameserverLookup {
    server_addr: SocketAddr,
    udp: Transport,
    tcp: Transport,
    timeout: Duration,
}

impl NameserverLookup {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            udp: Transport::Udp(UdpTransport::new(server_addr)),
            tcp: Transport::Tcp(TcpTransport::new(server_addr)),
            timeout,
        }
    }

    /// Resolve `server:port` once and build a lookup against the first
    /// address it yields. Host names such as `localhost` are accepted.
    pub async fn connect(server: &str, port: u16, timeout: Duration) -> Result<Self, DomainError> {
        let server_addr = tokio::net::lookup_host((server, port))
            .await
            .map_err(|e| {
                DomainError::IoError(format!("Failed to resolve nameserver {}:{}: {}", server, port, e))
            })?
            .next()
            .ok_or_else(|| {
                DomainError::IoError(format!("Nameserver {}:{} has no address", server, port))
            })?;

        debug!(server, port, resolved = %server_addr, "Nameserver address resolved");
        Ok(Self::new(server_addr, timeout))
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// One exchange for `name`/`record_type`, falling back to TCP when the
    /// UDP answer is truncated.
    async fn query(&self, name: &str, record_type: RecordType) -> Result<DnsResponse, DomainError> {
        let (id, bytes) = MessageBuilder::build_query_with_id(name, record_type)?;

        let mut transport = &self.udp;
        let response = loop {
            let raw = transport.send(&bytes, self.timeout).await?;
            let response = ResponseParser::parse(&raw.bytes)?;

            if response.id != id {
                return Err(DomainError::InvalidDnsResponse(format!(
                    "response id {} does not match query id {}",
                    response.id, id
                )));
            }

            if response.truncated && matches!(transport, Transport::Udp(_)) {
                debug!(name, record_type = %record_type, "Truncated UDP response, retrying over TCP");
                transport = &self.tcp;
                continue;
            }

            break response;
        };

        debug!(
            name,
            record_type = %record_type,
            protocol = transport.protocol_name(),
            rcode = ResponseParser::rcode_to_status(response.rcode),
            answers = response.answers.len(),
            "Query answered"
        );
        Ok(response)
    }

    /// Issues every query type `kind` needs concurrently and merges the
    /// answers. Fails only when no query succeeded.
    async fn resolve(&self, kind: RecordKind, name: &str) -> Result<DnsResponse, DomainError> {
        let record_types = RecordTypeMapper::to_hickory(kind);
        let outcomes = join_all(record_types.iter().map(|rt| self.query(name, *rt))).await;

        let mut merged: Option<DnsResponse> = None;
        let mut first_error = None;
        for outcome in outcomes {
            match outcome.and_then(|response| Self::check_rcode(response, kind, name)) {
                Ok(response) => match merged.as_mut() {
                    Some(existing) => existing.answers.extend(response.answers),
                    None => merged = Some(response),
                },
                Err(e) if first_error.is_none() => first_error = Some(e),
                Err(_) => {}
            }
        }

        match (merged, first_error) {
            (Some(response), _) => Ok(response),
            (None, Some(e)) => Err(Self::with_subject(e, kind, name)),
            (None, None) => Err(no_records(kind, name)),
        }
    }

    fn check_rcode(response: DnsResponse, kind: RecordKind, name: &str) -> Result<DnsResponse, DomainError> {
        if response.is_success() {
            return Ok(response);
        }
        let status = ResponseParser::rcode_to_status(response.rcode);
        debug!(name, kind = kind.as_str(), rcode = status, "Lookup rejected");
        Err(DomainError::lookup_failed(name, kind, status))
    }

    fn with_subject(error: DomainError, kind: RecordKind, name: &str) -> DomainError {
        match error {
            DomainError::QueryTimeout => DomainError::LookupTimeout {
                subject: name.to_string(),
                kind,
            },
            e @ DomainError::LookupFailed { .. } => e,
            other => DomainError::lookup_failed(name, kind, other.to_string()),
        }
    }
}

fn no_records(kind: RecordKind, name: &str) -> DomainError {
    DomainError::lookup_failed(name, kind, "no records found")
}

fn non_empty<T>(values: Vec<T>, kind: RecordKind, name: &str) -> Result<Vec<T>, DomainError> {
    if values.is_empty() {
        Err(no_records(kind, name))
    } else {
        Ok(values)
    }
}

#[async_trait]
impl DnsLookup for NameserverLookup {
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        let response = self.resolve(RecordKind::Hosts, host).await?;
        non_empty(response.addresses(), RecordKind::Hosts, host)
    }

    async fn lookup_cname(&self, host: &str) -> Result<String, DomainError> {
        let response = self.resolve(RecordKind::Cname, host).await?;
        response
            .canonical_name()
            .ok_or_else(|| no_records(RecordKind::Cname, host))
    }

    async fn lookup_mx(&self, host: &str) -> Result<Vec<MailExchanger>, DomainError> {
        let response = self.resolve(RecordKind::Mx, host).await?;
        non_empty(response.mail_exchangers(), RecordKind::Mx, host)
    }

    async fn lookup_ns(&self, host: &str) -> Result<Vec<String>, DomainError> {
        let response = self.resolve(RecordKind::Ns, host).await?;
        non_empty(response.name_servers(), RecordKind::Ns, host)
    }

    async fn lookup_txt(&self, host: &str) -> Result<Vec<String>, DomainError> {
        let response = self.resolve(RecordKind::Txt, host).await?;
        non_empty(response.texts(), RecordKind::Txt, host)
    }

    async fn lookup_ptr(&self, addr: &str) -> Result<Vec<String>, DomainError> {
        let ip: IpAddr = addr.parse().map_err(|_| {
            DomainError::lookup_failed(addr, RecordKind::Ptr, "not an IP address")
        })?;
        let reverse = ip_to_reverse_domain(&ip);

        // errors carry the address, not the arpa name
        let response = self
            .resolve(RecordKind::Ptr, &reverse)
            .await
            .map_err(|e| match e {
                DomainError::LookupFailed { kind, reason, .. } => {
                    DomainError::lookup_failed(addr, kind, reason)
                }
                DomainError::LookupTimeout { kind, .. } => DomainError::LookupTimeout {
                    subject: addr.to_string(),
                    kind,
                },
                other => other,
            })?;
        non_empty(response.reverse_names(), RecordKind::Ptr, addr)
    }
}
