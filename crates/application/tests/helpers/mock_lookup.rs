use async_trait::async_trait;
use dns_preload_application::ports::DnsLookup;
use dns_preload_domain::{DomainError, MailExchanger, RecordKind};
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const GOOGLE_DNS_1: &str = "8.8.4.4";
pub const GOOGLE_DNS_2: &str = "8.8.8.8";
pub const GOOGLE_IPV6: &str = "2404:6800:4006:804::200e";

// ============================================================================
// Mock DnsLookup
// ============================================================================

/// Canned answers for the `foo.bar` test zone.
///
/// `mx1.foo.bar` has no address, so chaining an MX batch for `foo.bar`
/// produces one failed hosts lookup.
#[derive(Clone)]
pub struct MockDnsLookup {
    calls: Arc<RwLock<Vec<(RecordKind, String)>>>,
    call_count: Arc<AtomicU64>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            delay: None,
        }
    }

    /// Every lookup sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub async fn calls(&self) -> Vec<(RecordKind, String)> {
        self.calls.read().await.clone()
    }

    /// Subjects looked up for `kind`, sorted.
    pub async fn subjects_for(&self, kind: RecordKind) -> Vec<String> {
        let mut subjects: Vec<String> = self
            .calls
            .read()
            .await
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, s)| s.clone())
            .collect();
        subjects.sort();
        subjects
    }

    async fn record(&self, kind: RecordKind, subject: &str) {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.write().await.push((kind, subject.to_string()));

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

fn nxdomain(subject: &str, kind: RecordKind) -> DomainError {
    DomainError::lookup_failed(subject, kind, format!("nxdomain {subject}"))
}

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[async_trait]
impl DnsLookup for MockDnsLookup {
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.record(RecordKind::Hosts, host).await;
        match host {
            "foo.bar" | "mx0.foo.bar" | "ns1.foo.bar" => Ok(vec![ip(GOOGLE_DNS_1)]),
            "ns2.foo.bar" => Ok(vec![ip(GOOGLE_DNS_2)]),
            "dns.oranged.to" => Ok(vec![ip(GOOGLE_DNS_1), ip(GOOGLE_DNS_2)]),
            _ => Err(nxdomain(host, RecordKind::Hosts)),
        }
    }

    async fn lookup_cname(&self, host: &str) -> Result<String, DomainError> {
        self.record(RecordKind::Cname, host).await;
        match host {
            "www.foo.bar" => Ok("foo.bar".to_string()),
            _ => Err(nxdomain(host, RecordKind::Cname)),
        }
    }

    async fn lookup_mx(&self, host: &str) -> Result<Vec<MailExchanger>, DomainError> {
        self.record(RecordKind::Mx, host).await;
        match host {
            "foo.bar" => Ok(vec![
                MailExchanger::new("mx0.foo.bar", 10),
                MailExchanger::new("mx1.foo.bar", 10),
            ]),
            "single.foo.bar" => Ok(vec![MailExchanger::new("mx0.foo.bar", 10)]),
            "nomail.foo.bar" => Ok(vec![]),
            _ => Err(nxdomain(host, RecordKind::Mx)),
        }
    }

    async fn lookup_ns(&self, host: &str) -> Result<Vec<String>, DomainError> {
        self.record(RecordKind::Ns, host).await;
        match host {
            "foo.bar" => Ok(vec!["ns1.foo.bar".to_string(), "ns2.foo.bar".to_string()]),
            _ => Err(nxdomain(host, RecordKind::Ns)),
        }
    }

    async fn lookup_txt(&self, host: &str) -> Result<Vec<String>, DomainError> {
        self.record(RecordKind::Txt, host).await;
        match host {
            "foo.bar" => Ok(vec!["v=spf1 -all".to_string()]),
            _ => Err(nxdomain(host, RecordKind::Txt)),
        }
    }

    async fn lookup_ptr(&self, addr: &str) -> Result<Vec<String>, DomainError> {
        self.record(RecordKind::Ptr, addr).await;
        if addr == GOOGLE_IPV6 {
            Ok(vec!["ipv6.google.com".to_string()])
        } else {
            Err(DomainError::lookup_failed(addr, RecordKind::Ptr, format!("{addr} ptr not found")))
        }
    }
}
