use async_trait::async_trait;
use dns_preload_domain::{DomainError, LookupAnswer, MailExchanger, RecordKind};
use std::net::IpAddr;

/// Resolution capability the preload batches run against.
///
/// One operation per record kind. Implementations return a lookup failure
/// when the name has no records of the requested kind. Deadlines are applied
/// by the caller.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;

    async fn lookup_cname(&self, host: &str) -> Result<String, DomainError>;

    async fn lookup_mx(&self, host: &str) -> Result<Vec<MailExchanger>, DomainError>;

    async fn lookup_ns(&self, host: &str) -> Result<Vec<String>, DomainError>;

    async fn lookup_txt(&self, host: &str) -> Result<Vec<String>, DomainError>;

    /// Reverse lookup of an IP literal.
    async fn lookup_ptr(&self, addr: &str) -> Result<Vec<String>, DomainError>;

    /// Runs the operation matching `kind` and tags the result.
    async fn lookup(&self, kind: RecordKind, subject: &str) -> Result<LookupAnswer, DomainError> {
        let answer = match kind {
            RecordKind::Hosts => LookupAnswer::Addresses(self.lookup_ip(subject).await?),
            RecordKind::Cname => LookupAnswer::CanonicalName(self.lookup_cname(subject).await?),
            RecordKind::Mx => LookupAnswer::MailExchangers(self.lookup_mx(subject).await?),
            RecordKind::Ns => LookupAnswer::NameServers(self.lookup_ns(subject).await?),
            RecordKind::Txt => LookupAnswer::Texts(self.lookup_txt(subject).await?),
            RecordKind::Ptr => LookupAnswer::ReverseNames(self.lookup_ptr(subject).await?),
        };
        Ok(answer)
    }
}
