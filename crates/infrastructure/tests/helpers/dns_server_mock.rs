use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Answers served by [`MockDnsServer`], keyed by lowercase name without the
/// trailing dot. Names with no entry at all get NXDOMAIN.
#[derive(Debug, Clone, Default)]
pub struct MockZone {
    records: HashMap<String, Vec<RData>>,
    truncate_udp: bool,
}

fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// The zone most tests run against.
    pub fn foo_bar() -> Self {
        Self::new()
            .with("foo.bar", RData::A(A(Ipv4Addr::new(8, 8, 4, 4))))
            .with(
                "foo.bar",
                RData::AAAA(AAAA(Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8844))),
            )
            .with("foo.bar", RData::MX(MX::new(10, name("mx0.foo.bar."))))
            .with("foo.bar", RData::MX(MX::new(20, name("mx1.foo.bar."))))
            .with("foo.bar", RData::NS(NS(name("ns1.foo.bar."))))
            .with("foo.bar", RData::TXT(TXT::new(vec!["v=spf1 -all".to_string()])))
            .with("www.foo.bar", RData::CNAME(CNAME(name("foo.bar."))))
            .with("mx0.foo.bar", RData::A(A(Ipv4Addr::new(8, 8, 8, 8))))
            .with("ns1.foo.bar", RData::A(A(Ipv4Addr::new(8, 8, 4, 4))))
            .with("4.4.8.8.in-addr.arpa", RData::PTR(PTR(name("dns.google."))))
            .empty("empty.foo.bar")
    }

    pub fn with(mut self, owner: &str, rdata: RData) -> Self {
        self.records.entry(owner.to_string()).or_default().push(rdata);
        self
    }

    /// Name exists but holds no records (NOERROR, empty answer).
    pub fn empty(mut self, owner: &str) -> Self {
        self.records.entry(owner.to_string()).or_default();
        self
    }

    /// UDP answers come back truncated and empty; TCP answers are complete.
    pub fn truncating(mut self) -> Self {
        self.truncate_udp = true;
        self
    }

    fn respond(&self, query_bytes: &[u8], over_udp: bool) -> Option<Vec<u8>> {
        let query = Message::from_vec(query_bytes).ok()?;
        let question = query.queries().first()?.clone();
        let owner = question
            .name()
            .to_utf8()
            .trim_end_matches('.')
            .to_lowercase();

        let mut response = Message::new();
        response
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_op_code(query.op_code())
            .set_recursion_desired(query.recursion_desired())
            .set_recursion_available(true)
            .add_query(question.clone());

        match self.records.get(&owner) {
            None => {
                response.set_response_code(ResponseCode::NXDomain);
            }
            Some(_) if over_udp && self.truncate_udp => {
                response.set_truncated(true);
            }
            Some(records) => {
                for rdata in records
                    .iter()
                    .filter(|rdata| rdata.record_type() == question.query_type())
                {
                    response.add_answer(Record::from_rdata(
                        question.name().clone(),
                        60,
                        rdata.clone(),
                    ));
                }
            }
        }

        response.to_bytes().ok()
    }
}

/// In-process nameserver listening on UDP and TCP on the same local port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;
        let zone = Arc::new(zone);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = zone.respond(&buf[..len], true) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            tokio::spawn(Self::serve_tcp(stream, zone.clone()));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    async fn serve_tcp(mut stream: tokio::net::TcpStream, zone: Arc<MockZone>) {
        let mut len_buf = [0u8; 2];
        if stream.read_exact(&mut len_buf).await.is_err() {
            return;
        }
        let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        if stream.read_exact(&mut query).await.is_err() {
            return;
        }
        if let Some(response) = zone.respond(&query, false) {
            let mut framed = (response.len() as u16).to_be_bytes().to_vec();
            framed.extend_from_slice(&response);
            let _ = stream.write_all(&framed).await;
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

