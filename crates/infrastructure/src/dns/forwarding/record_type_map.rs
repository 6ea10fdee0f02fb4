use dns_preload_domain::RecordKind;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Query types issued for one lookup of `kind`.
    ///
    /// Hosts lookups ask for both address families.
    pub fn to_hickory(kind: RecordKind) -> &'static [HickoryRecordType] {
        match kind {
            RecordKind::Hosts => &[HickoryRecordType::A, HickoryRecordType::AAAA],
            RecordKind::Cname => &[HickoryRecordType::CNAME],
            RecordKind::Mx => &[HickoryRecordType::MX],
            RecordKind::Ns => &[HickoryRecordType::NS],
            RecordKind::Txt => &[HickoryRecordType::TXT],
            RecordKind::Ptr => &[HickoryRecordType::PTR],
        }
    }
}
