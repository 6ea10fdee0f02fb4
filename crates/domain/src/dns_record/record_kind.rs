use std::fmt;
use std::str::FromStr;

/// The record categories a preload batch can be made of.
///
/// `Hosts` covers both A and AAAA: one lookup returns every address the
/// nameserver has for the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Hosts,
    Cname,
    Mx,
    Ns,
    Txt,
    Ptr,
}

impl RecordKind {
    /// Fixed order used when every kind is preloaded in one run.
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Hosts,
        RecordKind::Cname,
        RecordKind::Mx,
        RecordKind::Ns,
        RecordKind::Txt,
        RecordKind::Ptr,
    ];

    /// Configuration and command key.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Hosts => "hosts",
            RecordKind::Cname => "cname",
            RecordKind::Mx => "mx",
            RecordKind::Ns => "ns",
            RecordKind::Txt => "txt",
            RecordKind::Ptr => "ptr",
        }
    }

    /// Label shown in console output.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Hosts => "A, AAAA",
            RecordKind::Cname => "CNAME",
            RecordKind::Mx => "MX",
            RecordKind::Ns => "NS",
            RecordKind::Txt => "TXT",
            RecordKind::Ptr => "PTR",
        }
    }

    /// MX and NS answers name other hosts that can be resolved in turn.
    pub fn yields_hostnames(&self) -> bool {
        matches!(self, RecordKind::Mx | RecordKind::Ns)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hosts" => Ok(RecordKind::Hosts),
            "cname" => Ok(RecordKind::Cname),
            "mx" => Ok(RecordKind::Mx),
            "ns" => Ok(RecordKind::Ns),
            "txt" => Ok(RecordKind::Txt),
            "ptr" => Ok(RecordKind::Ptr),
            _ => Err(format!("Invalid record kind: {}", s)),
        }
    }
}
