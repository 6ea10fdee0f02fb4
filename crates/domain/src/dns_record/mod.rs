pub mod answer;
pub mod record_kind;

pub use answer::{normalize, LookupAnswer, MailExchanger};
pub use record_kind::RecordKind;
