//! Fundamental types for record data scanning.
//!
//! This module provides the building blocks the record data types are made
//! of: the IANA-registered [record types][iana::Rtype] and
//! [classes][iana::Class], [domain names][name::Name] in presentation
//! format, and the [serial numbers][serial::Serial] and
//! [timestamps][serial::Timestamp] used by zone and signature records.
//! Finally, [record] holds the [header][record::RecordHeader] and the
//! complete [resource record][record::Record].

pub use self::iana::{Class, Rtype};
pub use self::name::Name;
pub use self::record::{Record, RecordHeader};
pub use self::serial::{Serial, Timestamp};

pub mod iana;
pub mod name;
pub mod record;
pub mod serial;
