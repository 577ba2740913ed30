//! Resource records.
//!
//! A record consists of a header, carrying the owner name, class, TTL, and
//! record type, and the record data. When scanning a zonefile, the header
//! is read before the record data and determines how the latter is
//! scanned. [`RecordHeader`] carries this header and is turned into a
//! complete [`Record`] once the data is available.

use super::iana::{Class, Rtype};
use super::name::Name;
use crate::rdata::RecordData;
use core::fmt;

//------------ RecordHeader --------------------------------------------------

/// The header of a resource record.
///
/// The header is copied into the record unchanged. In particular, the
/// record type of the header selects the record data type when scanning.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordHeader {
    owner: Name,
    class: Class,
    ttl: u32,
    rtype: Rtype,
}

impl RecordHeader {
    /// Creates a new record header from its components.
    pub fn new(owner: Name, class: Class, ttl: u32, rtype: Rtype) -> Self {
        RecordHeader {
            owner,
            class,
            ttl,
            rtype,
        }
    }

    /// Returns a reference to the owner of the record.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the TTL of the record in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Converts the header into a record with the given data.
    pub fn into_record(self, data: impl Into<RecordData>) -> Record {
        Record::new(self, data)
    }
}

//--- Display

impl fmt::Display for RecordHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.owner, self.ttl, self.class, self.rtype)
    }
}

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// The record type of the data always equals that of the header if the
/// record was produced by [`parse_record`].
///
/// [`parse_record`]: crate::zonefile::parse_record
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    header: RecordHeader,
    data: RecordData,
}

impl Record {
    /// Creates a new record from a header and record data.
    pub fn new(header: RecordHeader, data: impl Into<RecordData>) -> Self {
        Record {
            header,
            data: data.into(),
        }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    /// Returns a reference to the owner of the record.
    pub fn owner(&self) -> &Name {
        self.header.owner()
    }

    pub fn class(&self) -> Class {
        self.header.class()
    }

    pub fn ttl(&self) -> u32 {
        self.header.ttl()
    }

    pub fn rtype(&self) -> Rtype {
        self.header.rtype()
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData {
        self.data
    }

    /// Trades the record for its header and record data.
    pub fn into_parts(self) -> (RecordHeader, RecordData) {
        (self.header, self.data)
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.header, self.data)
    }
}

//============ Testing =======================================================
