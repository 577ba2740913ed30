//! Record data implementations.
//!
//! This module contains the record data for all record types that can be
//! scanned from a zonefile. Each type knows how to scan itself from a
//! [`RdataScanner`] through its associated `scan` function and displays
//! itself in presentation format.
//!
//! The types are named identically to the [`Rtype`] variant they
//! implement. They are grouped into submodules for the RFCs they are
//! defined in. All types are also re-exported at the top level here.
//!
//! [`RecordData`] is the sum of all these types and what a scanned record
//! carries.
//!
//! [`RdataScanner`]: crate::zonefile::scanner::RdataScanner

#[macro_use]
mod macros;

pub mod aaaa;
pub mod dnssec;
pub mod nsec3;
pub mod rfc1035;
pub mod sshfp;

pub use self::aaaa::Aaaa;
pub use self::dnssec::{Dlv, Dnskey, Ds, Nsec, Rrsig, Ta};
pub use self::nsec3::{Nsec3, Nsec3Salt, Nsec3param, OwnerHash};
pub use self::rfc1035::{Cname, Mx, Ns, Soa, Txt, A};
pub use self::sshfp::Sshfp;

use crate::base::iana::Rtype;
use core::fmt;

//------------ RecordData ----------------------------------------------------

/// The record data of any supported record type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordData {
    A(A),
    Aaaa(Aaaa),
    Ns(Ns),
    Cname(Cname),
    Mx(Mx),
    Soa(Soa),
    Sshfp(Sshfp),
    Dnskey(Dnskey),
    Ds(Ds),
    Dlv(Dlv),
    Ta(Ta),
    Rrsig(Rrsig),
    Nsec(Nsec),
    Nsec3(Nsec3),
    Nsec3param(Nsec3param),
    Txt(Txt),
}

impl RecordData {
    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match *self {
            RecordData::A(_) => A::RTYPE,
            RecordData::Aaaa(_) => Aaaa::RTYPE,
            RecordData::Ns(_) => Ns::RTYPE,
            RecordData::Cname(_) => Cname::RTYPE,
            RecordData::Mx(_) => Mx::RTYPE,
            RecordData::Soa(_) => Soa::RTYPE,
            RecordData::Sshfp(_) => Sshfp::RTYPE,
            RecordData::Dnskey(_) => Dnskey::RTYPE,
            RecordData::Ds(_) => Ds::RTYPE,
            RecordData::Dlv(_) => Dlv::RTYPE,
            RecordData::Ta(_) => Ta::RTYPE,
            RecordData::Rrsig(_) => Rrsig::RTYPE,
            RecordData::Nsec(_) => Nsec::RTYPE,
            RecordData::Nsec3(_) => Nsec3::RTYPE,
            RecordData::Nsec3param(_) => Nsec3param::RTYPE,
            RecordData::Txt(_) => Txt::RTYPE,
        }
    }
}

//--- From

macro_rules! record_data_from {
    ( $( $variant:ident ),* ) => {
        $(
            impl From<$variant> for RecordData {
                fn from(data: $variant) -> Self {
                    RecordData::$variant(data)
                }
            }
        )*
    }
}

record_data_from!(
    A, Aaaa, Ns, Cname, Mx, Soa, Sshfp, Dnskey, Ds, Dlv, Ta, Rrsig, Nsec,
    Nsec3, Nsec3param, Txt
);

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::A(ref data) => fmt::Display::fmt(data, f),
            RecordData::Aaaa(ref data) => fmt::Display::fmt(data, f),
            RecordData::Ns(ref data) => fmt::Display::fmt(data, f),
            RecordData::Cname(ref data) => fmt::Display::fmt(data, f),
            RecordData::Mx(ref data) => fmt::Display::fmt(data, f),
            RecordData::Soa(ref data) => fmt::Display::fmt(data, f),
            RecordData::Sshfp(ref data) => fmt::Display::fmt(data, f),
            RecordData::Dnskey(ref data) => fmt::Display::fmt(data, f),
            RecordData::Ds(ref data) => fmt::Display::fmt(data, f),
            RecordData::Dlv(ref data) => fmt::Display::fmt(data, f),
            RecordData::Ta(ref data) => fmt::Display::fmt(data, f),
            RecordData::Rrsig(ref data) => fmt::Display::fmt(data, f),
            RecordData::Nsec(ref data) => fmt::Display::fmt(data, f),
            RecordData::Nsec3(ref data) => fmt::Display::fmt(data, f),
            RecordData::Nsec3param(ref data) => fmt::Display::fmt(data, f),
            RecordData::Txt(ref data) => fmt::Display::fmt(data, f),
        }
    }
}

//============ Testing =======================================================
