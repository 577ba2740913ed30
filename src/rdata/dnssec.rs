//! Record data from [RFC 4034]: DNSKEY, DS, RRSIG, and NSEC records.
//!
//! This RFC defines the record types for DNSSEC. The module also contains
//! the DLV record type from [RFC 4431] and the TA record type of the DNSSEC
//! trust authorities proposal, both of which share the format of DS.
//!
//! Keys, digests, and signatures are kept in the textual form they had in
//! the zonefile. They aren’t decoded.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034
//! [RFC 4431]: https://tools.ietf.org/html/rfc4431

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::serial::Timestamp;
use crate::scan::TokenStream;
use crate::zonefile::error::ParseError;
use crate::zonefile::scanner::RdataScanner;
use core::fmt;
use std::string::String;
use std::vec::Vec;

//------------ Dnskey --------------------------------------------------------

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dnskey {
    flags: u16,
    protocol: u8,
    algorithm: u8,
    public_key: String,
}

impl Dnskey {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::DNSKEY;

    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: u8,
        public_key: impl Into<String>,
    ) -> Self {
        Dnskey {
            flags,
            protocol,
            algorithm,
            public_key: public_key.into(),
        }
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Returns whether the Zone Key flag is set.
    ///
    /// If the flag is not set, the key must not be used to verify RRSIGs
    /// that cover RRSETs.
    pub fn is_zone_key(&self) -> bool {
        self.flags & 0b0000_0001_0000_0000 != 0
    }

    /// Returns whether the Secure Entry Point (SEP) flag is set.
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & 0b0000_0000_0000_0001 != 0
    }

    /// Scans the four fields of the record data.
    ///
    /// The public key is a single word. The end of the entry is left for
    /// the caller to check.
    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        let flags = scanner.scan_int()?;
        scanner.scan_blank()?;
        let protocol = scanner.scan_int()?;
        scanner.scan_blank()?;
        let algorithm = scanner.scan_int()?;
        scanner.scan_blank()?;
        let public_key = scanner.scan_text()?;
        Ok(Self::new(flags, protocol, algorithm, public_key))
    }
}

//--- Display

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.flags, self.protocol, self.algorithm, self.public_key
        )
    }
}

//------------ Ds ------------------------------------------------------------

ds_type! {
    /// DS record data.
    ///
    /// The delegation signer record refers to a DNSKEY record of the child
    /// zone by its key tag, algorithm, and a digest of the key.
    (Ds, DS)
}

//------------ Dlv -----------------------------------------------------------

ds_type! {
    /// DLV record data.
    ///
    /// DNSSEC lookaside validation records publish DS data outside of the
    /// normal delegation chain.
    (Dlv, DLV)
}

//------------ Ta ------------------------------------------------------------

ds_type! {
    /// TA record data.
    ///
    /// Trust anchor records of the DNSSEC trust authorities proposal.
    (Ta, TA)
}

//------------ Rrsig ---------------------------------------------------------

/// RRSIG record data.
///
/// The signature is kept in its textual form, i.e., as the Base 64 words
/// of the zonefile joined together without the white space between them.
/// It isn’t decoded.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rrsig {
    type_covered: Rtype,
    algorithm: u8,
    labels: u8,
    original_ttl: u32,
    expiration: Timestamp,
    inception: Timestamp,
    key_tag: u16,
    signer_name: Name,
    signature: String,
}

impl Rrsig {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::RRSIG;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: Rtype,
        algorithm: u8,
        labels: u8,
        original_ttl: u32,
        expiration: Timestamp,
        inception: Timestamp,
        key_tag: u16,
        signer_name: Name,
        signature: String,
    ) -> Self {
        Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        }
    }

    pub fn type_covered(&self) -> Rtype {
        self.type_covered
    }

    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    pub fn labels(&self) -> u8 {
        self.labels
    }

    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    pub fn expiration(&self) -> Timestamp {
        self.expiration
    }

    pub fn inception(&self) -> Timestamp {
        self.inception
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn signer_name(&self) -> &Name {
        &self.signer_name
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Scans the record data.
    ///
    /// The signature runs to the end of the entry. This consumes the
    /// newline or end of file token that ends it.
    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        let type_covered = scanner.scan_rtype()?;
        scanner.scan_blank()?;
        let algorithm = scanner.scan_int()?;
        scanner.scan_blank()?;
        let labels = scanner.scan_int()?;
        scanner.scan_blank()?;
        let original_ttl = scanner.scan_int()?;
        scanner.scan_blank()?;
        let expiration = scanner.scan_timestamp()?;
        scanner.scan_blank()?;
        let inception = scanner.scan_timestamp()?;
        scanner.scan_blank()?;
        let key_tag = scanner.scan_int()?;
        scanner.scan_blank()?;
        let signer_name = scanner.scan_name()?;
        let signature = scanner.scan_remainder(false)?;
        Ok(Self::new(
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        ))
    }
}

//--- Display

impl fmt::Display for Rrsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {}",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration,
            self.inception,
            self.key_tag,
            self.signer_name,
        )?;
        if !self.signature.is_empty() {
            write!(f, " {}", self.signature)?;
        }
        Ok(())
    }
}

//------------ Nsec ----------------------------------------------------------

/// NSEC record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsec {
    next_name: Name,
    types: Vec<Rtype>,
}

impl Nsec {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::NSEC;

    pub fn new(next_name: Name, types: Vec<Rtype>) -> Self {
        Nsec { next_name, types }
    }

    pub fn next_name(&self) -> &Name {
        &self.next_name
    }

    /// The record types present at the owner name.
    ///
    /// They are in the order given in the zonefile.
    pub fn types(&self) -> &[Rtype] {
        &self.types
    }

    /// Scans the record data.
    ///
    /// The type bitmap runs to the end of the entry. This consumes the
    /// newline or end of file token that ends it.
    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        let next_name = scanner.scan_name()?;
        let types = scanner.scan_type_bitmap()?;
        Ok(Self::new(next_name, types))
    }
}

//--- Display

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.next_name)?;
        for rtype in &self.types {
            write!(f, " {}", rtype)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================
