//! Record data for the SOA record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::serial::Serial;
use crate::scan::TokenStream;
use crate::zonefile::error::ParseError;
use crate::zonefile::scanner::RdataScanner;
use core::fmt;

//------------ Soa ----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The Soa record type is defined in RFC 1035, section 3.3.13.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soa {
    mname: Name,
    rname: Name,
    serial: Serial,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::SOA;

    /// Creates new Soa record data from content.
    pub fn new(
        mname: Name,
        rname: Name,
        serial: Serial,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server for the zone.
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// The mailbox for the person responsible for this zone.
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// The serial number of the original copy of the zone.
    pub fn serial(&self) -> Serial {
        self.serial
    }

    /// The time interval in seconds before the zone should be refreshed.
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// The time in seconds before a failed refresh is retried.
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// The upper limit of time in seconds the zone is authoritative.
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// The minimum TTL to be exported with any RR from this zone.
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    /// Scans the seven fields of the record data.
    ///
    /// Each field is followed by a blank, except for the last one where it
    /// is left to the check for the end of the entry.
    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        let mname = scanner.scan_name()?;
        scanner.scan_blank()?;
        let rname = scanner.scan_name()?;
        scanner.scan_blank()?;
        let serial = Serial(scanner.scan_int()?);
        scanner.scan_blank()?;
        let refresh = scanner.scan_int()?;
        scanner.scan_blank()?;
        let retry = scanner.scan_int()?;
        scanner.scan_blank()?;
        let expire = scanner.scan_int()?;
        scanner.scan_blank()?;
        let minimum = scanner.scan_int()?;
        Ok(Self::new(mname, rname, serial, refresh, retry, expire, minimum))
    }
}

//--- Display

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::{Token, Tokens};
    use crate::zonefile::error::ErrorKind;

    fn tokens(words: &[&str]) -> Tokens {
        let mut res = Tokens::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                res.push(Token::blank(" "));
            }
            res.push(Token::string(*word));
        }
        res
    }

    #[test]
    fn scan_soa() {
        let mut scanner = RdataScanner::new(
            tokens(&[
                "ns.example.com.",
                "hostmaster.example.com.",
                "2024010101",
                "7200",
                "3600",
                "1209600",
                "300",
            ]),
            Soa::RTYPE,
        );
        let soa = Soa::scan(&mut scanner).unwrap();
        assert_eq!(soa.mname(), "ns.example.com.");
        assert_eq!(soa.rname(), "hostmaster.example.com.");
        assert_eq!(soa.serial(), Serial(2024010101));
        assert_eq!(soa.refresh(), 7200);
        assert_eq!(soa.retry(), 3600);
        assert_eq!(soa.expire(), 1209600);
        assert_eq!(soa.minimum(), 300);
        assert_eq!(
            format!("{}", soa),
            "ns.example.com. hostmaster.example.com. 2024010101 7200 3600 \
             1209600 300"
        );
        // The end of the entry is left alone.
        assert!(scanner.into_stream().is_empty());
    }

    #[test]
    fn scan_bad_soa() {
        let mut scanner = RdataScanner::new(
            tokens(&[
                "ns.example.com.",
                "hostmaster.example.com.",
                "2024010101",
                "7200",
                "4294967296",
                "1209600",
                "300",
            ]),
            Soa::RTYPE,
        );
        let err = Soa::scan(&mut scanner).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRdata(Rtype::SOA));
        assert_eq!(err.token(), Some(&Token::string("4294967296")));
    }

    #[test]
    fn scan_short_soa() {
        let mut scanner = RdataScanner::new(
            tokens(&["ns.example.com.", "hostmaster.example.com.", "1"]),
            Soa::RTYPE,
        );
        let err = Soa::scan(&mut scanner).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedBlank(Rtype::SOA));
        assert_eq!(err.token().map(Token::kind), Some(crate::scan::TokenKind::Eof));
    }
}
