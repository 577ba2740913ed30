//! Scanning the record data of zonefile entries.
//!
//! The surrounding zonefile reader tokenizes the source and scans the
//! record header, i.e., owner, TTL, class, and record type, itself. It then
//! hands the header together with the token stream positioned right after
//! the record type to [`parse_record`], which scans the record data
//! according to the record type and produces the complete [`Record`].
//!
//! Record types come in two flavours. Most have a fixed number of fields.
//! For them, the entry may only continue with white space before it ends
//! with a newline or the end of the file. RRSIG, NSEC, NSEC3, and TXT
//! records end with data that runs to the end of the entry. Scanning it
//! consumes the newline or end of file token, too.
//!
//! Either way, after successfully returning a record, the stream is
//! positioned at the start of the next entry. After an error, it is left
//! wherever the offending token was found.

pub use self::error::{ErrorKind, ParseError};
pub use self::scanner::RdataScanner;
pub use crate::base::record::{Record, RecordHeader};

pub mod error;
pub mod scanner;

use crate::base::iana::Rtype;
use crate::rdata::{
    Aaaa, Cname, Dlv, Dnskey, Ds, Mx, Ns, Nsec, Nsec3, Nsec3param,
    RecordData, Rrsig, Soa, Sshfp, Ta, Txt, A,
};
use crate::scan::TokenStream;
use tracing::{debug, trace};

//------------ parse_record --------------------------------------------------

/// Scans the record data for `header` from `stream`.
///
/// Returns the record if the data was scanned successfully. Otherwise
/// returns an error that contains the offending token. If the header’s
/// record type isn’t supported, no token is taken from the stream at all.
pub fn parse_record<S: TokenStream>(
    header: RecordHeader,
    stream: S,
) -> Result<Record, ParseError> {
    trace!(
        "Scanning {} record data for '{}'",
        header.rtype(),
        header.owner()
    );
    let mut scanner = RdataScanner::new(stream, header.rtype());
    match scan_data(&mut scanner) {
        Ok(data) => Ok(header.into_record(data)),
        Err(err) => {
            debug!(
                "Rejected {} record for '{}': {}",
                header.rtype(),
                header.owner(),
                err
            );
            Err(err)
        }
    }
}

/// Scans the record data of the scanner’s record type.
fn scan_data<S: TokenStream>(
    scanner: &mut RdataScanner<S>,
) -> Result<RecordData, ParseError> {
    let data: RecordData = match scanner.rtype() {
        Rtype::A => fixed(scanner, A::scan)?,
        Rtype::AAAA => fixed(scanner, Aaaa::scan)?,
        Rtype::NS => fixed(scanner, Ns::scan)?,
        Rtype::CNAME => fixed(scanner, Cname::scan)?,
        Rtype::MX => fixed(scanner, Mx::scan)?,
        Rtype::SOA => fixed(scanner, Soa::scan)?,
        Rtype::SSHFP => fixed(scanner, Sshfp::scan)?,
        Rtype::DNSKEY => fixed(scanner, Dnskey::scan)?,
        Rtype::DS => fixed(scanner, Ds::scan)?,
        Rtype::DLV => fixed(scanner, Dlv::scan)?,
        Rtype::TA => fixed(scanner, Ta::scan)?,
        Rtype::NSEC3PARAM => fixed(scanner, Nsec3param::scan)?,
        Rtype::RRSIG => Rrsig::scan(scanner)?.into(),
        Rtype::NSEC => Nsec::scan(scanner)?.into(),
        Rtype::NSEC3 => Nsec3::scan(scanner)?.into(),
        Rtype::TXT => Txt::scan(scanner)?.into(),
        rtype => return Err(ParseError::unknown_rtype(rtype)),
    };
    Ok(data)
}

/// Scans record data with a fixed number of fields.
///
/// Afterwards, the rest of the entry is checked to be empty.
fn fixed<S, T, F>(
    scanner: &mut RdataScanner<S>,
    op: F,
) -> Result<RecordData, ParseError>
where
    S: TokenStream,
    T: Into<RecordData>,
    F: FnOnce(&mut RdataScanner<S>) -> Result<T, ParseError>,
{
    let data = op(scanner)?;
    scanner.finish()?;
    Ok(data.into())
}

//============ Testing =======================================================
