//! Record data from [RFC 4255]: SSHFP records.
//!
//! [RFC 4255]: https://tools.ietf.org/html/rfc4255

use crate::base::iana::Rtype;
use crate::scan::TokenStream;
use crate::zonefile::error::ParseError;
use crate::zonefile::scanner::RdataScanner;
use core::fmt;
use std::string::String;

//------------ Sshfp ---------------------------------------------------------

/// SSHFP record data.
///
/// The record publishes the fingerprint of an SSH host key. The
/// fingerprint is kept in the hex form it had in the zonefile.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sshfp {
    algorithm: u8,
    fingerprint_type: u8,
    fingerprint: String,
}

impl Sshfp {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::SSHFP;

    pub fn new(
        algorithm: u8,
        fingerprint_type: u8,
        fingerprint: impl Into<String>,
    ) -> Self {
        Sshfp {
            algorithm,
            fingerprint_type,
            fingerprint: fingerprint.into(),
        }
    }

    /// The algorithm of the host key.
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The message digest used for the fingerprint.
    pub fn fingerprint_type(&self) -> u8 {
        self.fingerprint_type
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        let algorithm = scanner.scan_int()?;
        scanner.scan_blank()?;
        let fingerprint_type = scanner.scan_int()?;
        scanner.scan_blank()?;
        let fingerprint = scanner.scan_text()?;
        Ok(Self::new(algorithm, fingerprint_type, fingerprint))
    }
}

//--- Display

impl fmt::Display for Sshfp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.algorithm, self.fingerprint_type, self.fingerprint
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::{Token, Tokens};
    use crate::zonefile::error::ErrorKind;

    fn scan(tokens: Vec<Token>) -> Result<Sshfp, ParseError> {
        Sshfp::scan(&mut RdataScanner::new(
            Tokens::from(tokens),
            Sshfp::RTYPE,
        ))
    }

    #[test]
    fn scan_sshfp() {
        let sshfp = scan(vec![
            Token::string("4"),
            Token::blank(" "),
            Token::string("2"),
            Token::blank(" "),
            Token::string("123456789abcdef67890123456789abcdef67890"),
        ])
        .unwrap();
        assert_eq!(sshfp.algorithm(), 4);
        assert_eq!(sshfp.fingerprint_type(), 2);
        assert_eq!(
            format!("{}", sshfp),
            "4 2 123456789abcdef67890123456789abcdef67890"
        );
    }

    #[test]
    fn scan_bad_sshfp() {
        let err = scan(vec![Token::string("ssh-rsa")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRdata(Rtype::SSHFP));
        assert_eq!(err.token(), Some(&Token::string("ssh-rsa")));
    }
}
