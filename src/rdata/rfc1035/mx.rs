//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::scan::TokenStream;
use crate::zonefile::error::ParseError;
use crate::zonefile::scanner::RdataScanner;
use core::fmt;

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mx {
    preference: u16,
    exchange: Name,
}

impl Mx {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::MX;

    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        let preference = scanner.scan_int()?;
        scanner.scan_blank()?;
        Ok(Self::new(preference, scanner.scan_name()?))
    }
}

//--- Display

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::{Token, Tokens};
    use crate::zonefile::error::ErrorKind;

    fn scan(tokens: Vec<Token>) -> Result<Mx, ParseError> {
        Mx::scan(&mut RdataScanner::new(Tokens::from(tokens), Mx::RTYPE))
    }

    #[test]
    fn scan_mx() {
        let mx = scan(vec![
            Token::string("10"),
            Token::blank(" "),
            Token::string("mail.example.com"),
        ])
        .unwrap();
        assert_eq!(mx.preference(), 10);
        assert_eq!(mx.exchange(), "mail.example.com");
        assert_eq!(format!("{}", mx), "10 mail.example.com");
    }

    #[test]
    fn scan_bad_mx() {
        let err = scan(vec![
            Token::string("70000"),
            Token::blank(" "),
            Token::string("mail.example.com"),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRdata(Rtype::MX));
        assert_eq!(err.token(), Some(&Token::string("70000")));

        let err = scan(vec![
            Token::string("10"),
            Token::blank(" "),
            Token::string("mail..example.com"),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRdata(Rtype::MX));

        let err = scan(vec![Token::string("10"), Token::newline()])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedBlank(Rtype::MX));
        assert_eq!(err.token(), Some(&Token::newline()));
    }
}
