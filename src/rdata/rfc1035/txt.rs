//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::scan::TokenStream;
use crate::zonefile::error::ParseError;
use crate::zonefile::scanner::RdataScanner;
use core::fmt;
use std::string::String;

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. The text is kept exactly as it
/// appeared in the zonefile, including the white space between words and
/// any quotes or escape sequences, since splitting it into character
/// strings is left to whoever encodes the record.
///
/// The TXT record type is defined in [RFC 1035, section 3.3.14][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.14
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Txt {
    text: String,
}

impl Txt {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::TXT;

    pub fn new(text: impl Into<String>) -> Self {
        Txt { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Scans the rest of the entry as text.
    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        scanner.scan_remainder(true).map(Self::new)
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::{Token, Tokens};

    #[test]
    fn scan_txt() {
        let mut scanner = RdataScanner::new(
            Tokens::from(vec![
                Token::string("\"v=spf1"),
                Token::blank("  "),
                Token::string("-all\""),
                Token::newline(),
                Token::string("next"),
            ]),
            Txt::RTYPE,
        );
        let txt = Txt::scan(&mut scanner).unwrap();
        assert_eq!(txt.text(), "\"v=spf1  -all\"");
        assert_eq!(scanner.into_stream().remaining(), 1);
    }

    #[test]
    fn scan_empty_txt() {
        let mut scanner = RdataScanner::new(Tokens::new(), Txt::RTYPE);
        assert_eq!(Txt::scan(&mut scanner), Ok(Txt::new("")));
    }
}
