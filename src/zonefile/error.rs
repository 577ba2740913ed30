//! Errors when scanning record data.

use crate::base::iana::Rtype;
use crate::scan::Token;
use core::fmt;

//------------ ErrorKind -----------------------------------------------------

/// What went wrong while scanning record data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A field of the record data of the given type was malformed.
    ///
    /// This covers addresses, integers, domain names, type mnemonics, and
    /// timestamps that don’t parse, as well as a field that is missing
    /// because the entry ended early.
    BadRdata(Rtype),

    /// A field of the given record type wasn’t followed by white space.
    ExpectedBlank(Rtype),

    /// A type bitmap of the given record type contained a word that isn’t a
    /// record type.
    BadTypeBitmap(Rtype),

    /// There was more data after the record data was complete.
    GarbageAfterRdata,

    /// There is no record data scanner for the given record type.
    UnknownRtype(Rtype),
}

impl ErrorKind {
    /// Returns the record type the error relates to.
    pub fn rtype(self) -> Option<Rtype> {
        match self {
            ErrorKind::BadRdata(rtype)
            | ErrorKind::ExpectedBlank(rtype)
            | ErrorKind::BadTypeBitmap(rtype)
            | ErrorKind::UnknownRtype(rtype) => Some(rtype),
            ErrorKind::GarbageAfterRdata => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::BadRdata(rtype) => write!(f, "bad {}", rtype),
            ErrorKind::ExpectedBlank(rtype) => {
                write!(f, "bad {}: expected blank", rtype)
            }
            ErrorKind::BadTypeBitmap(rtype) => {
                write!(f, "bad {}: non RR in type bitmap", rtype)
            }
            ErrorKind::GarbageAfterRdata => f.write_str("garbage after rdata"),
            ErrorKind::UnknownRtype(rtype) => {
                write!(f, "unknown record type {}", rtype)
            }
        }
    }
}

//------------ ParseError ----------------------------------------------------

/// Scanning record data failed.
///
/// The error keeps the token that caused it so the position and content
/// can be reported. There is no token if the record type is unknown since
/// then scanning fails before the first token is taken.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
    token: Option<Token>,
}

impl ParseError {
    /// Creates a new error for the given token.
    pub fn new(kind: ErrorKind, token: Token) -> Self {
        ParseError {
            kind,
            token: Some(token),
        }
    }

    /// Creates an error for a record type without scanner.
    pub fn unknown_rtype(rtype: Rtype) -> Self {
        ParseError {
            kind: ErrorKind::UnknownRtype(rtype),
            token: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the offending token if there was one.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Converts the error into the offending token.
    pub fn into_token(self) -> Option<Token> {
        self.token
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.token {
            Some(ref token) => write!(f, "{}: {}", self.kind, token),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}

impl std::error::Error for ParseError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::Pos;

    #[test]
    fn display() {
        assert_eq!(
            format!(
                "{}",
                ParseError::new(
                    ErrorKind::BadRdata(Rtype::MX),
                    Token::string("ten").at(Pos::new(3, 7))
                )
            ),
            "bad MX: \"ten\" at line 3, column 7"
        );
        assert_eq!(
            format!("{}", ParseError::unknown_rtype(Rtype::from_int(65535))),
            "unknown record type TYPE65535"
        );
        assert_eq!(
            format!(
                "{}",
                ParseError::new(ErrorKind::GarbageAfterRdata, Token::string("x"))
            ),
            "garbage after rdata: \"x\""
        );
    }
}
