//! Domain names in presentation format.
//!
//! Record data scanning only needs to know whether a token is a valid
//! domain name, it doesn’t need the wire format. [`Name`] therefore keeps
//! the name as the text it was scanned from once that text has been checked
//! against the rules of [RFC 1035]: labels of at most 63 octets, names of at
//! most 255 octets in wire format, and no empty labels other than the root.
//!
//! Escape sequences are decoded for the length checks only. A name is never
//! made absolute and `@` is accepted as is since expanding relative names
//! against the origin is the business of whoever reads the zonefile.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use core::{fmt, str};
use std::string::String;

//------------ Name ----------------------------------------------------------

/// A validated domain name in presentation format.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Name(String);

impl Name {
    /// The maximum length of a domain name in wire format.
    pub const MAX_LEN: usize = 255;

    /// The maximum length of a single label.
    pub const MAX_LABEL_LEN: usize = 63;

    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Name(".".into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the name into its underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns whether the name ends in the root label.
    pub fn is_absolute(&self) -> bool {
        // A trailing dot only ends the name if it isn’t escaped.
        let mut escaped = false;
        let mut last_dot = false;
        let mut chars = self.0.chars();
        while let Some(ch) = chars.next() {
            if escaped {
                escaped = false;
                last_dot = false;
                if ch.is_ascii_digit() {
                    chars.next();
                    chars.next();
                }
                continue;
            }
            escaped = ch == '\\';
            last_dot = ch == '.';
        }
        last_dot
    }

    /// Checks that `s` is a valid domain name.
    ///
    /// Returns the length of the name in wire format.
    pub fn check_str(s: &str) -> Result<usize, NameError> {
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        if s == "." || s == "@" {
            return Ok(1);
        }

        let mut chars = s.chars();
        // The wire length starts out with the root label.
        let mut len = 1;
        let mut label = 0;
        loop {
            let ch = match chars.next() {
                Some(ch) => ch,
                None => {
                    // Relative names end in a label that still needs
                    // counting.
                    if label > 0 {
                        len += label + 1;
                    }
                    break;
                }
            };
            match ch {
                '.' => {
                    if label == 0 {
                        return Err(NameError::EmptyLabel);
                    }
                    len += label + 1;
                    label = 0;
                    continue;
                }
                '\\' => check_escape(&mut chars)?,
                '"' | '(' | ')' | ';' => {
                    return Err(NameError::DisallowedChar)
                }
                ch if !ch.is_ascii() || ch.is_ascii_whitespace() => {
                    return Err(NameError::DisallowedChar)
                }
                ch if ch.is_ascii_control() => {
                    return Err(NameError::DisallowedChar)
                }
                _ => {}
            }
            label += 1;
            if label > Self::MAX_LABEL_LEN {
                return Err(NameError::LongLabel);
            }
        }
        if len > Self::MAX_LEN {
            return Err(NameError::LongName);
        }
        Ok(len)
    }
}

/// Checks the remainder of an escape sequence after the backslash.
fn check_escape(chars: &mut str::Chars) -> Result<(), NameError> {
    match chars.next() {
        Some(ch) if ch.is_ascii_digit() => {
            let mut value = ch.to_digit(10).unwrap_or(0);
            for _ in 0..2 {
                let digit = chars
                    .next()
                    .and_then(|ch| ch.to_digit(10))
                    .ok_or(NameError::InvalidEscape)?;
                value = value * 10 + digit;
            }
            if value > 255 {
                Err(NameError::InvalidEscape)
            } else {
                Ok(())
            }
        }
        Some(ch) if ch.is_ascii() && !ch.is_ascii_control() => Ok(()),
        _ => Err(NameError::InvalidEscape),
    }
}

/// Returns whether `s` is a valid domain name in presentation format.
pub fn is_domain_name(s: &str) -> bool {
    Name::check_str(s).is_ok()
}

//--- FromStr and TryFrom

impl str::FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::check_str(s)?;
        Ok(Name(s.into()))
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Name::check_str(&s)?;
        Ok(Name(s))
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

//--- AsRef

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//--- PartialEq with str

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<'a> PartialEq<&'a str> for Name {
    fn eq(&self, other: &&'a str) -> bool {
        self.0 == *other
    }
}

//--- Display

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//------------ NameError -----------------------------------------------------

/// An error in checking a domain name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// The name was empty.
    Empty,

    /// An invalid escape sequence was encountered.
    InvalidEscape,

    /// A disallowed character was encountered.
    DisallowedChar,

    /// An empty (non-root) label was encountered.
    EmptyLabel,

    /// A label exceeds the 63-byte limit.
    LongLabel,

    /// The name exceeds the 255-byte limit.
    LongName,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Self::Empty => "empty domain name",
            Self::InvalidEscape => "invalid escape sequence found",
            Self::DisallowedChar => "disallowed character found",
            Self::EmptyLabel => "empty domain name label",
            Self::LongLabel => "domain name label longer than 63 bytes",
            Self::LongName => "domain name longer than 255 bytes",
        })
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_names() {
        assert_eq!(Name::check_str("."), Ok(1));
        assert_eq!(Name::check_str("example.com."), Ok(13));
        assert_eq!(Name::check_str("example.com"), Ok(13));
        assert_eq!(Name::check_str("*.example.com."), Ok(15));
        assert_eq!(Name::check_str("a\\.b.example."), Ok(13));
        assert_eq!(Name::check_str("\\000.example."), Ok(11));
        assert!(is_domain_name("@"));
        assert!(is_domain_name("mail.example.com"));
    }

    #[test]
    fn invalid_names() {
        assert_eq!(Name::check_str(""), Err(NameError::Empty));
        assert_eq!(Name::check_str("a..b."), Err(NameError::EmptyLabel));
        assert_eq!(Name::check_str(".example."), Err(NameError::EmptyLabel));
        assert_eq!(Name::check_str("ex ample."), Err(NameError::DisallowedChar));
        assert_eq!(Name::check_str("exa;mple."), Err(NameError::DisallowedChar));
        assert_eq!(Name::check_str("ex\u{e4}mple."), Err(NameError::DisallowedChar));
        assert_eq!(Name::check_str("a\\256."), Err(NameError::InvalidEscape));
        assert_eq!(Name::check_str("a\\2"), Err(NameError::InvalidEscape));
        assert_eq!(Name::check_str("a\\"), Err(NameError::InvalidEscape));
    }

    #[test]
    fn length_limits() {
        let label = "a".repeat(63);
        assert!(is_domain_name(&format!("{}.", label)));
        assert_eq!(
            Name::check_str(&format!("{}a.", label)),
            Err(NameError::LongLabel)
        );

        // Four labels of 63 octets make 4 * 64 + 1 = 257 octets.
        let long = format!("{0}.{0}.{0}.{0}.", label);
        assert_eq!(Name::check_str(&long), Err(NameError::LongName));

        // Three of 63 and one of 61 make exactly 255.
        let max = format!("{0}.{0}.{0}.{1}.", label, "a".repeat(61));
        assert_eq!(Name::check_str(&max), Ok(255));
    }

    #[test]
    fn absolute() {
        assert!(Name::root().is_absolute());
        assert!("example.com.".parse::<Name>().unwrap().is_absolute());
        assert!(!"example.com".parse::<Name>().unwrap().is_absolute());
        assert!(!"example\\.".parse::<Name>().unwrap().is_absolute());
        assert!(!"example\\046".parse::<Name>().unwrap().is_absolute());
    }
}
