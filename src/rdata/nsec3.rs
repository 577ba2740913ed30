//! Record data from [RFC 5155]: NSEC3 and NSEC3PARAM records.
//!
//! [RFC 5155]: https://tools.ietf.org/html/rfc5155

use crate::base::iana::Rtype;
use crate::scan::TokenStream;
use crate::zonefile::error::ParseError;
use crate::zonefile::scanner::RdataScanner;
use core::fmt;
use std::string::String;
use std::vec::Vec;

//------------ Nsec3 ---------------------------------------------------------

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsec3 {
    hash_algorithm: u8,
    flags: u8,
    iterations: u16,
    salt: Nsec3Salt,
    next_owner: OwnerHash,
    types: Vec<Rtype>,
}

impl Nsec3 {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::NSEC3;

    pub fn new(
        hash_algorithm: u8,
        flags: u8,
        iterations: u16,
        salt: Nsec3Salt,
        next_owner: OwnerHash,
        types: Vec<Rtype>,
    ) -> Self {
        Nsec3 {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        }
    }

    pub fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns whether the opt-out flag is set.
    pub fn opt_out(&self) -> bool {
        self.flags & 0x01 != 0
    }

    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    pub fn salt(&self) -> &Nsec3Salt {
        &self.salt
    }

    pub fn next_owner(&self) -> &OwnerHash {
        &self.next_owner
    }

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
        let hash_algorithm = scanner.scan_int()?;
        scanner.scan_blank()?;
        let flags = scanner.scan_int()?;
        scanner.scan_blank()?;
        let iterations = scanner.scan_int()?;
        scanner.scan_blank()?;
        let salt = Nsec3Salt::scan(scanner)?;
        scanner.scan_blank()?;
        let next_owner = OwnerHash::scan(scanner)?;
        let types = scanner.scan_type_bitmap()?;
        Ok(Self::new(
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_owner,
            types,
        ))
    }
}

//--- Display

impl fmt::Display for Nsec3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.hash_algorithm,
            self.flags,
            self.iterations,
            self.salt,
            self.next_owner
        )?;
        for rtype in &self.types {
            write!(f, " {}", rtype)?;
        }
        Ok(())
    }
}

//------------ Nsec3param ----------------------------------------------------

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsec3param {
    hash_algorithm: u8,
    flags: u8,
    iterations: u16,
    salt: Nsec3Salt,
}

impl Nsec3param {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::NSEC3PARAM;

    pub fn new(
        hash_algorithm: u8,
        flags: u8,
        iterations: u16,
        salt: Nsec3Salt,
    ) -> Self {
        Nsec3param {
            hash_algorithm,
            flags,
            iterations,
            salt,
        }
    }

    pub fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    pub fn salt(&self) -> &Nsec3Salt {
        &self.salt
    }

    /// Scans the four fields of the record data.
    ///
    /// The end of the entry is left for the caller to check.
    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        let hash_algorithm = scanner.scan_int()?;
        scanner.scan_blank()?;
        let flags = scanner.scan_int()?;
        scanner.scan_blank()?;
        let iterations = scanner.scan_int()?;
        scanner.scan_blank()?;
        let salt = Nsec3Salt::scan(scanner)?;
        Ok(Self::new(hash_algorithm, flags, iterations, salt))
    }
}

//--- Display

impl fmt::Display for Nsec3param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.hash_algorithm, self.flags, self.iterations, self.salt
        )
    }
}

//------------ Nsec3Salt -----------------------------------------------------

/// The salt value of an NSEC3 record.
///
/// The salt is kept in the textual form it had in the zonefile. Its length
/// is that of the text and can never be longer than 255 octets since it is
/// encoded as a single octet.
///
/// An empty salt is displayed as `-`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Nsec3Salt(String);

impl Nsec3Salt {
    /// The salt has a maximum length 255 octets since its length is encoded
    /// as a single octet.
    pub const MAX_LEN: usize = 255;

    /// Creates an empty salt value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new salt value from the given text.
    pub fn from_text(text: impl Into<String>) -> Result<Self, LongHashError> {
        let text = text.into();
        if text.len() > Self::MAX_LEN {
            Err(LongHashError(()))
        } else {
            Ok(Nsec3Salt(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the salt.
    pub fn salt_len(&self) -> u8 {
        // The length is checked when creating the value.
        self.0.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        scanner.scan_with(|text| Self::from_text(text).ok())
    }
}

impl TryFrom<String> for Nsec3Salt {
    type Error = LongHashError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_text(text)
    }
}

impl From<Nsec3Salt> for String {
    fn from(salt: Nsec3Salt) -> Self {
        salt.0
    }
}

impl fmt::Display for Nsec3Salt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("-")
        } else {
            f.write_str(&self.0)
        }
    }
}

//------------ OwnerHash -----------------------------------------------------

/// The hash of the next owner name of an NSEC3 record.
///
/// Like the salt, the hash is kept in its textual form and limited to 255
/// octets.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct OwnerHash(String);

impl OwnerHash {
    pub const MAX_LEN: usize = 255;

    pub fn from_text(text: impl Into<String>) -> Result<Self, LongHashError> {
        let text = text.into();
        if text.len() > Self::MAX_LEN {
            Err(LongHashError(()))
        } else {
            Ok(OwnerHash(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the hash.
    pub fn hash_len(&self) -> u8 {
        self.0.len() as u8
    }

    pub fn scan<S: TokenStream>(
        scanner: &mut RdataScanner<S>,
    ) -> Result<Self, ParseError> {
        scanner.scan_with(|text| Self::from_text(text).ok())
    }
}

impl TryFrom<String> for OwnerHash {
    type Error = LongHashError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_text(text)
    }
}

impl From<OwnerHash> for String {
    fn from(hash: OwnerHash) -> Self {
        hash.0
    }
}

impl fmt::Display for OwnerHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//------------ LongHashError -------------------------------------------------

/// A salt or hash was longer than 255 octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongHashError(());

impl fmt::Display for LongHashError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("NSEC3 salt or hash too long")
    }
}

impl std::error::Error for LongHashError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::{Token, TokenKind, Tokens};
    use crate::zonefile::error::ErrorKind;

    fn words(rtype: Rtype, words: &[&str]) -> RdataScanner<Tokens> {
        let mut res = Tokens::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                res.push(Token::blank(" "));
            }
            res.push(Token::string(*word));
        }
        res.push(Token::newline());
        RdataScanner::new(res, rtype)
    }

    #[test]
    fn scan_nsec3() {
        let mut scanner = words(
            Rtype::NSEC3,
            &[
                "1",
                "1",
                "12",
                "aabbccdd",
                "2vptu5timamqttgl4luu9kg21e0aor3s",
                "A",
                "RRSIG",
            ],
        );
        let nsec3 = Nsec3::scan(&mut scanner).unwrap();
        assert_eq!(nsec3.hash_algorithm(), 1);
        assert!(nsec3.opt_out());
        assert_eq!(nsec3.iterations(), 12);
        assert_eq!(nsec3.salt().as_str(), "aabbccdd");
        assert_eq!(nsec3.salt().salt_len(), 8);
        assert_eq!(nsec3.next_owner().hash_len(), 32);
        assert_eq!(nsec3.types(), &[Rtype::A, Rtype::RRSIG]);
        assert_eq!(
            format!("{}", nsec3),
            "1 1 12 aabbccdd 2vptu5timamqttgl4luu9kg21e0aor3s A RRSIG"
        );
        // The newline is gone.
        assert_eq!(scanner.next_token().kind(), TokenKind::Eof);
    }

    #[test]
    fn scan_nsec3param() {
        let mut scanner = words(Rtype::NSEC3PARAM, &["1", "0", "0", "ab"]);
        let param = Nsec3param::scan(&mut scanner).unwrap();
        assert_eq!(param.salt().salt_len(), 2);
        assert_eq!(format!("{}", param), "1 0 0 ab");
        assert_eq!(scanner.next_token().kind(), TokenKind::Newline);
    }

    #[test]
    fn long_salt() {
        let salt = "a".repeat(256);
        let err = Nsec3param::scan(&mut words(
            Rtype::NSEC3PARAM,
            &["1", "0", "0", salt.as_str()],
        ))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRdata(Rtype::NSEC3PARAM));
        assert!(Nsec3Salt::from_text("a".repeat(255)).is_ok());
    }

    #[test]
    fn empty_salt_display() {
        assert_eq!(format!("{}", Nsec3Salt::empty()), "-");
        assert_eq!(
            format!(
                "{}",
                Nsec3param::new(1, 0, 10, Nsec3Salt::empty())
            ),
            "1 0 10 -"
        );
    }
}
