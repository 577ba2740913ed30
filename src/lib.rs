//! Scanning the record data of DNS zonefile entries.
//!
//! This crate turns the tokens making up the record data of a zonefile
//! entry into typed, validated record data. It sits between a zonefile
//! lexer, which produces the tokens, and whoever wants to use the records,
//! such as a zone store.
//!
//! The lexer and the reader scanning the record header are outside of this
//! crate. They hand over the [header][base::RecordHeader] and a
//! [token stream][scan::TokenStream] to [`parse_record`] which scans the
//! record data for the header’s record type and returns the complete
//! [record][base::Record] or an [error][zonefile::ParseError] carrying the
//! offending token.
//!
//! # Modules
//!
//! * [base] contains fundamental types such as record types, domain names,
//!   and the record itself,
//! * [scan] defines tokens and the token streams they are pulled from,
//! * [rdata] contains the record data types, each with the function
//!   scanning it, and
//! * [zonefile] ties it all together and provides [`parse_record`].
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serde serialization for records and all the types
//!   they are made of. IANA types and timestamps are serialized using their
//!   mnemonics and presentation format for human-readable formats.
//! * `tokio`: Allows using the receiver of a
//!   [Tokio](https://tokio.rs/) channel as a token stream. This lets the
//!   lexer run as an async task.
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//! use zonescan::base::{Class, Name, RecordHeader, Rtype};
//! use zonescan::parse_record;
//! use zonescan::scan::{Token, Tokens};
//!
//! let header = RecordHeader::new(
//!     Name::from_str("example.com.").unwrap(),
//!     Class::IN,
//!     3600,
//!     Rtype::MX,
//! );
//! let tokens = Tokens::from(vec![
//!     Token::string("10"),
//!     Token::blank(" "),
//!     Token::string("mail.example.com."),
//!     Token::newline(),
//! ]);
//! let record = parse_record(header, tokens).unwrap();
//! assert_eq!(
//!     record.to_string(),
//!     "example.com. 3600 IN MX 10 mail.example.com."
//! );
//! ```

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod rdata;
pub mod scan;
pub mod zonefile;

pub use self::zonefile::parse_record;
