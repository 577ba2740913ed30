//! Macros for record data types.

/// Creates a record data type consisting of a single domain name.
///
/// The type gets a constructor, an accessor and a conversion into the name,
/// the record data scanner, and `Display`.
macro_rules! name_type {
    ( $(#[$attr:meta])* ( $target:ident, $rtype:ident, $field:ident,
      $into_field:ident ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $target {
            $field: $crate::base::name::Name,
        }

        impl $target {
            /// The rtype of this record data type.
            pub const RTYPE: $crate::base::iana::Rtype =
                $crate::base::iana::Rtype::$rtype;

            pub fn new($field: $crate::base::name::Name) -> Self {
                $target { $field }
            }

            pub fn $field(&self) -> &$crate::base::name::Name {
                &self.$field
            }

            pub fn $into_field(self) -> $crate::base::name::Name {
                self.$field
            }

            /// Scans the record data.
            ///
            /// The data is a single domain name.
            pub fn scan<S: $crate::scan::TokenStream>(
                scanner: &mut $crate::zonefile::scanner::RdataScanner<S>,
            ) -> Result<Self, $crate::zonefile::error::ParseError> {
                scanner.scan_name().map(Self::new)
            }
        }

        //--- Display

        impl core::fmt::Display for $target {
            fn fmt(
                &self, f: &mut core::fmt::Formatter
            ) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.$field, f)
            }
        }
    }
}

/// Creates a record data type with the format of DS record data.
///
/// The data consists of a key tag, a security algorithm and a digest type
/// followed by the digest itself. The digest is kept as the text it was
/// scanned from.
macro_rules! ds_type {
    ( $(#[$attr:meta])* ( $target:ident, $rtype:ident ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $target {
            key_tag: u16,
            algorithm: u8,
            digest_type: u8,
            digest: std::string::String,
        }

        impl $target {
            /// The rtype of this record data type.
            pub const RTYPE: $crate::base::iana::Rtype =
                $crate::base::iana::Rtype::$rtype;

            pub fn new(
                key_tag: u16,
                algorithm: u8,
                digest_type: u8,
                digest: impl Into<std::string::String>,
            ) -> Self {
                $target {
                    key_tag,
                    algorithm,
                    digest_type,
                    digest: digest.into(),
                }
            }

            pub fn key_tag(&self) -> u16 {
                self.key_tag
            }

            pub fn algorithm(&self) -> u8 {
                self.algorithm
            }

            pub fn digest_type(&self) -> u8 {
                self.digest_type
            }

            pub fn digest(&self) -> &str {
                &self.digest
            }

            /// Scans the four fields of the record data.
            ///
            /// The end of the entry is left for the caller to check.
            pub fn scan<S: $crate::scan::TokenStream>(
                scanner: &mut $crate::zonefile::scanner::RdataScanner<S>,
            ) -> Result<Self, $crate::zonefile::error::ParseError> {
                let key_tag = scanner.scan_int()?;
                scanner.scan_blank()?;
                let algorithm = scanner.scan_int()?;
                scanner.scan_blank()?;
                let digest_type = scanner.scan_int()?;
                scanner.scan_blank()?;
                let digest = scanner.scan_text()?;
                Ok(Self::new(key_tag, algorithm, digest_type, digest))
            }
        }

        //--- Display

        impl core::fmt::Display for $target {
            fn fmt(
                &self, f: &mut core::fmt::Formatter
            ) -> core::fmt::Result {
                write!(
                    f, "{} {} {} {}",
                    self.key_tag, self.algorithm, self.digest_type,
                    self.digest
                )
            }
        }
    }
}
