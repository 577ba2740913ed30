//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. In zonefiles, the type is
    /// given through its mnemonic which is what the type bitmaps of NSEC and
    /// NSEC3 records and the covered type of RRSIG records are scanned from.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    /// Values without a mnemonic can be written using the generic `TYPEnnn`
    /// form defined in [RFC 3597].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination (obsolete).
    (MD => 3, "MD")

    /// A mail forwarder (obsolete).
    (MF => 4, "MF")

    /// The canonical name for an alias
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    (MB =>  7, "MB")
    (MG => 8, "MG")
    (MR => 9, "MR")
    (NULL =>  10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// Responsible person (RFC 1183).
    (RP => 17, "RP")

    /// AFS data base location (RFC 1183, RFC 5864).
    (AFSDB => 18, "AFSDB")

    (X25 => 19, "X25")
    (ISDN => 20, "ISDN")
    (RT => 21, "RT")
    (NSAP => 22, "NSAP")
    (NSAPPTR => 23, "NSAP-PTR")

    /// Security signature (RFC 2535).
    (SIG => 24, "SIG")

    /// Security key (RFC 2535).
    (KEY => 25, "KEY")

    (PX => 26, "PX")
    (GPOS => 27, "GPOS")

    /// IPv6 address (RFC 3596).
    (AAAA =>  28, "AAAA")

    /// Location information (RFC 1876).
    (LOC => 29, "LOC")

    (NXT => 30, "NXT")
    (EID => 31, "EID")
    (NIMLOC => 32, "NIMLOC")

    /// Server selection (RFC 2782).
    (SRV => 33, "SRV")

    (ATMA => 34, "ATMA")

    /// Naming authority pointer (RFC 3403).
    (NAPTR => 35, "NAPTR")

    (KX => 36, "KX")
    (CERT => 37, "CERT")
    (A6 => 38, "A6")

    /// Delegation name (RFC 6672).
    (DNAME => 39, "DNAME")

    (SINK => 40, "SINK")

    /// EDNS pseudo record (RFC 6891).
    (OPT => 41, "OPT")

    (APL => 42, "APL")

    /// Delegation signer (RFC 4034).
    (DS => 43, "DS")

    /// SSH key fingerprint (RFC 4255).
    (SSHFP => 44, "SSHFP")

    (IPSECKEY => 45, "IPSECKEY")

    /// Resource record signature (RFC 4034).
    (RRSIG => 46, "RRSIG")

    /// Next secure (RFC 4034).
    (NSEC => 47, "NSEC")

    /// DNS public key (RFC 4034).
    (DNSKEY => 48, "DNSKEY")

    (DHCID => 49, "DHCID")

    /// Hashed next secure (RFC 5155).
    (NSEC3 => 50, "NSEC3")

    /// Parameters for NSEC3 (RFC 5155).
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// TLS certificate association (RFC 6698).
    (TLSA => 52, "TLSA")

    (SMIMEA => 53, "SMIMEA")
    (HIP => 55, "HIP")
    (NINFO => 56, "NINFO")
    (RKEY => 57, "RKEY")
    (TALINK => 58, "TALINK")

    /// Child DS (RFC 7344).
    (CDS => 59, "CDS")

    /// Child DNSKEY (RFC 7344).
    (CDNSKEY => 60, "CDNSKEY")

    (OPENPGPKEY => 61, "OPENPGPKEY")
    (CSYNC => 62, "CSYNC")

    /// Message digest for DNS zones (RFC 8976).
    (ZONEMD => 63, "ZONEMD")

    /// General purpose service binding (RFC 9460).
    (SVCB => 64, "SVCB")

    /// Service binding for HTTPS (RFC 9460).
    (HTTPS => 65, "HTTPS")

    (SPF => 99, "SPF")
    (UINFO => 100, "UINFO")
    (UID => 101, "UID")
    (GID => 102, "GID")
    (UNSPEC => 103, "UNSPEC")
    (NID => 104, "NID")
    (L32 => 105, "L32")
    (L64 => 106, "L64")
    (LP => 107, "LP")
    (EUI48 => 108, "EUI48")
    (EUI64 => 109, "EUI64")

    /// Transaction key (RFC 2930).
    (TKEY => 249, "TKEY")

    /// Transaction signature (RFC 8945).
    (TSIG => 250, "TSIG")

    (IXFR => 251, "IXFR")
    (AXFR => 252, "AXFR")
    (MAILB => 253, "MAILB")
    (MAILA => 254, "MAILA")

    /// A request for all records (RFC 1035).
    (ANY => 255, "ANY")

    (URI => 256, "URI")

    /// Certification authority restriction (RFC 8659).
    (CAA => 257, "CAA")

    (AVC => 258, "AVC")
    (DOA => 259, "DOA")
    (AMTRELAY => 260, "AMTRELAY")
    (TA => 32768, "TA")
    (DLV => 32769, "DLV")
}

int_enum_str_with_prefix!(Rtype, "TYPE", b"TYPE", u16, "unknown record type");

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn mnemonics_ignore_case() {
        assert_eq!(Rtype::from_mnemonic(b"mx"), Some(Rtype::MX));
        assert_eq!(Rtype::from_mnemonic(b"NsEc3"), Some(Rtype::NSEC3));
        assert_eq!(Rtype::from_mnemonic(b"NSEC3PARAMS"), None);
        assert_eq!(Rtype::from_mnemonic(b""), None);
    }

    #[test]
    fn generic_form() {
        assert_eq!(Rtype::from_bytes(b"TYPE1"), Some(Rtype::A));
        assert_eq!(Rtype::from_bytes(b"type65534").map(Rtype::to_int),
                   Some(65534));
        assert_eq!(Rtype::from_bytes(b"TYPE"), None);
        assert_eq!(Rtype::from_bytes(b"TYPE+1"), None);
        assert_eq!(Rtype::from_bytes(b"TYPE65536"), None);
        assert!(Rtype::from_str("BOGUS").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rtype::RRSIG), "RRSIG");
        assert_eq!(format!("{}", Rtype::from_int(65280)), "TYPE65280");
        assert_eq!(format!("{:?}", Rtype::AAAA), "Rtype::AAAA");
    }
}
