//! The registry of supported transfer syntaxes.
//!
//! The table is closed: only the uncompressed syntaxes are recognised,
//! since encapsulated pixel data is stored as opaque fragments and
//! never decompressed by this crate.

use byteordered::Endianness;

/// A transfer syntax specifier:
/// the UID together with the two encoding properties it decides.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    pub uid: &'static str,
    /// A human readable name of the transfer syntax.
    pub name: &'static str,
    /// The byte order of the data set body.
    pub endianness: Endianness,
    /// Whether value representations are explicit on the wire.
    pub explicit_vr: bool,
}

/// Implicit VR Little Endian: the default transfer syntax.
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2",
    name: "Implicit VR Little Endian",
    endianness: Endianness::Little,
    explicit_vr: false,
};

/// Explicit VR Little Endian.
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2.1",
    name: "Explicit VR Little Endian",
    endianness: Endianness::Little,
    explicit_vr: true,
};

/// Deflated Explicit VR Little Endian.
///
/// The data set encoding is the same as Explicit VR Little Endian;
/// inflating the byte stream is up to the caller.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2.1.99",
    name: "Deflated Explicit VR Little Endian",
    endianness: Endianness::Little,
    explicit_vr: true,
};

/// Explicit VR Big Endian (retired, still found in archives).
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2.2",
    name: "Explicit VR Big Endian",
    endianness: Endianness::Big,
    explicit_vr: true,
};

static REGISTRY: [&TransferSyntax; 4] = [
    &IMPLICIT_VR_LITTLE_ENDIAN,
    &EXPLICIT_VR_LITTLE_ENDIAN,
    &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    &EXPLICIT_VR_BIG_ENDIAN,
];

/// Obtain a transfer syntax specifier by its UID.
///
/// Trailing NUL padding and whitespace in the UID are ignored.
pub fn from_uid(uid: &str) -> Option<&'static TransferSyntax> {
    let uid = uid.trim_end_matches(|c| c == '\0' || c == ' ');
    REGISTRY.iter().find(|ts| ts.uid == uid).copied()
}

/// Obtain the transfer syntax matching the given encoding properties.
///
/// There is no transfer syntax for an implicit VR big endian encoding;
/// implicit data sets always map to the default syntax.
pub fn from_mode(endianness: Endianness, explicit_vr: bool) -> &'static TransferSyntax {
    match (endianness, explicit_vr) {
        (_, false) => &IMPLICIT_VR_LITTLE_ENDIAN,
        (Endianness::Little, true) => &EXPLICIT_VR_LITTLE_ENDIAN,
        (Endianness::Big, true) => &EXPLICIT_VR_BIG_ENDIAN,
    }
}
