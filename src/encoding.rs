use core::fmt;
use core::str::FromStr;

#[cfg(feature = "std")]
use zerocopy::byteorder::{LE, U16};
#[cfg(feature = "std")]
use zerocopy::FromBytes;

/// Text encodings understood by `BufferCursorReader::read_string_with`.
///
/// None of the decoders fail. Malformed input is replaced with U+FFFD where the encoding has a
/// notion of malformed input, and mapped byte-for-byte otherwise.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Encoding {
    /// UTF-8. Invalid sequences are replaced with the Unicode replacement character.
    #[default]
    Utf8,
    /// UTF-16, little-endian code units. An odd trailing byte is ignored, and unpaired
    /// surrogates are replaced with the Unicode replacement character.
    Utf16Le,
    /// ISO-8859-1. Each byte becomes the code point with the same value.
    Latin1,
    /// 7-bit ASCII. The high bit of each byte is cleared, then the byte is decoded as Latin-1.
    Ascii,
    /// Each byte becomes two lowercase hexadecimal digits.
    Hex,
}

impl Encoding {
    /// Returns the canonical lowercase name of the encoding.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16Le => "utf16le",
            Self::Latin1 => "latin1",
            Self::Ascii => "ascii",
            Self::Hex => "hex",
        }
    }

    /// Decodes `bytes` into an owned string.
    #[cfg(feature = "std")]
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16Le => {
                let even = &bytes[..bytes.len() & !1];
                match <[U16<LE>]>::ref_from_bytes(even) {
                    Ok(wchars) => {
                        let wchars_u16: Vec<u16> = wchars.iter().map(|c| c.get()).collect();
                        String::from_utf16_lossy(&wchars_u16)
                    }
                    Err(_) => String::new(),
                }
            }
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Ascii => bytes.iter().map(|&b| char::from(b & 0x7f)).collect(),
            Self::Hex => hex::encode(bytes),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: &[(&str, Encoding)] = &[
            ("utf8", Encoding::Utf8),
            ("utf-8", Encoding::Utf8),
            ("utf16le", Encoding::Utf16Le),
            ("utf-16le", Encoding::Utf16Le),
            ("ucs2", Encoding::Utf16Le),
            ("ucs-2", Encoding::Utf16Le),
            ("latin1", Encoding::Latin1),
            ("binary", Encoding::Latin1),
            ("ascii", Encoding::Ascii),
            ("hex", Encoding::Hex),
        ];

        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, encoding)| encoding)
            .ok_or(ParseEncodingError)
    }
}

/// Error returned when a string does not name a supported encoding.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("unsupported text encoding")]
pub struct ParseEncodingError;
