use core::fmt;
use core::str::FromStr;

/// Byte order used when decoding multi-byte numeric values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// The byte order of the target this code was compiled for.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// The byte order of the target this code was compiled for.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// Returns the conventional short name, `"LE"` or `"BE"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Little => "LE",
            Self::Big => "BE",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endianness {
    type Err = ParseEndiannessError;

    /// Accepts `LE`/`BE` as well as `little`/`big`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("le") || s.eq_ignore_ascii_case("little") {
            Ok(Self::Little)
        } else if s.eq_ignore_ascii_case("be") || s.eq_ignore_ascii_case("big") {
            Ok(Self::Big)
        } else {
            Err(ParseEndiannessError)
        }
    }
}

/// Error returned when a string does not name a byte order.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("unrecognized byte order; expected \"LE\" or \"BE\"")]
pub struct ParseEndiannessError;
