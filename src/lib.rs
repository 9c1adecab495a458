//! Reads primitive values, characters, strings and byte ranges from an in-memory buffer through
//! a forward-moving cursor, with a configurable byte order.
//!
//! ```
//! use byte_cursor::{BufferCursorReader, Endianness};
//!
//! let mut r = BufferCursorReader::new(&[0x01, 0x02, 0x03, 0x04, b'h', b'i', 0]);
//! assert_eq!(r.read_u16(), Ok(0x0201));
//! assert_eq!(r.read_u16_with(Endianness::Big), Ok(0x0304));
//! assert_eq!(r.read_null_terminated_string().as_deref(), Ok("hi"));
//! assert!(r.is_at_end());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod encoding;
mod endian;
#[cfg(feature = "std")]
pub mod loader;
mod reader;


pub use encoding::{Encoding, ParseEncodingError};
pub use endian::{Endianness, ParseEndiannessError};
#[cfg(feature = "std")]
pub use loader::{LoadError, LoadedFile};
pub use reader::{BufferCursorReader, ReaderError};
