#[cfg(feature = "std")]
use crate::encoding::Encoding;
use crate::endian::Endianness;
use core::fmt;
use zerocopy::byteorder::{BE, F32, F64, I16, I32, I64, LE, U16, U32, U64};

pub type Result<T> = core::result::Result<T, ReaderError>;

macro_rules! trace_read {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Generates the default-order and explicit-order read methods for one multi-byte numeric type.
macro_rules! read_endian {
    ($name:ident, $name_with:ident, $ty:ty, $wire:ident, $size:literal) => {
        #[doc = concat!(
            "Reads a `", stringify!($ty), "` using the reader's default byte order and advances ",
            "the cursor by ", stringify!($size), " bytes."
        )]
        #[inline]
        pub fn $name(&mut self) -> Result<$ty> {
            self.$name_with(self.endian)
        }

        #[doc = concat!(
            "Reads a `", stringify!($ty), "` using the given byte order and advances the cursor ",
            "by ", stringify!($size), " bytes. The reader's default byte order is not changed."
        )]
        #[inline]
        pub fn $name_with(&mut self, endian: Endianness) -> Result<$ty> {
            let bytes = self.read_cbytes::<$size>()?;
            let value = match endian {
                Endianness::Little => $wire::<LE>::from_bytes(bytes).get(),
                Endianness::Big => $wire::<BE>::from_bytes(bytes).get(),
            };
            trace_read!("{}({}) = {}", stringify!($name), endian, value);
            Ok(value)
        }
    };
}

/// Reads values from a borrowed slice of bytes, one after another, tracking a cursor.
///
/// Every `read_*` method consumes bytes at the cursor and advances it by exactly the number of
/// bytes consumed. A read that needs more bytes than remain fails with
/// [`ReaderError::OutOfRange`] and leaves the cursor where it was (`read_line` is the exception:
/// characters consumed before the failing byte stay consumed).
///
/// Multi-byte numeric reads use the reader's default [`Endianness`], little-endian unless set
/// otherwise. Each of them also has a `_with` form taking the byte order for that call only.
///
/// The cursor can be moved freely with [`set_offset`](Self::set_offset) and
/// [`shift_offset`](Self::shift_offset). These never validate the new position; a cursor that
/// points outside the buffer is reported by the next read instead.
///
/// The reader never performs I/O. If the data lives in a file, load it into memory first (see
/// the `loader` module) and hand the bytes to [`new`](Self::new) or [`bind`](Self::bind).
///
/// The reader is `Copy`. To decode the same buffer from two positions at once, copy the reader
/// or create a second one over the same slice.
#[derive(Copy, Clone, Default)]
pub struct BufferCursorReader<'a> {
    buf: &'a [u8],
    /// Next byte to read from. May point past the end of `buf`.
    offset: usize,
    endian: Endianness,
}

impl<'a> BufferCursorReader<'a> {
    /// Maximum number of characters returned by
    /// [`read_null_terminated_string`](Self::read_null_terminated_string).
    pub const MAX_STRING_LEN: usize = 255;

    /// Creates a little-endian reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_endianness(buf, Endianness::Little)
    }

    /// Creates a reader with the given default byte order, positioned at the start of `buf`.
    pub fn with_endianness(buf: &'a [u8], endian: Endianness) -> Self {
        Self {
            buf,
            offset: 0,
            endian,
        }
    }

    /// Replaces the underlying buffer and moves the cursor back to the start. The default byte
    /// order is kept.
    pub fn bind(&mut self, buf: &'a [u8]) {
        self.buf = buf;
        self.offset = 0;
    }

    /// Returns `true` if the cursor is at or past the end of the buffer.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.buf.len()
    }

    /// Current cursor position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the cursor to an absolute position. The position is not validated.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Moves the cursor back to the start of the buffer.
    pub fn reset_offset(&mut self) {
        self.offset = 0;
    }

    /// Moves the cursor by `delta` bytes, forwards or backwards. The position is not validated.
    ///
    /// Shifting before the start of the buffer wraps around, so the next read fails with
    /// [`ReaderError::OutOfRange`].
    pub fn shift_offset(&mut self, delta: isize) {
        self.offset = self.offset.wrapping_add_signed(delta);
    }

    /// Default byte order for numeric reads.
    pub fn endianness(&self) -> Endianness {
        self.endian
    }

    /// Changes the default byte order for numeric reads.
    pub fn set_endianness(&mut self, endian: Endianness) {
        self.endian = endian;
    }

    /// Length of the underlying buffer in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.offset)
    }

    /// The whole underlying buffer, independent of the cursor.
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    fn out_of_range(&self, needed: usize) -> ReaderError {
        ReaderError::OutOfRange {
            offset: self.offset,
            needed,
            len: self.buf.len(),
        }
    }

    /// Returns the `len` bytes at the cursor without advancing.
    fn peek_bytes(&self, len: usize) -> Result<&'a [u8]> {
        let buf: &'a [u8] = self.buf;
        self.offset
            .checked_add(len)
            .and_then(|end| buf.get(self.offset..end))
            .ok_or_else(|| self.out_of_range(len))
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(len)?;
        self.offset += len;
        Ok(bytes)
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Reads a single `u8` value.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [value] = self.read_cbytes::<1>()?;
        trace_read!("read_u8() = {}", value);
        Ok(value)
    }

    /// Reads a single `i8` value, two's complement.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    read_endian!(read_u16, read_u16_with, u16, U16, 2);
    read_endian!(read_i16, read_i16_with, i16, I16, 2);
    read_endian!(read_u32, read_u32_with, u32, U32, 4);
    read_endian!(read_i32, read_i32_with, i32, I32, 4);
    read_endian!(read_u64, read_u64_with, u64, U64, 8);
    read_endian!(read_i64, read_i64_with, i64, I64, 8);
    read_endian!(read_f32, read_f32_with, f32, F32, 4);
    read_endian!(read_f64, read_f64_with, f64, F64, 8);

    /// Reads one byte and returns it as a character in the range `U+0000..=U+00FF`.
    #[inline]
    pub fn read_char(&mut self) -> Result<char> {
        Ok(char::from(self.read_u8()?))
    }

    /// Reads `len` bytes as a byte string. This does not copy any data.
    #[cfg(feature = "bstr")]
    pub fn read_bstr(&mut self, len: usize) -> Result<&'a bstr::BStr> {
        Ok(bstr::BStr::new(self.read_bytes(len)?))
    }

    /// Reads `len` bytes and decodes them as UTF-8, replacing invalid sequences with U+FFFD.
    ///
    /// A `len` of zero returns an empty string without touching the cursor, even if the cursor
    /// is past the end of the buffer.
    #[cfg(feature = "std")]
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        self.read_string_with(len, Encoding::Utf8)
    }

    /// Reads `len` bytes and decodes them with the given encoding.
    ///
    /// A `len` of zero returns an empty string without touching the cursor.
    #[cfg(feature = "std")]
    pub fn read_string_with(&mut self, len: usize, encoding: Encoding) -> Result<String> {
        if len == 0 {
            return Ok(String::new());
        }
        let s = encoding.decode(self.read_bytes(len)?);
        trace_read!("read_string_with({}, {}) = {:?}", len, encoding, s);
        Ok(s)
    }

    /// Reads a UTF-8 string stored in a block of `len * 4` bytes, i.e. `len` characters of up to
    /// four bytes each. The cursor advances by `len * 4`.
    ///
    /// Known boundary quirk: the decoded window is `len * 4 + 1` bytes, one byte past the block,
    /// when the buffer has that byte. The extra byte is decoded into the result but is not
    /// consumed. Existing formats depend on this output, so it is kept as is. Any padding inside
    /// the block (typically NUL bytes) is returned as well.
    ///
    /// A `len` of zero returns an empty string without touching the cursor.
    #[cfg(feature = "std")]
    pub fn read_utf_string(&mut self, len: usize) -> Result<String> {
        if len == 0 {
            return Ok(String::new());
        }
        let reserved = len
            .checked_mul(4)
            .ok_or_else(|| self.out_of_range(usize::MAX))?;
        let block = self.peek_bytes(reserved)?;
        let window = self
            .buf
            .get(self.offset..self.offset + reserved + 1)
            .unwrap_or(block);
        let s = String::from_utf8_lossy(window).into_owned();
        self.offset += reserved;
        trace_read!("read_utf_string({}) = {:?}", len, s);
        Ok(s)
    }

    /// Copies the next `len` bytes into a new vector and advances the cursor by `len`.
    ///
    /// Known boundary quirk: historically the copy window was `len + 1` source bytes wide. The
    /// destination only ever held `len` bytes, so the result is exactly the `len` bytes at the
    /// cursor, and a read that ends exactly at the end of the buffer succeeds.
    ///
    /// A `len` of zero returns an empty vector without touching the cursor.
    #[cfg(feature = "std")]
    pub fn read_byte_array(&mut self, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        Ok(self.read_bytes(len)?.to_vec())
    }

    /// Reads characters up to the next `'\n'`. See [`read_line_with`](Self::read_line_with).
    #[cfg(feature = "std")]
    pub fn read_line(&mut self, max_len: usize) -> Result<String> {
        self.read_line_with(max_len, '\n')
    }

    /// Reads up to `max_len` characters with [`read_char`](Self::read_char), stopping early at
    /// `delimiter`.
    ///
    /// The delimiter is consumed but not included in the result. If the buffer ends before the
    /// delimiter or `max_len` is reached, the error is returned and the characters read so far
    /// remain consumed.
    #[cfg(feature = "std")]
    pub fn read_line_with(&mut self, max_len: usize, delimiter: char) -> Result<String> {
        let mut line = String::new();
        for _ in 0..max_len {
            let c = self.read_char()?;
            if c == delimiter {
                break;
            }
            line.push(c);
        }
        Ok(line)
    }

    /// Reads a NUL-terminated string of at most [`MAX_STRING_LEN`](Self::MAX_STRING_LEN)
    /// characters. The terminator is consumed but not returned.
    #[cfg(feature = "std")]
    pub fn read_null_terminated_string(&mut self) -> Result<String> {
        self.read_line_with(Self::MAX_STRING_LEN, '\0')
    }
}

impl fmt::Debug for BufferCursorReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferCursorReader")
            .field("len", &self.buf.len())
            .field("offset", &self.offset)
            .field("endian", &self.endian)
            .finish()
    }
}

/// Error type for `BufferCursorReader`
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReaderError {
    /// A `read_*` method needed more bytes than remain between the cursor and the end of the
    /// buffer. This also covers a cursor that was moved past the end of the buffer.
    #[error("cannot read {needed} byte(s) at offset {offset}: buffer is {len} byte(s) long")]
    OutOfRange {
        /// Cursor position when the read was attempted.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Length of the buffer.
        len: usize,
    },
}
