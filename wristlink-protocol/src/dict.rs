//! Dictionary encoding and decoding for the companion link.
//!
//! Message format:
//! - COUNT (1 byte): number of entries
//! - Per entry:
//!   - KEY (4 bytes, little-endian)
//!   - TYPE (1 byte): value type identifier
//!   - LEN (2 bytes, little-endian): value length
//!   - VALUE (LEN bytes)
//!
//! Inbound buffers are untrusted: string values may be arbitrary bytes and
//! are length-checked against the buffer before use. A malformed entry is
//! skipped; a truncated entry ends the scan.

/// Value type tag for short strings (possibly NUL-terminated)
pub const TYPE_CSTRING: u8 = 0x01;

/// Value type tag for little-endian u32 values
pub const TYPE_UINT32: u8 = 0x02;

/// Inbound buffer capacity in bytes (fixed by the companion contract)
pub const INBOX_CAPACITY: usize = 512;

/// Outbound buffer capacity in bytes. Sized for a single integer entry;
/// the watch never sends strings.
pub const OUTBOX_CAPACITY: usize = 16;

/// Bytes per entry header: KEY + TYPE + LEN
const ENTRY_HEADER_LEN: usize = 4 + 1 + 2;

/// Errors that can occur while building a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Destination buffer cannot hold the entry
    BufferTooSmall,
    /// Entry count would overflow the one-byte header
    TooManyEntries,
}

/// A decoded dictionary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Field identifier
    pub key: u32,
    /// Decoded value
    pub value: Value<'a>,
}

/// A decoded entry value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// Little-endian u32
    Uint(u32),
    /// Bounded string slice into the inbound buffer
    Str(&'a str),
}

impl<'a> Value<'a> {
    /// Returns the integer value, if this is an integer entry
    pub fn as_uint(&self) -> Option<u32> {
        match self {
            Value::Uint(v) => Some(*v),
            Value::Str(_) => None,
        }
    }

    /// Returns the string value, if this is a string entry
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Uint(_) => None,
        }
    }
}

/// Writes dictionary entries into a caller-supplied buffer.
///
/// The entry count is finalized by [`DictWriter::finish`], which returns the
/// total encoded length.
pub struct DictWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    count: u8,
}

impl<'a> DictWriter<'a> {
    /// Start a dictionary in `buf`
    pub fn new(buf: &'a mut [u8]) -> Result<Self, DictError> {
        if buf.is_empty() {
            return Err(DictError::BufferTooSmall);
        }
        Ok(Self { buf, len: 1, count: 0 })
    }

    fn write_header(&mut self, key: u32, value_type: u8, value_len: usize) -> Result<(), DictError> {
        if self.count == u8::MAX {
            return Err(DictError::TooManyEntries);
        }
        if self.buf.len() - self.len < ENTRY_HEADER_LEN + value_len {
            return Err(DictError::BufferTooSmall);
        }
        self.buf[self.len..self.len + 4].copy_from_slice(&key.to_le_bytes());
        self.buf[self.len + 4] = value_type;
        self.buf[self.len + 5..self.len + 7].copy_from_slice(&(value_len as u16).to_le_bytes());
        self.len += ENTRY_HEADER_LEN;
        Ok(())
    }

    /// Append an integer entry
    pub fn write_uint(&mut self, key: u32, value: u32) -> Result<(), DictError> {
        self.write_header(key, TYPE_UINT32, 4)?;
        self.buf[self.len..self.len + 4].copy_from_slice(&value.to_le_bytes());
        self.len += 4;
        self.count += 1;
        Ok(())
    }

    /// Append a string entry (no NUL terminator is written)
    pub fn write_str(&mut self, key: u32, value: &str) -> Result<(), DictError> {
        let bytes = value.as_bytes();
        if bytes.len() > u16::MAX as usize {
            return Err(DictError::BufferTooSmall);
        }
        self.write_header(key, TYPE_CSTRING, bytes.len())?;
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        self.count += 1;
        Ok(())
    }

    /// Finalize the count byte and return the total encoded length
    pub fn finish(self) -> usize {
        self.buf[0] = self.count;
        self.len
    }
}

/// Iterates all well-formed entries of an inbound buffer.
///
/// The traversal is "read first, then read next until exhausted": every entry
/// in the buffer is visited, not just the first. Entries with an unknown TYPE,
/// a bad length, or invalid UTF-8 are skipped; a header or value that extends
/// past the end of the buffer ends iteration.
pub struct DictReader<'a> {
    buf: &'a [u8],
    pos: usize,
    remaining: u8,
}

impl<'a> DictReader<'a> {
    /// Begin reading `buf` as a dictionary. An empty buffer reads as an
    /// empty dictionary.
    pub fn new(buf: &'a [u8]) -> Self {
        let remaining = if buf.is_empty() { 0 } else { buf[0] };
        Self { buf, pos: 1, remaining }
    }

    fn next_raw(&mut self) -> Option<(u32, u8, &'a [u8])> {
        if self.remaining == 0 {
            return None;
        }
        if self.buf.len() - self.pos < ENTRY_HEADER_LEN {
            self.remaining = 0;
            return None;
        }
        let key = u32::from_le_bytes(self.buf[self.pos..self.pos + 4].try_into().ok()?);
        let value_type = self.buf[self.pos + 4];
        let len =
            u16::from_le_bytes(self.buf[self.pos + 5..self.pos + 7].try_into().ok()?) as usize;
        let start = self.pos + ENTRY_HEADER_LEN;
        if self.buf.len() - start < len {
            // Truncated value: nothing after it can be trusted
            self.remaining = 0;
            return None;
        }
        self.pos = start + len;
        self.remaining -= 1;
        Some((key, value_type, &self.buf[start..start + len]))
    }
}

impl<'a> Iterator for DictReader<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Entry<'a>> {
        loop {
            let (key, value_type, raw) = self.next_raw()?;
            let value = match value_type {
                TYPE_UINT32 => {
                    let Ok(bytes) = <[u8; 4]>::try_from(raw) else {
                        continue;
                    };
                    Value::Uint(u32::from_le_bytes(bytes))
                }
                TYPE_CSTRING => {
                    // Tolerate a trailing NUL from C-side senders
                    let raw = match raw.split_last() {
                        Some((0, rest)) => rest,
                        _ => raw,
                    };
                    match core::str::from_utf8(raw) {
                        Ok(s) => Value::Str(s),
                        Err(_) => continue,
                    }
                }
                _ => continue,
            };
            return Some(Entry { key, value });
        }
    }
}
