//! Byte-stream packetization for serial companion links
//!
//! The dictionary schema itself is unframed: on the original hardware the
//! host transport delivers whole buffers. Over a raw serial link the
//! equivalent delimiting lives here:
//!
//! ```text
//! ┌──────┬───────────┬─────────────────┬──────────┐
//! │ SYNC │ LEN 2B LE │ PAYLOAD (dict)  │ CHECKSUM │
//! └──────┴───────────┴─────────────────┴──────────┘
//! ```
//!
//! CHECKSUM is the XOR of both LEN bytes and all PAYLOAD bytes. A corrupt or
//! oversize packet is dropped whole; the payload never reaches the decoder
//! (the transport's message-dropped path).

use heapless::Vec;

use crate::dict::INBOX_CAPACITY;

/// Packet synchronization byte
pub const PACKET_SYNC: u8 = 0xA5;

/// Framing overhead: SYNC + LEN + CHECKSUM
pub const PACKET_OVERHEAD: usize = 4;

/// Errors raised by the packet layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Declared payload length exceeds the inbox capacity
    Oversize,
    /// Checksum mismatch; the packet was discarded
    InvalidChecksum,
    /// Destination buffer too small for encoding
    BufferTooSmall,
}

fn checksum(len: u16, payload: &[u8]) -> u8 {
    let [lo, hi] = len.to_le_bytes();
    payload.iter().fold(lo ^ hi, |acc, b| acc ^ b)
}

/// Encode one payload as a packet into `out`, returning the packet length
pub fn encode_packet(payload: &[u8], out: &mut [u8]) -> Result<usize, PacketError> {
    if payload.len() > INBOX_CAPACITY {
        return Err(PacketError::Oversize);
    }
    let total = payload.len() + PACKET_OVERHEAD;
    if out.len() < total {
        return Err(PacketError::BufferTooSmall);
    }
    let len = payload.len() as u16;
    out[0] = PACKET_SYNC;
    out[1..3].copy_from_slice(&len.to_le_bytes());
    out[3..3 + payload.len()].copy_from_slice(payload);
    out[3 + payload.len()] = checksum(len, payload);
    Ok(total)
}

/// State machine for reassembling packets from a byte stream
#[derive(Debug, Clone)]
pub struct PacketParser {
    state: ParseState,
    len_lo: u8,
    expected: usize,
    buf: Vec<u8, INBOX_CAPACITY>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    WaitingForSync,
    ReadingLenLow,
    ReadingLenHigh,
    ReadingPayload,
    ReadingChecksum,
}

impl Default for PacketParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketParser {
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForSync,
            len_lo: 0,
            expected: 0,
            buf: Vec::new(),
        }
    }

    /// Reset to waiting for the next SYNC byte
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForSync;
        self.len_lo = 0;
        self.expected = 0;
        self.buf.clear();
    }

    /// Feed a single byte.
    ///
    /// Returns `Ok(Some(payload))` when a complete valid packet is
    /// reassembled, `Ok(None)` when more bytes are needed, or `Err` when a
    /// packet was discarded. The parser resynchronizes on the next SYNC
    /// byte after any error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Vec<u8, INBOX_CAPACITY>>, PacketError> {
        match self.state {
            ParseState::WaitingForSync => {
                if byte == PACKET_SYNC {
                    self.state = ParseState::ReadingLenLow;
                }
                // Non-SYNC bytes between packets are ignored
                Ok(None)
            }
            ParseState::ReadingLenLow => {
                self.len_lo = byte;
                self.state = ParseState::ReadingLenHigh;
                Ok(None)
            }
            ParseState::ReadingLenHigh => {
                let len = u16::from_le_bytes([self.len_lo, byte]) as usize;
                if len > INBOX_CAPACITY {
                    self.reset();
                    return Err(PacketError::Oversize);
                }
                self.expected = len;
                self.buf.clear();
                self.state = if len == 0 {
                    ParseState::ReadingChecksum
                } else {
                    ParseState::ReadingPayload
                };
                Ok(None)
            }
            ParseState::ReadingPayload => {
                // Cannot overflow: expected is bounded by INBOX_CAPACITY
                let _ = self.buf.push(byte);
                if self.buf.len() == self.expected {
                    self.state = ParseState::ReadingChecksum;
                }
                Ok(None)
            }
            ParseState::ReadingChecksum => {
                let expected = checksum(self.expected as u16, &self.buf);
                if byte != expected {
                    self.reset();
                    return Err(PacketError::InvalidChecksum);
                }
                let payload = self.buf.clone();
                self.reset();
                Ok(Some(payload))
            }
        }
    }
}
