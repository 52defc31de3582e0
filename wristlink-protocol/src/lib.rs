//! Companion Link Protocol
//!
//! This crate defines the key/value dictionary protocol exchanged between the
//! watch and its paired companion application. The companion drives the three
//! text slots on the watch face; the watch reports button presses.
//!
//! # Protocol Overview
//!
//! Each message is a small dictionary of typed entries:
//! ```text
//! ┌───────┬───────────────────────────────────────┐
//! │ COUNT │ ENTRY × COUNT                         │
//! │ 1B    │ KEY 4B LE │ TYPE 1B │ LEN 2B LE │ VAL │
//! └───────┴───────────────────────────────────────┘
//! ```
//!
//! Values are either a `u32` or a short string. The watch only ever sends
//! single-entry dictionaries with integer values; inbound dictionaries may
//! carry several entries and are processed in encoded order. Unknown keys
//! and malformed entries never abort the scan of the remaining entries.

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod dict;
pub mod events;
pub mod transport;

pub use commands::{
    CompanionCommand, Slot, WatchCommand, KEY_PRESSED, KEY_REQUEST_TEXT, KEY_REQUEST_VERSION,
    KEY_RETURN_VERSION, KEY_SET_TEXT_BOTTOM, KEY_SET_TEXT_MIDDLE, KEY_SET_TEXT_TOP,
    PROTOCOL_VERSION,
};
pub use dict::{DictError, DictReader, DictWriter, Entry, Value, INBOX_CAPACITY, OUTBOX_CAPACITY};
pub use events::{Button, ButtonEvent, Gesture};
pub use transport::{encode_packet, PacketError, PacketParser, PACKET_OVERHEAD, PACKET_SYNC};
