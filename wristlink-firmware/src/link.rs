//! Outbound channel implementation over the task plumbing
//!
//! [`SignalOutbox`] is the hardware side of `wristlink_core::OutboundChannel`:
//! one claimable scratch buffer guarded by the [`OUTBOX_BUSY`] flag. Submitted
//! messages are handed to the TX task, which clears the flag after reporting
//! the delivery outcome.

use portable_atomic::Ordering;

use wristlink_core::OutboundChannel;
use wristlink_protocol::OUTBOX_CAPACITY;

use crate::channels::{OutboundSlot, OUTBOX, OUTBOX_BUSY};

pub struct SignalOutbox {
    scratch: [u8; OUTBOX_CAPACITY],
}

impl SignalOutbox {
    pub const fn new() -> Self {
        Self { scratch: [0; OUTBOX_CAPACITY] }
    }
}

impl OutboundChannel for SignalOutbox {
    fn claim(&mut self) -> Option<&mut [u8]> {
        if OUTBOX_BUSY.load(Ordering::Acquire) {
            return None;
        }
        Some(&mut self.scratch)
    }

    fn submit(&mut self, len: usize) {
        OUTBOX_BUSY.store(true, Ordering::Release);
        OUTBOX.signal(OutboundSlot { buf: self.scratch, len });
    }
}
