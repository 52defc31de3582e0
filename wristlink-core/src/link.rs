//! Outbound link abstraction
//!
//! The companion channel has a single outbound buffer slot: only one message
//! may be in flight at a time. A send attempted while the slot is occupied is
//! silently abandoned - no retry, no queueing. Delivery outcomes arrive
//! asynchronously, exactly once per submitted message.

use wristlink_protocol::{DictError, WatchCommand};

/// Errors surfaced by [`Uplink::send`].
///
/// Callers following the link contract ignore these (a busy channel drops
/// the command by design); they exist so the drop is observable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// No outbound buffer available; the command was dropped
    ChannelBusy,
    /// The command did not fit the claimed buffer
    Encode(DictError),
}

/// Outcome of a previously submitted message, reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeliveryOutcome {
    /// Message reached the companion transport
    Sent,
    /// Transmission failed after submission
    Failed,
}

/// Hardware seam for the outbound half of the companion channel
pub trait OutboundChannel {
    /// Claim the single outbound buffer slot.
    ///
    /// Returns `None` while a prior message is still in flight.
    fn claim(&mut self) -> Option<&mut [u8]>;

    /// Submit `len` bytes previously written into the claimed buffer.
    fn submit(&mut self, len: usize);
}

/// Encodes watch commands into the outbound channel
pub struct Uplink<C: OutboundChannel> {
    channel: C,
}

impl<C: OutboundChannel> Uplink<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Encode and submit one command.
    ///
    /// If no buffer is available the command is dropped; the error return is
    /// informational only.
    pub fn send(&mut self, cmd: WatchCommand) -> Result<(), LinkError> {
        let buf = self.channel.claim().ok_or(LinkError::ChannelBusy)?;
        let len = cmd.encode(buf).map_err(LinkError::Encode)?;
        self.channel.submit(len);
        Ok(())
    }

    /// Access the underlying channel
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Mutable access to the underlying channel
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }
}
