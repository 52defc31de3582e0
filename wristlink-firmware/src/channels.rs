//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use heapless::Vec;
use portable_atomic::AtomicBool;

use wristlink_core::{DeliveryOutcome, DisplayState};
use wristlink_protocol::{ButtonEvent, INBOX_CAPACITY, OUTBOX_CAPACITY};

/// Channel capacity for button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Channel capacity for inbound companion payloads
const INBOUND_CHANNEL_SIZE: usize = 2;

/// One submitted outbound message occupying the single in-flight slot
#[derive(Clone, Copy)]
pub struct OutboundSlot {
    pub buf: [u8; OUTBOX_CAPACITY],
    pub len: usize,
}

/// Button events from the button tasks
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Reassembled inbound dictionaries from the companion link
pub static INBOUND: Channel<CriticalSectionRawMutex, Vec<u8, INBOX_CAPACITY>, INBOUND_CHANNEL_SIZE> =
    Channel::new();

/// The submitted outbound message for the TX task
pub static OUTBOX: Signal<CriticalSectionRawMutex, OutboundSlot> = Signal::new();

/// True while a message is in flight. Set on submit, cleared by the TX task
/// after the delivery outcome is reported; sends in between are dropped.
pub static OUTBOX_BUSY: AtomicBool = AtomicBool::new(false);

/// Delivery outcome of the in-flight message (at most one pending, since
/// a second submit cannot happen before the flag clears)
pub static SEND_OUTCOME: Signal<CriticalSectionRawMutex, DeliveryOutcome> = Signal::new();

/// Render snapshot for the display task
pub static DISPLAY_FRAME: Signal<CriticalSectionRawMutex, DisplayState> = Signal::new();
