//! Board-agnostic application logic for the Wristlink watch app
//!
//! This crate contains everything that does not depend on specific hardware:
//!
//! - Display state for the three text slots
//! - The outbound link abstraction (single-slot channel, silent drop on busy)
//! - The session controller wiring inbound commands to the display and
//!   button events to the companion

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod link;
pub mod session;

pub use display::{DisplayState, LOADING_TEXT, SEND_FAILED_TEXT, TEXT_CAPACITY};
pub use link::{DeliveryOutcome, LinkError, OutboundChannel, Uplink};
pub use session::{Session, SessionState};

// The slot vocabulary is part of the wire protocol
pub use wristlink_protocol::Slot;
