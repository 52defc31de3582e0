//! Session controller task
//!
//! Owns the session and the uplink. All three event sources are handled
//! strictly sequentially in one loop: button events, inbound companion
//! payloads, and delivery outcomes. Handlers never block.

use defmt::*;
use embassy_futures::select::{select3, Either3};

use wristlink_core::{DeliveryOutcome, Session, Uplink};

use crate::channels::{BUTTON_EVENTS, DISPLAY_FRAME, INBOUND, SEND_OUTCOME};
use crate::link::SignalOutbox;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    let mut uplink = Uplink::new(SignalOutbox::new());
    let mut session = Session::new();

    // Open the session and ask the companion for current text state
    session.start(&mut uplink);
    publish(&session);

    loop {
        match select3(BUTTON_EVENTS.receive(), INBOUND.receive(), SEND_OUTCOME.wait()).await {
            Either3::First(event) => {
                debug!("Forwarding button event: {:?}", event);
                session.handle_button(event, &mut uplink);
            }
            Either3::Second(payload) => {
                trace!("Inbound dictionary: {} bytes", payload.len());
                if session.handle_inbound(&payload, &mut uplink) {
                    publish(&session);
                }
            }
            Either3::Third(outcome) => {
                if outcome == DeliveryOutcome::Failed {
                    warn!("Failed to send command to companion");
                }
                if session.on_delivery(outcome) {
                    publish(&session);
                }
            }
        }
    }
}

/// Hand the display task a render snapshot
fn publish(session: &Session) {
    DISPLAY_FRAME.signal(session.display().clone());
}
