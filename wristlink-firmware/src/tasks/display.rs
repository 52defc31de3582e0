//! Display update task
//!
//! Renders snapshots published by the controller to the OLED backend.

use defmt::*;

use wristlink_core::DisplayState;
use wristlink_display::{DisplayBackend, DisplayError};
use wristlink_protocol::Slot;

use crate::channels::DISPLAY_FRAME;
use crate::display::OledBackend;

/// Display task - renders the three text slots
#[embassy_executor::task]
pub async fn display_task(mut backend: OledBackend) {
    info!("Display task started");

    if let Err(e) = backend.init() {
        error!("Failed to initialize display: {:?}", e);
    }

    loop {
        let frame = DISPLAY_FRAME.wait().await;
        if let Err(e) = render(&mut backend, &frame) {
            warn!("Display render failed: {:?}", e);
        }
    }
}

fn render(backend: &mut OledBackend, frame: &DisplayState) -> Result<(), DisplayError> {
    backend.clear()?;
    for slot in [Slot::Top, Slot::Middle, Slot::Bottom] {
        backend.draw_slot(slot, frame.text(slot))?;
    }
    backend.flush()
}
