//! Button press tasks
//!
//! One task instance per physical button. The hardware has no click
//! recognizer, so gestures are derived here: a press released before the
//! long-press threshold is a single click; holding past the threshold fires
//! the long gesture immediately and the eventual release emits nothing.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Timer};

use wristlink_protocol::{Button, ButtonEvent, Gesture};

use crate::channels::BUTTON_EVENTS;

/// Long-press threshold, fixed by the companion contract
const LONG_PRESS: Duration = Duration::from_millis(700);

/// Contact settle time after an edge
const DEBOUNCE: Duration = Duration::from_millis(20);

/// Button task - one per button (pressed = low)
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {:?}", button);

    loop {
        pin.wait_for_falling_edge().await;

        // Debounce
        Timer::after(DEBOUNCE).await;
        if pin.is_high() {
            continue;
        }

        match with_timeout(LONG_PRESS, pin.wait_for_rising_edge()).await {
            Ok(()) => {
                emit(ButtonEvent::new(button, Gesture::Single));
            }
            Err(_) => {
                // Threshold passed: fire the long gesture now; the eventual
                // release is swallowed so it cannot double as a single click
                emit(ButtonEvent::new(button, Gesture::Long));
                pin.wait_for_rising_edge().await;
            }
        }

        // Debounce after release
        Timer::after(DEBOUNCE).await;
    }
}

fn emit(event: ButtonEvent) {
    debug!("Button event: {:?}", event);
    if BUTTON_EVENTS.try_send(event).is_err() {
        warn!("Button queue full, dropping event");
    }
}
