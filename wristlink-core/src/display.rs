//! Display state for the three watch-face text slots
//!
//! The slots are mutated only by inbound set-text commands (and the fixed
//! failure message on delivery failure). Rendering is a concern of the
//! display backend; this is just the text.

use heapless::String;
use wristlink_protocol::Slot;

/// Capacity of one text slot in bytes. Inbound text is bounded by the
/// 512-byte inbox; anything longer than this is truncated.
pub const TEXT_CAPACITY: usize = 64;

/// Middle-slot placeholder shown until the first companion update arrives
pub const LOADING_TEXT: &str = "Loading...";

/// Middle-slot overwrite on outbound delivery failure
pub const SEND_FAILED_TEXT: &str = "Failed to send!";

/// Text content of one slot
pub type SlotText = String<TEXT_CAPACITY>;

/// The three independent text slots (top, middle, bottom).
///
/// `Clone` so the controller can hand render snapshots to the display task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    slots: [SlotText; 3],
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Create the startup state: empty top and bottom, placeholder middle
    pub fn new() -> Self {
        let mut state = Self {
            slots: [SlotText::new(), SlotText::new(), SlotText::new()],
        };
        state.set_text(Slot::Middle, LOADING_TEXT);
        state
    }

    /// Replace a slot's content. The swap is whole-string: no partial text
    /// is ever observable. Text beyond [`TEXT_CAPACITY`] is dropped.
    pub fn set_text(&mut self, slot: Slot, text: &str) {
        let line = &mut self.slots[index(slot)];
        line.clear();
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
    }

    /// Current content of a slot
    pub fn text(&self, slot: Slot) -> &str {
        self.slots[index(slot)].as_str()
    }
}

fn index(slot: Slot) -> usize {
    match slot {
        Slot::Top => 0,
        Slot::Middle => 1,
        Slot::Bottom => 2,
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "DisplayState[{}|{}|{}]",
            self.slots[0].as_str(),
            self.slots[1].as_str(),
            self.slots[2].as_str()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        let state = DisplayState::new();
        assert_eq!(state.text(Slot::Top), "");
        assert_eq!(state.text(Slot::Middle), LOADING_TEXT);
        assert_eq!(state.text(Slot::Bottom), "");
    }

    #[test]
    fn test_set_text_touches_one_slot() {
        let mut state = DisplayState::new();
        state.set_text(Slot::Top, "Hello");
        assert_eq!(state.text(Slot::Top), "Hello");
        assert_eq!(state.text(Slot::Middle), LOADING_TEXT);
        assert_eq!(state.text(Slot::Bottom), "");
    }

    #[test]
    fn test_set_text_replaces_whole_string() {
        let mut state = DisplayState::new();
        state.set_text(Slot::Bottom, "first");
        state.set_text(Slot::Bottom, "x");
        assert_eq!(state.text(Slot::Bottom), "x");
    }

    #[test]
    fn test_overlong_text_truncated() {
        let mut state = DisplayState::new();
        let mut long = heapless::String::<256>::new();
        for _ in 0..200 {
            long.push('a').unwrap();
        }
        state.set_text(Slot::Middle, &long);
        assert_eq!(state.text(Slot::Middle).len(), TEXT_CAPACITY);
    }
}
