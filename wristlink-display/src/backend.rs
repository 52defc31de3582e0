//! Display backend trait

use wristlink_protocol::Slot;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Hardware-agnostic interface for the three-region watch face.
///
/// A full refresh is `clear`, three `draw_slot` calls, `flush`. The backend
/// owns overflow handling; [`crate::fit_ellipsis`] is the shared fitting
/// helper.
pub trait DisplayBackend {
    /// Clear the entire panel buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw the text for one slot into its region
    fn draw_slot(&mut self, slot: Slot, text: &str) -> Result<(), DisplayError>;

    /// Push buffered content to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// In-memory backend capturing drawn text, for host tests
pub struct BufferBackend {
    slots: [heapless::String<64>; 3],
    pub flushes: usize,
}

impl Default for BufferBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferBackend {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| heapless::String::new()),
            flushes: 0,
        }
    }

    /// Text last drawn for a slot
    pub fn slot(&self, slot: Slot) -> &str {
        self.slots[slot_index(slot)].as_str()
    }
}

fn slot_index(slot: Slot) -> usize {
    match slot {
        Slot::Top => 0,
        Slot::Middle => 1,
        Slot::Bottom => 2,
    }
}

impl DisplayBackend for BufferBackend {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for line in &mut self.slots {
            line.clear();
        }
        Ok(())
    }

    fn draw_slot(&mut self, slot: Slot, text: &str) -> Result<(), DisplayError> {
        let line = &mut self.slots[slot_index(slot)];
        line.clear();
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushes += 1;
        Ok(())
    }
}
