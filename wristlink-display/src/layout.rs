//! Reference region geometry of the watch face
//!
//! Coordinates are from the original 144x168 device. The top and middle
//! regions' bounding boxes deliberately overlap by 13 units (top ends at 68,
//! middle starts at 55); the regions never draw into the overlap at the same
//! time because slot text is single-region. Backends with other panels treat
//! these as a reference layout, not pixel mandates.

use wristlink_protocol::Slot;

/// Reference screen width in layout units
pub const SCREEN_WIDTH: u16 = 144;

/// Reference screen height in layout units
pub const SCREEN_HEIGHT: u16 = 168;

/// A region's bounding box in layout units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Top slot region
pub const TOP: Region = Region { x: 0, y: 0, width: 144, height: 68 };

/// Middle slot region (overlaps TOP by 13 units)
pub const MIDDLE: Region = Region { x: 0, y: 55, width: 144, height: 68 };

/// Bottom slot region
pub const BOTTOM: Region = Region { x: 0, y: 110, width: 144, height: 68 };

impl Region {
    /// The reference region for a slot
    pub const fn for_slot(slot: Slot) -> Region {
        match slot {
            Slot::Top => TOP,
            Slot::Middle => MIDDLE,
            Slot::Bottom => BOTTOM,
        }
    }

    /// Bottom edge of the bounding box
    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }
}
