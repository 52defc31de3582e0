//! Button events reported to the companion

/// Physical buttons on the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Select,
    Down,
}

/// Recognized gestures per button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Press released before the long-press threshold
    Single,
    /// Press held past the long-press threshold (700 ms)
    Long,
}

/// A (button, gesture) combination, produced synchronously on physical
/// input and immediately forwarded as a key-pressed command. Never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    pub gesture: Gesture,
}

// Wire codes carried as the key-pressed command value
const CODE_PRESSED_UP: u32 = 0;
const CODE_PRESSED_SELECT: u32 = 1;
const CODE_PRESSED_DOWN: u32 = 2;
const CODE_HELD_UP: u32 = 3;
const CODE_HELD_SELECT: u32 = 4;
const CODE_HELD_DOWN: u32 = 5;

impl ButtonEvent {
    /// All six combinations, in wire-code order
    pub const ALL: [ButtonEvent; 6] = [
        ButtonEvent { button: Button::Up, gesture: Gesture::Single },
        ButtonEvent { button: Button::Select, gesture: Gesture::Single },
        ButtonEvent { button: Button::Down, gesture: Gesture::Single },
        ButtonEvent { button: Button::Up, gesture: Gesture::Long },
        ButtonEvent { button: Button::Select, gesture: Gesture::Long },
        ButtonEvent { button: Button::Down, gesture: Gesture::Long },
    ];

    pub const fn new(button: Button, gesture: Gesture) -> Self {
        Self { button, gesture }
    }

    /// Convert to the wire code sent to the companion
    pub fn code(self) -> u32 {
        match (self.button, self.gesture) {
            (Button::Up, Gesture::Single) => CODE_PRESSED_UP,
            (Button::Select, Gesture::Single) => CODE_PRESSED_SELECT,
            (Button::Down, Gesture::Single) => CODE_PRESSED_DOWN,
            (Button::Up, Gesture::Long) => CODE_HELD_UP,
            (Button::Select, Gesture::Long) => CODE_HELD_SELECT,
            (Button::Down, Gesture::Long) => CODE_HELD_DOWN,
        }
    }

    /// Parse an event from its wire code
    pub fn from_code(code: u32) -> Option<Self> {
        let event = match code {
            CODE_PRESSED_UP => Self::new(Button::Up, Gesture::Single),
            CODE_PRESSED_SELECT => Self::new(Button::Select, Gesture::Single),
            CODE_PRESSED_DOWN => Self::new(Button::Down, Gesture::Single),
            CODE_HELD_UP => Self::new(Button::Up, Gesture::Long),
            CODE_HELD_SELECT => Self::new(Button::Select, Gesture::Long),
            CODE_HELD_DOWN => Self::new(Button::Down, Gesture::Long),
            _ => return None,
        };
        Some(event)
    }

    /// Returns true for long-press gestures
    pub fn is_long(&self) -> bool {
        self.gesture == Gesture::Long
    }
}
