//! Command vocabulary for the companion link
//!
//! Commands are divided into two directions:
//! - Companion → Watch: version queries, text slot updates
//! - Watch → Companion: button presses, version replies, text refresh requests

use crate::dict::{DictError, DictWriter, Entry, Value};
use crate::events::ButtonEvent;

// Keys: Companion → Watch
pub const KEY_REQUEST_VERSION: u32 = 0;
pub const KEY_SET_TEXT_TOP: u32 = 1;
pub const KEY_SET_TEXT_MIDDLE: u32 = 2;
pub const KEY_SET_TEXT_BOTTOM: u32 = 3;

// Keys: Watch → Companion
pub const KEY_PRESSED: u32 = 4;
pub const KEY_RETURN_VERSION: u32 = 5;
pub const KEY_REQUEST_TEXT: u32 = 6;

/// Protocol version reported in return-version replies
pub const PROTOCOL_VERSION: u32 = 1;

/// The three text slots on the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    Top,
    Middle,
    Bottom,
}

impl Slot {
    /// The set-text key addressing this slot
    pub fn key(self) -> u32 {
        match self {
            Slot::Top => KEY_SET_TEXT_TOP,
            Slot::Middle => KEY_SET_TEXT_MIDDLE,
            Slot::Bottom => KEY_SET_TEXT_BOTTOM,
        }
    }

    fn from_key(key: u32) -> Option<Self> {
        match key {
            KEY_SET_TEXT_TOP => Some(Slot::Top),
            KEY_SET_TEXT_MIDDLE => Some(Slot::Middle),
            KEY_SET_TEXT_BOTTOM => Some(Slot::Bottom),
            _ => None,
        }
    }
}

/// Commands received from the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompanionCommand<'a> {
    /// Companion asks for the watch protocol version
    RequestVersion,
    /// Companion sets one text slot
    SetText { slot: Slot, text: &'a str },
}

impl<'a> CompanionCommand<'a> {
    /// Map a decoded entry to a command.
    ///
    /// Returns `None` for unknown keys or a value of the wrong type; the
    /// caller keeps scanning the remaining entries either way.
    pub fn from_entry(entry: &Entry<'a>) -> Option<Self> {
        if entry.key == KEY_REQUEST_VERSION {
            return Some(CompanionCommand::RequestVersion);
        }
        let slot = Slot::from_key(entry.key)?;
        match entry.value {
            Value::Str(text) => Some(CompanionCommand::SetText { slot, text }),
            Value::Uint(_) => None,
        }
    }
}

/// Commands sent to the companion. Always a single integer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchCommand {
    /// A button event, carried as its wire code
    KeyPressed(ButtonEvent),
    /// Reply to request-version with [`PROTOCOL_VERSION`]
    ReturnVersion,
    /// Ask the companion to (re)send current display state
    RequestText,
}

impl WatchCommand {
    /// The dictionary key for this command
    pub fn key(self) -> u32 {
        match self {
            WatchCommand::KeyPressed(_) => KEY_PRESSED,
            WatchCommand::ReturnVersion => KEY_RETURN_VERSION,
            WatchCommand::RequestText => KEY_REQUEST_TEXT,
        }
    }

    /// The integer value carried with this command
    pub fn value(self) -> u32 {
        match self {
            WatchCommand::KeyPressed(event) => event.code(),
            WatchCommand::ReturnVersion => PROTOCOL_VERSION,
            WatchCommand::RequestText => 0,
        }
    }

    /// Encode this command as a single-entry dictionary.
    ///
    /// Returns the number of bytes written.
    pub fn encode(self, buf: &mut [u8]) -> Result<usize, DictError> {
        let mut writer = DictWriter::new(buf)?;
        writer.write_uint(self.key(), self.value())?;
        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::{DictReader, OUTBOX_CAPACITY};
    use crate::events::{Button, Gesture};

    #[test]
    fn test_watch_command_encodes_single_entry() {
        let mut buf = [0u8; OUTBOX_CAPACITY];
        let len = WatchCommand::RequestText.encode(&mut buf).unwrap();

        let entries: heapless::Vec<Entry, 2> = DictReader::new(&buf[..len]).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, KEY_REQUEST_TEXT);
        assert_eq!(entries[0].value, Value::Uint(0));
    }

    #[test]
    fn test_key_pressed_carries_wire_code() {
        for event in ButtonEvent::ALL {
            let mut buf = [0u8; OUTBOX_CAPACITY];
            let len = WatchCommand::KeyPressed(event).encode(&mut buf).unwrap();

            let entry = DictReader::new(&buf[..len]).next().unwrap();
            assert_eq!(entry.key, KEY_PRESSED);
            assert_eq!(entry.value, Value::Uint(event.code()));
        }
    }

    #[test]
    fn test_return_version_value() {
        let cmd = WatchCommand::ReturnVersion;
        assert_eq!(cmd.key(), KEY_RETURN_VERSION);
        assert_eq!(cmd.value(), PROTOCOL_VERSION);
    }

    #[test]
    fn test_every_watch_command_fits_outbox() {
        let mut buf = [0u8; OUTBOX_CAPACITY];
        let commands = [
            WatchCommand::RequestText,
            WatchCommand::ReturnVersion,
            WatchCommand::KeyPressed(ButtonEvent::new(Button::Down, Gesture::Long)),
        ];
        for cmd in commands {
            assert!(cmd.encode(&mut buf).is_ok());
        }
    }

    #[test]
    fn test_companion_command_set_text() {
        let entry = Entry { key: KEY_SET_TEXT_TOP, value: Value::Str("Hello") };
        assert_eq!(
            CompanionCommand::from_entry(&entry),
            Some(CompanionCommand::SetText { slot: Slot::Top, text: "Hello" })
        );
    }

    #[test]
    fn test_companion_command_request_version() {
        let entry = Entry { key: KEY_REQUEST_VERSION, value: Value::Uint(0) };
        assert_eq!(
            CompanionCommand::from_entry(&entry),
            Some(CompanionCommand::RequestVersion)
        );
    }

    #[test]
    fn test_companion_command_unknown_key() {
        let entry = Entry { key: 99, value: Value::Uint(0) };
        assert_eq!(CompanionCommand::from_entry(&entry), None);
    }

    #[test]
    fn test_companion_command_wrong_value_type() {
        // set-text with an integer value is malformed and ignored
        let entry = Entry { key: KEY_SET_TEXT_MIDDLE, value: Value::Uint(5) };
        assert_eq!(CompanionCommand::from_entry(&entry), None);
    }
}
