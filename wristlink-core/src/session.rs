//! Session controller
//!
//! Owns the display state and wires the two event directions together:
//! button events become outbound key-pressed commands, inbound dictionaries
//! become display updates or a version reply.
//!
//! The session has exactly two states. The transition happens once, at
//! startup, and there is no explicit terminating state - teardown is
//! host-driven.

use wristlink_protocol::{ButtonEvent, CompanionCommand, DictReader, Slot, WatchCommand};

use crate::display::{DisplayState, SEND_FAILED_TEXT};
use crate::link::{DeliveryOutcome, OutboundChannel, Uplink};

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Constructed, channel not yet requested
    Uninitialized,
    /// Steady state for the rest of the process lifetime
    Running,
}

/// The session controller
pub struct Session {
    state: SessionState,
    display: DisplayState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an uninitialized session with the documented initial display
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            display: DisplayState::new(),
        }
    }

    /// Transition Uninitialized -> Running and ask the companion to (re)send
    /// current display state. Sends exactly one request-text command; if the
    /// channel is busy the request is dropped like any other send.
    pub fn start<C: OutboundChannel>(&mut self, uplink: &mut Uplink<C>) {
        if self.state == SessionState::Running {
            return;
        }
        self.state = SessionState::Running;
        let _ = uplink.send(WatchCommand::RequestText);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current display content
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Forward one button event as a key-pressed command.
    ///
    /// Pure forwarding: exactly one command per event, never queued. A busy
    /// channel loses the event (documented behavior of the single outbound
    /// slot).
    pub fn handle_button<C: OutboundChannel>(
        &mut self,
        event: ButtonEvent,
        uplink: &mut Uplink<C>,
    ) {
        if self.state != SessionState::Running {
            return;
        }
        let _ = uplink.send(WatchCommand::KeyPressed(event));
    }

    /// Process one inbound dictionary.
    ///
    /// Every entry in the buffer is visited in encoded order: set-text
    /// entries update their slot, request-version produces a return-version
    /// reply, unrecognized keys are ignored without stopping the scan.
    ///
    /// Returns true if any display slot changed.
    pub fn handle_inbound<C: OutboundChannel>(
        &mut self,
        buf: &[u8],
        uplink: &mut Uplink<C>,
    ) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let mut changed = false;
        for entry in DictReader::new(buf) {
            match CompanionCommand::from_entry(&entry) {
                Some(CompanionCommand::RequestVersion) => {
                    let _ = uplink.send(WatchCommand::ReturnVersion);
                }
                Some(CompanionCommand::SetText { slot, text }) => {
                    self.display.set_text(slot, text);
                    changed = true;
                }
                None => {}
            }
        }
        changed
    }

    /// Handle the asynchronous outcome of a prior submission.
    ///
    /// Success is a no-op (hook point for telemetry). Failure overwrites the
    /// middle slot with the fixed failure message, whatever it previously
    /// held; there is no retry.
    ///
    /// Returns true if the display changed.
    pub fn on_delivery(&mut self, outcome: DeliveryOutcome) -> bool {
        match outcome {
            DeliveryOutcome::Sent => false,
            DeliveryOutcome::Failed => {
                self.display.set_text(Slot::Middle, SEND_FAILED_TEXT);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::LOADING_TEXT;
    use heapless::Vec;
    use wristlink_protocol::{
        Button, DictWriter, Gesture, KEY_PRESSED, KEY_REQUEST_TEXT, KEY_REQUEST_VERSION,
        KEY_RETURN_VERSION, KEY_SET_TEXT_BOTTOM, KEY_SET_TEXT_TOP, OUTBOX_CAPACITY,
        PROTOCOL_VERSION,
    };

    #[derive(Default)]
    struct TestChannel {
        busy: bool,
        scratch: [u8; OUTBOX_CAPACITY],
        sent: Vec<Vec<u8, OUTBOX_CAPACITY>, 16>,
    }

    impl OutboundChannel for TestChannel {
        fn claim(&mut self) -> Option<&mut [u8]> {
            if self.busy {
                return None;
            }
            Some(&mut self.scratch)
        }

        fn submit(&mut self, len: usize) {
            let mut msg = Vec::new();
            msg.extend_from_slice(&self.scratch[..len]).unwrap();
            self.sent.push(msg).unwrap();
        }
    }

    fn sent_pairs(uplink: &Uplink<TestChannel>) -> Vec<(u32, u32), 16> {
        uplink
            .channel()
            .sent
            .iter()
            .flat_map(|msg| DictReader::new(msg))
            .filter_map(|e| e.value.as_uint().map(|v| (e.key, v)))
            .collect()
    }

    fn started_session() -> (Session, Uplink<TestChannel>) {
        let mut uplink = Uplink::new(TestChannel::default());
        let mut session = Session::new();
        session.start(&mut uplink);
        (session, uplink)
    }

    fn inbound_text(entries: &[(u32, &str)]) -> Vec<u8, 256> {
        let mut buf = [0u8; 256];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        for (key, text) in entries {
            writer.write_str(*key, text).unwrap();
        }
        let len = writer.finish();
        let mut out = Vec::new();
        out.extend_from_slice(&buf[..len]).unwrap();
        out
    }

    #[test]
    fn test_startup_initial_display_and_single_request_text() {
        let (session, uplink) = started_session();

        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.display().text(Slot::Top), "");
        assert_eq!(session.display().text(Slot::Middle), LOADING_TEXT);
        assert_eq!(session.display().text(Slot::Bottom), "");

        let sent = sent_pairs(&uplink);
        assert_eq!(sent.as_slice(), &[(KEY_REQUEST_TEXT, 0)]);
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut session, mut uplink) = started_session();
        session.start(&mut uplink);
        assert_eq!(uplink.channel().sent.len(), 1);
    }

    #[test]
    fn test_every_button_combination_forwards_its_code() {
        for event in ButtonEvent::ALL {
            let (mut session, mut uplink) = started_session();
            session.handle_button(event, &mut uplink);

            let sent = sent_pairs(&uplink);
            assert_eq!(sent.len(), 2); // request-text + key-pressed
            assert_eq!(sent[1], (KEY_PRESSED, event.code()));
        }
    }

    #[test]
    fn test_button_on_busy_channel_is_dropped() {
        let (mut session, mut uplink) = started_session();
        uplink.channel_mut().busy = true;
        session.handle_button(
            ButtonEvent::new(Button::Select, Gesture::Single),
            &mut uplink,
        );
        assert_eq!(uplink.channel().sent.len(), 1); // only the startup request
    }

    #[test]
    fn test_request_version_replies_without_touching_display() {
        let (mut session, mut uplink) = started_session();

        let mut buf = [0u8; 32];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        writer.write_uint(KEY_REQUEST_VERSION, 0).unwrap();
        let len = writer.finish();

        let changed = session.handle_inbound(&buf[..len], &mut uplink);
        assert!(!changed);
        assert_eq!(session.display().text(Slot::Middle), LOADING_TEXT);

        let sent = sent_pairs(&uplink);
        assert_eq!(sent.last(), Some(&(KEY_RETURN_VERSION, PROTOCOL_VERSION)));
        assert_eq!(sent.len(), 2);
    }

    #[test]
    fn test_set_text_top_updates_only_top() {
        let (mut session, mut uplink) = started_session();
        let msg = inbound_text(&[(KEY_SET_TEXT_TOP, "Hello")]);

        assert!(session.handle_inbound(&msg, &mut uplink));
        assert_eq!(session.display().text(Slot::Top), "Hello");
        assert_eq!(session.display().text(Slot::Middle), LOADING_TEXT);
        assert_eq!(session.display().text(Slot::Bottom), "");
    }

    #[test]
    fn test_multi_entry_buffer_applies_all_in_order() {
        let (mut session, mut uplink) = started_session();
        let msg = inbound_text(&[
            (KEY_SET_TEXT_TOP, "one"),
            (KEY_SET_TEXT_BOTTOM, "two"),
            (KEY_SET_TEXT_TOP, "three"), // later entry wins
        ]);

        assert!(session.handle_inbound(&msg, &mut uplink));
        assert_eq!(session.display().text(Slot::Top), "three");
        assert_eq!(session.display().text(Slot::Bottom), "two");
    }

    #[test]
    fn test_unknown_key_ignored_and_scan_continues() {
        let (mut session, mut uplink) = started_session();

        let mut buf = [0u8; 64];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        writer.write_uint(0xBEEF, 42).unwrap(); // unrecognized key
        writer.write_str(KEY_SET_TEXT_BOTTOM, "still here").unwrap();
        let len = writer.finish();

        assert!(session.handle_inbound(&buf[..len], &mut uplink));
        assert_eq!(session.display().text(Slot::Bottom), "still here");
        assert_eq!(session.display().text(Slot::Top), "");
        // No reply was produced for the unknown key
        assert_eq!(uplink.channel().sent.len(), 1);
    }

    #[test]
    fn test_delivery_failure_overwrites_middle_slot() {
        let (mut session, mut uplink) = started_session();
        let msg = inbound_text(&[(2, "companion text")]); // KEY_SET_TEXT_MIDDLE
        session.handle_inbound(&msg, &mut uplink);
        assert_eq!(session.display().text(Slot::Middle), "companion text");

        assert!(session.on_delivery(DeliveryOutcome::Failed));
        assert_eq!(session.display().text(Slot::Middle), SEND_FAILED_TEXT);
    }

    #[test]
    fn test_delivery_success_is_noop() {
        let (mut session, _uplink) = started_session();
        assert!(!session.on_delivery(DeliveryOutcome::Sent));
        assert_eq!(session.display().text(Slot::Middle), LOADING_TEXT);
    }

    #[test]
    fn test_uninitialized_session_ignores_events() {
        let mut uplink = Uplink::new(TestChannel::default());
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Uninitialized);

        session.handle_button(ButtonEvent::new(Button::Up, Gesture::Long), &mut uplink);
        let msg = inbound_text(&[(KEY_SET_TEXT_TOP, "early")]);
        assert!(!session.handle_inbound(&msg, &mut uplink));
        assert!(uplink.channel().sent.is_empty());
        assert_eq!(session.display().text(Slot::Top), "");
    }

    #[test]
    fn test_startup_with_busy_channel_still_reaches_running() {
        // "No companion connected": the transmission attempt is made and
        // dropped, the session still runs with the placeholder display.
        let mut uplink = Uplink::new(TestChannel { busy: true, ..Default::default() });
        let mut session = Session::new();
        session.start(&mut uplink);

        assert_eq!(session.state(), SessionState::Running);
        assert!(uplink.channel().sent.is_empty());
        assert_eq!(session.display().text(Slot::Middle), LOADING_TEXT);
    }
}
