//! Companion link transmit task
//!
//! Writes the single in-flight outbound message to the link UART and reports
//! the delivery outcome exactly once. The busy flag is cleared only after
//! the outcome is signaled, so a send racing the report still sees the slot
//! as occupied.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use portable_atomic::Ordering;

use wristlink_core::DeliveryOutcome;
use wristlink_protocol::{encode_packet, OUTBOX_CAPACITY, PACKET_OVERHEAD};

use crate::channels::{OUTBOX, OUTBOX_BUSY, SEND_OUTCOME};

/// Link TX task - transmits submitted messages
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx<'static>) {
    info!("Link TX task started");

    let mut packet = [0u8; OUTBOX_CAPACITY + PACKET_OVERHEAD];

    loop {
        let slot = OUTBOX.wait().await;

        let outcome = match encode_packet(&slot.buf[..slot.len], &mut packet) {
            Ok(len) => match tx.write_all(&packet[..len]).await {
                Ok(()) => {
                    trace!("Sent {} byte command", slot.len);
                    DeliveryOutcome::Sent
                }
                Err(e) => {
                    warn!("Companion link write failed: {:?}", e);
                    DeliveryOutcome::Failed
                }
            },
            Err(e) => {
                warn!("Outbound packet encoding failed: {:?}", e);
                DeliveryOutcome::Failed
            }
        };

        SEND_OUTCOME.signal(outcome);
        OUTBOX_BUSY.store(false, Ordering::Release);
    }
}
