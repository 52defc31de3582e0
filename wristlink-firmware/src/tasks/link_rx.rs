//! Companion link receive task
//!
//! Reads bytes from the link UART, reassembles packets, and forwards the
//! dictionary payloads to the controller. A corrupt or oversize packet is
//! logged and dropped - the protocol has no retransmission mechanism.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use wristlink_protocol::PacketParser;

use crate::channels::INBOUND;

/// Chunk size for UART reads
const RX_BUF_SIZE: usize = 64;

/// Link RX task - receives and reassembles companion messages
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx<'static>) {
    info!("Link RX task started");

    let mut parser = PacketParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(payload)) => {
                            if INBOUND.try_send(payload).is_err() {
                                warn!("Inbound queue full, message dropped");
                            }
                        }
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Inbound message dropped: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
