//! Wristlink - three-line remote display for the wrist
//!
//! Main firmware binary for RP2040-based wrist hardware. The watch face
//! shows three text slots driven by the paired companion application and
//! forwards button presses back to it over the serial link.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use wristlink_protocol::Button;

mod channels;
mod display;
mod link;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever).
// RX is sized for the 512-byte inbox plus framing; TX for single commands.
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 1024]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Wristlink firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Companion link: Bluetooth serial module on UART0
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 1024]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("Companion link UART initialized");

    // Watch-face OLED on I2C0 (SDA=GPIO4, SCL=GPIO5)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let oled = display::OledBackend::new(i2c);

    info!("OLED initialized");

    // Buttons to ground, pressed = low
    let up = Input::new(p.PIN_10, Pull::Up);
    let select = Input::new(p.PIN_11, Pull::Up);
    let down = Input::new(p.PIN_12, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner.spawn(tasks::link_tx_task(tx)).unwrap();
    spawner.spawn(tasks::display_task(oled)).unwrap();
    spawner.spawn(tasks::button_task(up, Button::Up)).unwrap();
    spawner.spawn(tasks::button_task(select, Button::Select)).unwrap();
    spawner.spawn(tasks::button_task(down, Button::Down)).unwrap();
    spawner.spawn(tasks::controller_task()).unwrap();

    info!("All tasks spawned, watch face running");
}
