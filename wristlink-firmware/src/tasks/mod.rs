//! Embassy tasks for the watch face

mod buttons;
mod controller;
mod display;
mod link_rx;
mod link_tx;

pub use buttons::button_task;
pub use controller::controller_task;
pub use display::display_task;
pub use link_rx::link_rx_task;
pub use link_tx::link_tx_task;
