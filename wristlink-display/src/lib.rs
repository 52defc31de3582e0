//! Display abstraction for the Wristlink watch face
//!
//! This crate provides:
//! - `DisplayBackend` trait for concrete panels (OLED, emulator, tests)
//! - The reference three-region layout of the watch face
//! - Overflow fitting (truncate with a trailing ellipsis indicator)
//!
//! Backends render three vertically stacked text regions. The reference
//! geometry in [`layout`] matches the original 144x168 device; a backend
//! with a different panel maps the regions onto its own coordinates.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod layout;
pub mod text;

pub use backend::{DisplayBackend, DisplayError};
pub use layout::{Region, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use text::fit_ellipsis;
