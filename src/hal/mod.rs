//! Hardware Abstraction Layer
//!
//! The driver only needs a byte-exchange bus with a chip-select line. This
//! module defines that seam and provides implementations over
//! `embedded-hal` traits.
//!
//! # Modules
//!
//! - [`transport`]: The [`Transport`] trait, hardware SPI and bit-banged GPIO
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod transport;

// Re-export commonly used types
pub use transport::{BitBangTransport, SpiTransport, Transport};
