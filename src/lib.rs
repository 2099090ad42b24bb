//! ENC28J60 Ethernet Driver
//!
//! A `no_std`, `no_alloc` Rust driver for the Microchip ENC28J60, a
//! stand-alone 10BASE-T Ethernet controller with an SPI interface.
//!
//! The chip carries the MAC, the PHY and 8 KiB of packet buffer RAM. The
//! host talks to it over SPI through seven instructions: read/write control
//! register, read/write buffer memory, bit field set/clear and soft reset.
//!
//! # Architecture
//!
//! The driver is organized into layers:
//!
//! 1. **Transport Layer** ([`hal`]): chip-select framed byte exchange over an
//!    `embedded-hal` SPI bus or bit-banged GPIO
//! 2. **Register/Buffer Layer** (internal): banked control registers with a
//!    cached bank selection, buffer memory streaming, MII bridge to the PHY
//! 3. **Driver Layer** ([`driver`]): bring-up, frame transmit and polled
//!    frame receive through the on-chip receive ring
//! 4. **PHY Layer** ([`phy`]): link status, identification, LED setup
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types and driver logging
//! - `smoltcp`: Enable smoltcp network stack integration
//! - `critical-section`: Enable the ISR-safe `SharedEnc28j60` wrapper
//!
//! # Example
//!
//! ```ignore
//! use enc28j60_spi::{Enc28j60, Enc28j60Config, SpiTransport};
//!
//! // SPI mode 0, up to 20 MHz, with a dedicated chip-select pin
//! let transport = SpiTransport::new(spi_bus, cs_pin);
//!
//! let config = Enc28j60Config::new()
//!     .with_mac_address([0x02, 0x00, 0x00, 0x12, 0x34, 0x56]);
//!
//! let mut eth = Enc28j60::new(transport, delay, config);
//! eth.init()?;
//!
//! eth.send(&frame)?;
//!
//! let mut buf = [0u8; 1518];
//! loop {
//!     let len = eth.poll(&mut buf)?;
//!     if len > 0 {
//!         handle(&buf[..len]);
//!     }
//! }
//! ```
//!
//! # Memory Layout
//!
//! With the default configuration the receive ring occupies 0x0000..=0x19FE
//! and the transmit region starts at 0x19FF, leaving room for one
//! maximum-size frame plus its control byte and status vector.

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; the same set is mirrored in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "smoltcp")]
#[cfg_attr(docsrs, doc(cfg(feature = "smoltcp")))]
pub mod integration;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{Duplex, Enc28j60Config, State};
pub use driver::diag::RegisterDump;
pub use driver::enc28j60::Enc28j60;
pub use driver::packet::{ReceivedPacket, RxHeader, RxStatus, TxStatus};
pub use error::{
    BufferError, BufferResult, ConfigError, ConfigResult, Error, IoError, IoResult, Result,
};
pub use hal::transport::{BitBangTransport, SpiTransport, Transport};

// Re-export PHY types
pub use phy::{IntegratedPhy, LedMode, LinkStatus, PhyAccess};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedEnc28j60;

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types and integration points.
pub mod constants {
    pub use crate::internal::constants::{
        // Buffer memory
        BUFFER_END,
        BUFFER_SIZE,
        // Timing
        CLOCK_READY_TIMEOUT_US,
        // Frame sizes
        CRC_SIZE,
        // MAC address
        DEFAULT_MAC_ADDR,
        DEFAULT_RX_END,
        DEFAULT_RX_START,
        DEFAULT_TX_START,
        ETH_HEADER_SIZE,
        MAC_ADDR_LEN,
        MAX_FRAME_LEN,
        MII_TIMEOUT_US,
        MIN_FRAME_LEN,
        MTU,
        // PHY
        PHY_ID,
        PHY_ID_MASK,
        TX_TIMEOUT_US,
    };
}
