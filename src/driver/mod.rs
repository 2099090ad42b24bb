//! Core driver components for the ENC28J60.
//!
//! This module contains the building blocks for configuring and operating
//! the controller:
//!
//! - [`config`] - Configuration types and builder patterns
//! - [`enc28j60`] - The main driver: init, transmit, receive
//! - [`packet`] - Receive headers and transmit status vectors
//! - [`diag`] - Register snapshot and dump
//!
//! Register and buffer access (`access`) and the MII bridge (`mii`) extend
//! [`Enc28j60`] from their own files.
//!
//! # Example
//!
//! ```ignore
//! use enc28j60_spi::driver::{Enc28j60Config, Duplex};
//!
//! let config = Enc28j60Config::new()
//!     .with_mac_address([0x02, 0x00, 0x00, 0x00, 0x00, 0x01])
//!     .with_duplex(Duplex::Full);
//! ```

// Submodules
mod access;
pub mod config;
pub mod diag;
pub mod enc28j60;
mod mii;
pub mod packet;

// Re-exports for convenience
pub use config::{Duplex, Enc28j60Config, State};
pub use diag::RegisterDump;
pub use enc28j60::Enc28j60;
pub use packet::{ReceivedPacket, RxHeader, RxStatus, TxStatus};
