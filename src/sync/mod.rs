//! Synchronization Support
//!
//! Interrupt-safe access to a driver shared between the main loop and an
//! interrupt handler (for example one wired to the ENC28J60 INT pin):
//!
//! - **Primitives** (`primitives`): [`CriticalSectionCell`], ISR-safe
//!   interior mutability
//! - **Shared Wrapper** (`shared`): [`SharedEnc28j60`], a critical-section
//!   protected slot holding the whole driver
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module. The critical-section
//!   implementation itself comes from the HAL or runtime crate.
//!
//! # Example
//!
//! ```ignore
//! use enc28j60_spi::sync::SharedEnc28j60;
//!
//! static ETH: SharedEnc28j60<Transport, Delay> = SharedEnc28j60::new();
//!
//! fn main() {
//!     ETH.install(Enc28j60::new(transport, delay, Enc28j60Config::new()));
//!     ETH.with(|eth| eth.init().unwrap());
//! }
//! ```

mod primitives;

pub use primitives::CriticalSectionCell;

mod shared;

pub use shared::SharedEnc28j60;
