//! Integrated Ethernet PHY
//!
//! The ENC28J60 carries its own 10BASE-T PHY behind an MII management
//! bridge. This module provides a register access trait and helpers for
//! link status, identification, duplex and LED configuration.
//!
//! # Architecture
//!
//! The helpers only talk to the PHY through [`PhyAccess`], so they can be
//! tested against a mock register file without a MAC.
//!
//! # Example
//!
//! ```ignore
//! use enc28j60_spi::phy::{IntegratedPhy, LedMode};
//!
//! let phy = IntegratedPhy::new();
//! assert!(phy.verify_id(&mut eth)?);
//! phy.set_led_config(&mut eth, LedMode::phlcon(LedMode::Link, LedMode::TransmitReceive))?;
//!
//! if phy.is_link_up(&mut eth)? {
//!     // ...
//! }
//! ```

pub mod generic;
pub mod integrated;

pub use generic::{LinkStatus, PhyAccess};
pub use integrated::{IntegratedPhy, LedMode};

/// PHY register addresses and bit definitions
pub mod regs {
    pub use crate::internal::phy_regs::{
        addr, phcon1, phcon2, phie, phlcon, phstat1, phstat2,
    };
}
