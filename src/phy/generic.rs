//! PHY Register Access Trait
//!
//! The ENC28J60's PHY is integrated and has no MDIO address, so access is a
//! plain register-number/value interface.

use crate::driver::config::Duplex;
use crate::error::Result;

// =============================================================================
// Link Status
// =============================================================================

/// Link state reported by PHSTAT2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link is up
    pub up: bool,
    /// Duplex mode the PHY is configured for
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(up: bool, duplex: Duplex) -> Self {
        Self { up, duplex }
    }

    /// Link down, half duplex
    pub const fn down() -> Self {
        Self::new(false, Duplex::Half)
    }
}

// =============================================================================
// PHY Access Trait
// =============================================================================

/// Trait for PHY register access
///
/// Implemented by [`Enc28j60`](crate::Enc28j60) through its MII bridge, and
/// by mocks in tests.
pub trait PhyAccess {
    /// Read a PHY register (0x00..=0x1F)
    fn read_phy(&mut self, reg: u8) -> Result<u16>;

    /// Write a PHY register (0x00..=0x1F)
    fn write_phy(&mut self, reg: u8, value: u16) -> Result<()>;

    /// Read-modify-write: clear `clear`, then set `set`
    fn modify_phy(&mut self, reg: u8, clear: u16, set: u16) -> Result<()> {
        let value = self.read_phy(reg)?;
        self.write_phy(reg, (value & !clear) | set)
    }
}

impl<P: PhyAccess + ?Sized> PhyAccess for &mut P {
    fn read_phy(&mut self, reg: u8) -> Result<u16> {
        (**self).read_phy(reg)
    }

    fn write_phy(&mut self, reg: u8, value: u16) -> Result<()> {
        (**self).write_phy(reg, value)
    }
}
