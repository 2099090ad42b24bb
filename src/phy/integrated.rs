//! Integrated 10BASE-T PHY
//!
//! The ENC28J60 PHY supports 10 Mbit/s only and has no auto-negotiation:
//! duplex is forced through PHCON1.PDPXMD and must match the link partner.

use super::generic::{LinkStatus, PhyAccess};
use crate::driver::config::Duplex;
use crate::error::Result;
use crate::internal::constants::{PHY_ID, PHY_ID_MASK};
use crate::internal::phy_regs::{addr, phcon1, phcon2, phlcon, phstat1, phstat2};

// =============================================================================
// LED Configuration
// =============================================================================

/// Function of one PHY LED output (PHLCON LACFG/LBCFG field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedMode {
    /// Transmit activity
    Transmit = 0x1,
    /// Receive activity
    Receive = 0x2,
    /// Collision activity
    Collision = 0x3,
    /// Link status
    Link = 0x4,
    /// Duplex status
    Duplex = 0x5,
    /// Transmit and receive activity
    TransmitReceive = 0x7,
    /// On
    On = 0x8,
    /// Off
    Off = 0x9,
    /// Blink fast
    BlinkFast = 0xA,
    /// Blink slow
    BlinkSlow = 0xB,
    /// Link status, receive activity
    LinkReceive = 0xC,
    /// Link status, transmit and receive activity
    LinkTransmitReceive = 0xD,
    /// Duplex status, collision activity
    DuplexCollision = 0xE,
}

impl LedMode {
    /// Build a PHLCON value with stretched pulses for LEDA and LEDB
    pub const fn phlcon(led_a: LedMode, led_b: LedMode) -> u16 {
        phlcon::RESERVED
            | ((led_a as u16) << phlcon::LACFG_SHIFT)
            | ((led_b as u16) << phlcon::LBCFG_SHIFT)
            | phlcon::STRCH
    }
}

// =============================================================================
// Integrated PHY Driver
// =============================================================================

/// Helpers for the ENC28J60's integrated PHY
///
/// Stateless; every call goes through the given [`PhyAccess`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegratedPhy;

impl IntegratedPhy {
    /// Create the PHY helper
    pub const fn new() -> Self {
        Self
    }

    /// Read the 32-bit identifier `(PHID1 << 16) | PHID2`
    pub fn phy_id<P: PhyAccess>(&self, phy: &mut P) -> Result<u32> {
        let id1 = phy.read_phy(addr::PHID1)?;
        let id2 = phy.read_phy(addr::PHID2)?;
        Ok(((id1 as u32) << 16) | id2 as u32)
    }

    /// Check the identifier against the ENC28J60's
    pub fn verify_id<P: PhyAccess>(&self, phy: &mut P) -> Result<bool> {
        Ok(self.phy_id(phy)? & PHY_ID_MASK == PHY_ID)
    }

    /// PHY silicon revision (low nibble of PHID2)
    pub fn revision<P: PhyAccess>(&self, phy: &mut P) -> Result<u8> {
        Ok((phy.read_phy(addr::PHID2)? & 0x000F) as u8)
    }

    /// Current link state (non-latching)
    pub fn link_status<P: PhyAccess>(&self, phy: &mut P) -> Result<LinkStatus> {
        let status = phy.read_phy(addr::PHSTAT2)?;
        let duplex = if status & phstat2::DPXSTAT != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };
        Ok(LinkStatus::new(status & phstat2::LSTAT != 0, duplex))
    }

    /// Whether the link is up
    pub fn is_link_up<P: PhyAccess>(&self, phy: &mut P) -> Result<bool> {
        Ok(self.link_status(phy)?.up)
    }

    /// Whether the link went down at any point since PHSTAT1 was last read
    pub fn link_dropped<P: PhyAccess>(&self, phy: &mut P) -> Result<bool> {
        Ok(phy.read_phy(addr::PHSTAT1)? & phstat1::LLSTAT == 0)
    }

    /// Force the PHY duplex mode
    ///
    /// Half duplex also disables the PHY's half-duplex loopback so the MAC
    /// does not receive its own frames. The MAC side (MACON3.FULDPX) is set
    /// by [`Enc28j60::init`](crate::Enc28j60::init).
    pub fn configure_duplex<P: PhyAccess>(&self, phy: &mut P, duplex: Duplex) -> Result<()> {
        match duplex {
            Duplex::Full => phy.modify_phy(addr::PHCON1, 0, phcon1::PDPXMD),
            Duplex::Half => {
                phy.modify_phy(addr::PHCON1, phcon1::PDPXMD, 0)?;
                phy.write_phy(addr::PHCON2, phcon2::HDLDIS)
            }
        }
    }

    /// Program the LED outputs
    pub fn set_led_config<P: PhyAccess>(&self, phy: &mut P, phlcon_value: u16) -> Result<()> {
        phy.write_phy(addr::PHLCON, phlcon_value)
    }
}
