//! PHY register access through the MII management bridge
//!
//! The integrated PHY's 16-bit registers are reached indirectly: the address
//! goes into MIREGADR, then either MICMD.MIIRD starts a read into MIRD or a
//! write to MIWRH starts a write of MIWR. MISTAT.BUSY is set while the
//! bridge is working (about 10.24 us per operation).

use embedded_hal::delay::DelayNs;

use super::enc28j60::Enc28j60;
use crate::error::{ConfigError, ConfigResult, IoResult, Result};
use crate::hal::transport::Transport;
use crate::internal::constants::MAX_PHY_REG;
use crate::internal::register::mac::{
    MICMD, MICMD_MIIRD, MIRDH, MIRDL, MIREGADR, MISTAT, MISTAT_BUSY, MIWRH, MIWRL,
};
use crate::phy::{IntegratedPhy, LinkStatus, PhyAccess};

impl<T, D> Enc28j60<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Read a PHY register
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPhyRegister`] if `reg` is above 0x1F
    /// - [`IoError::Timeout`](crate::IoError::Timeout) if the bridge stays busy
    pub fn phy_read(&mut self, reg: u8) -> Result<u16> {
        check_phy_register(reg)?;

        self.write_control(MIREGADR, reg)?;
        self.write_control(MICMD, MICMD_MIIRD)?;
        let finished = self.wait_mii_idle();
        // MIIRD must be cleared even if the read never finished
        self.write_control(MICMD, 0)?;
        finished?;

        let low = self.read_control(MIRDL)?;
        let high = self.read_control(MIRDH)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Write a PHY register
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPhyRegister`] if `reg` is above 0x1F
    /// - [`IoError::Timeout`](crate::IoError::Timeout) if the bridge stays busy
    pub fn phy_write(&mut self, reg: u8, value: u16) -> Result<()> {
        check_phy_register(reg)?;

        let [low, high] = value.to_le_bytes();
        self.write_control(MIREGADR, reg)?;
        self.write_control(MIWRL, low)?;
        self.write_control(MIWRH, high)?;
        Ok(self.wait_mii_idle()?)
    }

    /// Link state from the integrated PHY
    pub fn link_status(&mut self) -> Result<LinkStatus> {
        IntegratedPhy::new().link_status(self)
    }

    /// Whether the PHY reports link up
    pub fn is_link_up(&mut self) -> Result<bool> {
        Ok(self.link_status()?.up)
    }

    /// PHY identifier `(PHID1 << 16) | PHID2`
    pub fn phy_id(&mut self) -> Result<u32> {
        IntegratedPhy::new().phy_id(self)
    }

    /// Reprogram the LED outputs (PHLCON) and remember the value for re-init
    pub fn set_led_config(&mut self, phlcon: u16) -> Result<()> {
        IntegratedPhy::new().set_led_config(self, phlcon)?;
        self.config.led_config = Some(phlcon);
        Ok(())
    }

    fn wait_mii_idle(&mut self) -> IoResult<()> {
        let timeout = self.config.mii_timeout_us;
        self.wait_until(timeout, |dev| Ok(dev.read_control(MISTAT)? & MISTAT_BUSY == 0))
            .inspect_err(|_e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("MII bridge busy for more than {=u32} us", timeout);
            })
    }
}

const fn check_phy_register(reg: u8) -> ConfigResult<()> {
    if reg > MAX_PHY_REG {
        Err(ConfigError::InvalidPhyRegister)
    } else {
        Ok(())
    }
}

impl<T, D> PhyAccess for Enc28j60<T, D>
where
    T: Transport,
    D: DelayNs,
{
    fn read_phy(&mut self, reg: u8) -> Result<u16> {
        self.phy_read(reg)
    }

    fn write_phy(&mut self, reg: u8, value: u16) -> Result<()> {
        self.phy_write(reg, value)
    }
}
