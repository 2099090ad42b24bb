//! Register and buffer memory access
//!
//! Every control register access goes through [`Enc28j60::select_bank`],
//! which keeps the driver's bank shadow equal to the bank selected on the
//! chip. A bank switch and the access that needed it are separate
//! chip-select frames.

use embedded_hal::delay::DelayNs;

use super::enc28j60::Enc28j60;
use crate::error::IoResult;
use crate::hal::transport::Transport;
use crate::internal::register::eth::{ECON1, ECON1_BSEL_MASK};
use crate::internal::register::{Bank, Register, RegisterPair};
use crate::internal::request::Transaction;

impl<T, D> Enc28j60<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Select the bank holding `reg` unless it is already selected
    ///
    /// Uses BFC then BFS on ECON1 so the other ECON1 bits are preserved.
    pub(crate) fn select_bank(&mut self, reg: Register) -> IoResult<()> {
        let bank = reg.bank();
        if self.bank == Some(bank) {
            return Ok(());
        }

        // Unknown until both halves of the switch have gone through
        self.bank = None;
        Transaction::BitFieldClear(ECON1, ECON1_BSEL_MASK).execute(&mut self.transport)?;
        Transaction::BitFieldSet(ECON1, bank.select_bits()).execute(&mut self.transport)?;
        self.bank = Some(bank);
        Ok(())
    }

    /// Read a control register
    pub(crate) fn read_control(&mut self, reg: Register) -> IoResult<u8> {
        self.select_bank(reg)?;
        Transaction::ReadControl(reg).execute(&mut self.transport)
    }

    /// Write a control register
    pub(crate) fn write_control(&mut self, reg: Register, value: u8) -> IoResult<()> {
        self.select_bank(reg)?;
        Transaction::WriteControl(reg, value).execute(&mut self.transport)?;
        Ok(())
    }

    /// Set bits in an ETH register
    pub(crate) fn bit_field_set(&mut self, reg: Register, mask: u8) -> IoResult<()> {
        debug_assert!(!reg.is_mac_mii(), "BFS has no effect on MAC/MII registers");
        self.select_bank(reg)?;
        Transaction::BitFieldSet(reg, mask).execute(&mut self.transport)?;
        Ok(())
    }

    /// Clear bits in an ETH register
    pub(crate) fn bit_field_clear(&mut self, reg: Register, mask: u8) -> IoResult<()> {
        debug_assert!(!reg.is_mac_mii(), "BFC has no effect on MAC/MII registers");
        self.select_bank(reg)?;
        Transaction::BitFieldClear(reg, mask).execute(&mut self.transport)?;
        Ok(())
    }

    /// Read a 16-bit register pair, low byte first
    pub(crate) fn read_pair(&mut self, pair: RegisterPair) -> IoResult<u16> {
        let low = self.read_control(pair.low)?;
        let high = self.read_control(pair.high)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Write a 16-bit register pair, low byte first
    ///
    /// Pointer registers latch on the high byte write.
    pub(crate) fn write_pair(&mut self, pair: RegisterPair, value: u16) -> IoResult<()> {
        let [low, high] = value.to_le_bytes();
        self.write_control(pair.low, low)?;
        self.write_control(pair.high, high)
    }

    /// Read buffer memory at ERDPT
    pub(crate) fn read_buffer(&mut self, buf: &mut [u8]) -> IoResult<()> {
        Transaction::ReadBuffer(buf).execute(&mut self.transport)?;
        Ok(())
    }

    /// Write buffer memory at EWRPT
    pub(crate) fn write_buffer(&mut self, data: &[u8]) -> IoResult<()> {
        Transaction::WriteBuffer(data).execute(&mut self.transport)?;
        Ok(())
    }

    /// Issue the soft reset command
    ///
    /// The reset returns ECON1 to its default, which selects bank 0.
    pub(crate) fn soft_reset(&mut self) -> IoResult<()> {
        self.bank = None;
        Transaction::SoftReset.execute(&mut self.transport)?;
        self.bank = Some(Bank::Bank0);
        Ok(())
    }
}
