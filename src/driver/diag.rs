//! Register dump for bring-up and debugging

use core::fmt;

use embedded_hal::delay::DelayNs;

use super::enc28j60::Enc28j60;
use crate::error::{IoResult, Result};
use crate::hal::transport::Transport;
use crate::internal::register::eth::{
    ECON1, ECON2, EIE, EIR, EPKTCNT, EREVID, ERXFCON, ERXND, ERXRDPT, ERXST, ERXWRPT, ESTAT,
    ETXND, ETXST,
};
use crate::internal::register::mac::{
    MACLCON1, MACLCON2, MACON1, MACON2, MACON3, MACON4, MAMXFL, MAPHSUP,
};

/// Snapshot of the registers most useful when bringing up a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub struct RegisterDump {
    pub revision: u8,
    pub econ1: u8,
    pub econ2: u8,
    pub estat: u8,
    pub eir: u8,
    pub eie: u8,
    pub macon1: u8,
    pub macon2: u8,
    pub macon3: u8,
    pub macon4: u8,
    pub mac_address: [u8; 6],
    pub erxst: u16,
    pub erxnd: u16,
    pub erxwrpt: u16,
    pub erxrdpt: u16,
    pub erxfcon: u8,
    pub epktcnt: u8,
    pub mamxfl: u16,
    pub etxst: u16,
    pub etxnd: u16,
    pub maclcon1: u8,
    pub maclcon2: u8,
    pub maphsup: u8,
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RevID: 0x{:x}\r\n", self.revision)?;

        f.write_str("Cntrl: ECON1 ECON2 ESTAT  EIR  EIE\r\n")?;
        write!(
            f,
            "         {:02X}    {:02X}    {:02X}    {:02X}   {:02X}\r\n",
            self.econ1, self.econ2, self.estat, self.eir, self.eie
        )?;

        f.write_str("MAC  : MACON1  MACON2  MACON3  MACON4  MAC-Address\r\n")?;
        write!(
            f,
            "        0x{:02X}    0x{:02X}    0x{:02X}    0x{:02X}   ",
            self.macon1, self.macon2, self.macon3, self.macon4
        )?;
        for byte in self.mac_address {
            write!(f, "{byte:02X}")?;
        }
        f.write_str("\r\n")?;

        f.write_str("Rx   : ERXST  ERXND  ERXWRPT ERXRDPT ERXFCON EPKTCNT MAMXFL\r\n")?;
        write!(
            f,
            "       0x{:04X} 0x{:04X} 0x{:04X}  0x{:04X}   0x{:02X}    0x{:02X}  0x{:04X}\r\n",
            self.erxst,
            self.erxnd,
            self.erxwrpt,
            self.erxrdpt,
            self.erxfcon,
            self.epktcnt,
            self.mamxfl
        )?;

        f.write_str("Tx   : ETXST  ETXND  MACLCON1 MACLCON2 MAPHSUP\r\n")?;
        write!(
            f,
            "       0x{:04X} 0x{:04X}   0x{:02X}     0x{:02X}     0x{:02X}\r\n",
            self.etxst, self.etxnd, self.maclcon1, self.maclcon2, self.maphsup
        )
    }
}

impl<T, D> Enc28j60<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Read the diagnostic register set
    pub fn register_snapshot(&mut self) -> Result<RegisterDump> {
        Ok(self.read_snapshot()?)
    }

    /// Write a tabular register dump to `sink`
    ///
    /// # Errors
    ///
    /// - [`IoError::Format`](crate::IoError::Format) if the sink rejects output
    /// - [`IoError::Bus`](crate::IoError::Bus) on transport failure
    pub fn reg_dump<W: fmt::Write>(&mut self, sink: &mut W) -> Result<()> {
        let dump = self.read_snapshot()?;
        write!(sink, "{dump}").map_err(crate::error::IoError::from)?;
        Ok(())
    }

    fn read_snapshot(&mut self) -> IoResult<RegisterDump> {
        Ok(RegisterDump {
            revision: self.read_control(EREVID)?,
            econ1: self.read_control(ECON1)?,
            econ2: self.read_control(ECON2)?,
            estat: self.read_control(ESTAT)?,
            eir: self.read_control(EIR)?,
            eie: self.read_control(EIE)?,
            macon1: self.read_control(MACON1)?,
            macon2: self.read_control(MACON2)?,
            macon3: self.read_control(MACON3)?,
            macon4: self.read_control(MACON4)?,
            mac_address: self.read_mac_registers()?,
            erxst: self.read_pair(ERXST)?,
            erxnd: self.read_pair(ERXND)?,
            erxwrpt: self.read_pair(ERXWRPT)?,
            erxrdpt: self.read_pair(ERXRDPT)?,
            erxfcon: self.read_control(ERXFCON)?,
            epktcnt: self.read_control(EPKTCNT)?,
            mamxfl: self.read_pair(MAMXFL)?,
            etxst: self.read_pair(ETXST)?,
            etxnd: self.read_pair(ETXND)?,
            maclcon1: self.read_control(MACLCON1)?,
            maclcon2: self.read_control(MACLCON2)?,
            maphsup: self.read_control(MAPHSUP)?,
        })
    }
}
