//! Typed SPI transactions
//!
//! Each ENC28J60 instruction is one chip-select frame: an opcode byte, then
//! zero or more argument/data bytes. [`Transaction`] names each instruction
//! and knows how to reduce itself to that byte sequence on a [`Transport`].
//! Bank selection is not handled here; callers select the bank first.

use crate::error::IoResult;
use crate::hal::transport::Transport;
use crate::internal::register::{BUFFER_ARGUMENT, Opcode, RESET_ARGUMENT, Register};

/// One chip-select framed instruction
#[derive(Debug)]
pub enum Transaction<'a> {
    /// RCR: read a control register
    ReadControl(Register),
    /// WCR: write a control register
    WriteControl(Register, u8),
    /// BFS: OR a mask into an ETH register
    BitFieldSet(Register, u8),
    /// BFC: clear a mask in an ETH register
    BitFieldClear(Register, u8),
    /// RBM: read from buffer memory at ERDPT
    ReadBuffer(&'a mut [u8]),
    /// WBM: write to buffer memory at EWRPT
    WriteBuffer(&'a [u8]),
    /// SRC: system soft reset
    SoftReset,
}

impl Transaction<'_> {
    /// Instruction byte that opens the frame
    pub fn header(&self) -> u8 {
        match self {
            Transaction::ReadControl(reg) => Opcode::ReadControl.with_argument(reg.address()),
            Transaction::WriteControl(reg, _) => Opcode::WriteControl.with_argument(reg.address()),
            Transaction::BitFieldSet(reg, _) => Opcode::BitFieldSet.with_argument(reg.address()),
            Transaction::BitFieldClear(reg, _) => {
                Opcode::BitFieldClear.with_argument(reg.address())
            }
            Transaction::ReadBuffer(_) => Opcode::ReadBuffer.with_argument(BUFFER_ARGUMENT),
            Transaction::WriteBuffer(_) => Opcode::WriteBuffer.with_argument(BUFFER_ARGUMENT),
            Transaction::SoftReset => Opcode::SoftReset.with_argument(RESET_ARGUMENT),
        }
    }

    /// Run the transaction inside its own chip-select frame
    ///
    /// Returns the register value for [`Transaction::ReadControl`] and 0
    /// otherwise. Chip select is released even when the body fails.
    pub fn execute<T: Transport + ?Sized>(self, transport: &mut T) -> IoResult<u8> {
        transport.select()?;
        let result = self.body(transport);
        let released = transport.deselect();
        let value = result?;
        released?;
        Ok(value)
    }

    fn body<T: Transport + ?Sized>(self, transport: &mut T) -> IoResult<u8> {
        transport.exchange(self.header())?;
        match self {
            Transaction::ReadControl(reg) => {
                if reg.is_mac_mii() {
                    transport.exchange(0)?;
                }
                transport.exchange(0)
            }
            Transaction::WriteControl(_, value)
            | Transaction::BitFieldSet(_, value)
            | Transaction::BitFieldClear(_, value) => {
                transport.exchange(value)?;
                Ok(0)
            }
            Transaction::ReadBuffer(buf) => {
                transport.read_into(buf)?;
                Ok(0)
            }
            Transaction::WriteBuffer(data) => {
                transport.write_from(data)?;
                Ok(0)
            }
            Transaction::SoftReset => Ok(0),
        }
    }
}
