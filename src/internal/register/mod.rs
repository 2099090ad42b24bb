//! Control register definitions for the ENC28J60
//!
//! The chip exposes a 32-entry control register window that is multiplexed
//! over four banks. A register is identified by one byte:
//!
//! | Bits | Meaning                                                      |
//! |------|--------------------------------------------------------------|
//! | 7    | MAC/MII register: reads clock out a dummy byte before data   |
//! | 6..5 | Bank (0-3)                                                   |
//! | 4..0 | Address inside the bank, sent in the low bits of the opcode  |
//!
//! Registers at 0x1B-0x1F (EIE, EIR, ESTAT, ECON2, ECON1) are mapped into all
//! four banks. They are still encoded as bank 0 so every access goes through
//! the same bank-selection path.

pub mod eth;
pub mod mac;

/// Mask for the in-bank address bits
pub const ADDR_MASK: u8 = 0x1F;

/// Mask for the bank bits
pub const BANK_MASK: u8 = 0x60;

/// Shift of the bank bits
pub const BANK_SHIFT: u8 = 5;

/// Flag marking MAC/MII registers that need a dummy byte on read
pub const SPRD_MASK: u8 = 0x80;

// =============================================================================
// Banks
// =============================================================================

/// One of the four control register banks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Bank {
    /// Bank 0: buffer pointers
    Bank0 = 0,
    /// Bank 1: hash table, pattern match, receive filter, packet count
    Bank1 = 1,
    /// Bank 2: MAC and MII control
    Bank2 = 2,
    /// Bank 3: MAC address, MII status, revision
    Bank3 = 3,
}

impl Bank {
    /// Decode a bank from the encoded register byte
    pub const fn from_register_bits(bits: u8) -> Self {
        match (bits & BANK_MASK) >> BANK_SHIFT {
            0 => Bank::Bank0,
            1 => Bank::Bank1,
            2 => Bank::Bank2,
            _ => Bank::Bank3,
        }
    }

    /// Value of the ECON1.BSEL1:BSEL0 field selecting this bank
    pub const fn select_bits(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// Opcodes
// =============================================================================

/// SPI instruction opcodes (upper three bits of the first byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Read Control Register (RCR)
    ReadControl = 0x00,
    /// Read Buffer Memory (RBM)
    ReadBuffer = 0x20,
    /// Write Control Register (WCR)
    WriteControl = 0x40,
    /// Write Buffer Memory (WBM)
    WriteBuffer = 0x60,
    /// Bit Field Set (BFS)
    BitFieldSet = 0x80,
    /// Bit Field Clear (BFC)
    BitFieldClear = 0xA0,
    /// System Reset Command (SRC)
    SoftReset = 0xE0,
}

/// Constant argument used by the buffer memory opcodes
pub const BUFFER_ARGUMENT: u8 = 0x1A;

/// Constant argument used by the soft reset opcode
pub const RESET_ARGUMENT: u8 = 0x1F;

impl Opcode {
    /// Combine the opcode with a 5-bit argument into the instruction byte
    pub const fn with_argument(self, argument: u8) -> u8 {
        self as u8 | (argument & ADDR_MASK)
    }

    /// Decode the opcode from an instruction byte
    #[cfg(test)]
    pub const fn from_instruction(byte: u8) -> Self {
        match byte & 0xE0 {
            0x00 => Opcode::ReadControl,
            0x20 => Opcode::ReadBuffer,
            0x40 => Opcode::WriteControl,
            0x60 => Opcode::WriteBuffer,
            0x80 => Opcode::BitFieldSet,
            0xA0 => Opcode::BitFieldClear,
            _ => Opcode::SoftReset,
        }
    }
}

// =============================================================================
// Register
// =============================================================================

/// An encoded control register address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register(u8);

impl Register {
    /// ETH register in the given bank
    pub const fn eth(bank: Bank, address: u8) -> Self {
        Self(((bank as u8) << BANK_SHIFT) | (address & ADDR_MASK))
    }

    /// MAC or MII register in the given bank (needs a dummy read byte)
    pub const fn mac(bank: Bank, address: u8) -> Self {
        Self(SPRD_MASK | ((bank as u8) << BANK_SHIFT) | (address & ADDR_MASK))
    }

    /// Raw encoded byte
    #[cfg(test)]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Address inside the bank
    pub const fn address(self) -> u8 {
        self.0 & ADDR_MASK
    }

    /// Bank holding this register
    pub const fn bank(self) -> Bank {
        Bank::from_register_bits(self.0)
    }

    /// Whether reads return a dummy byte before the data
    pub const fn is_mac_mii(self) -> bool {
        self.0 & SPRD_MASK != 0
    }
}

/// A little-endian register pair (low byte first, same bank)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterPair {
    /// Low byte register
    pub low: Register,
    /// High byte register
    pub high: Register,
}

impl RegisterPair {
    /// Pair two registers; both must live in the same bank
    pub const fn new(low: Register, high: Register) -> Self {
        assert!(
            low.bank() as u8 == high.bank() as u8,
            "The banks of low and high registers must be the same"
        );
        Self { low, high }
    }
}
