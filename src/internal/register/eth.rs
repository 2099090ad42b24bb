//! ETH Register Definitions
//!
//! Buffer pointers, receive filter, packet counter and the common control
//! registers. ETH registers support the bit field set/clear opcodes.

// Complete register map; not every register is used by the driver
#![allow(dead_code)]

use super::{Bank, Register, RegisterPair};

// =============================================================================
// Bank 0: Buffer Pointers
// =============================================================================

/// Read pointer low byte
pub const ERDPTL: Register = Register::eth(Bank::Bank0, 0x00);
/// Read pointer high byte
pub const ERDPTH: Register = Register::eth(Bank::Bank0, 0x01);
/// Write pointer low byte
pub const EWRPTL: Register = Register::eth(Bank::Bank0, 0x02);
/// Write pointer high byte
pub const EWRPTH: Register = Register::eth(Bank::Bank0, 0x03);
/// Transmit start low byte
pub const ETXSTL: Register = Register::eth(Bank::Bank0, 0x04);
/// Transmit start high byte
pub const ETXSTH: Register = Register::eth(Bank::Bank0, 0x05);
/// Transmit end low byte
pub const ETXNDL: Register = Register::eth(Bank::Bank0, 0x06);
/// Transmit end high byte
pub const ETXNDH: Register = Register::eth(Bank::Bank0, 0x07);
/// Receive start low byte
pub const ERXSTL: Register = Register::eth(Bank::Bank0, 0x08);
/// Receive start high byte
pub const ERXSTH: Register = Register::eth(Bank::Bank0, 0x09);
/// Receive end low byte
pub const ERXNDL: Register = Register::eth(Bank::Bank0, 0x0A);
/// Receive end high byte
pub const ERXNDH: Register = Register::eth(Bank::Bank0, 0x0B);
/// Receive read pointer low byte
pub const ERXRDPTL: Register = Register::eth(Bank::Bank0, 0x0C);
/// Receive read pointer high byte
pub const ERXRDPTH: Register = Register::eth(Bank::Bank0, 0x0D);
/// Receive write pointer low byte (hardware owned)
pub const ERXWRPTL: Register = Register::eth(Bank::Bank0, 0x0E);
/// Receive write pointer high byte (hardware owned)
pub const ERXWRPTH: Register = Register::eth(Bank::Bank0, 0x0F);

pub const ERDPT: RegisterPair = RegisterPair::new(ERDPTL, ERDPTH);
pub const EWRPT: RegisterPair = RegisterPair::new(EWRPTL, EWRPTH);
pub const ETXST: RegisterPair = RegisterPair::new(ETXSTL, ETXSTH);
pub const ETXND: RegisterPair = RegisterPair::new(ETXNDL, ETXNDH);
pub const ERXST: RegisterPair = RegisterPair::new(ERXSTL, ERXSTH);
pub const ERXND: RegisterPair = RegisterPair::new(ERXNDL, ERXNDH);
pub const ERXRDPT: RegisterPair = RegisterPair::new(ERXRDPTL, ERXRDPTH);
pub const ERXWRPT: RegisterPair = RegisterPair::new(ERXWRPTL, ERXWRPTH);

// =============================================================================
// Bank 1: Filter and Packet Count
// =============================================================================

/// Receive filter control
pub const ERXFCON: Register = Register::eth(Bank::Bank1, 0x18);
/// Number of packets waiting in the receive ring
pub const EPKTCNT: Register = Register::eth(Bank::Bank1, 0x19);

// =============================================================================
// Bank 3: Revision
// =============================================================================

/// Silicon revision ID
pub const EREVID: Register = Register::eth(Bank::Bank3, 0x12);

// =============================================================================
// Common Registers (present in every bank, encoded as bank 0)
// =============================================================================

/// Interrupt enable
pub const EIE: Register = Register::eth(Bank::Bank0, 0x1B);
/// Interrupt request flags
pub const EIR: Register = Register::eth(Bank::Bank0, 0x1C);
/// Status
pub const ESTAT: Register = Register::eth(Bank::Bank0, 0x1D);
/// Control 2
pub const ECON2: Register = Register::eth(Bank::Bank0, 0x1E);
/// Control 1
pub const ECON1: Register = Register::eth(Bank::Bank0, 0x1F);

/// In-bank addresses at or above this value are shared by all banks
pub const COMMON_REGISTER_START: u8 = 0x1B;

// =============================================================================
// EIE Bits
// =============================================================================

pub const EIE_INTIE: u8 = 1 << 7;
pub const EIE_PKTIE: u8 = 1 << 6;
pub const EIE_DMAIE: u8 = 1 << 5;
pub const EIE_LINKIE: u8 = 1 << 4;
pub const EIE_TXIE: u8 = 1 << 3;
pub const EIE_TXERIE: u8 = 1 << 1;
pub const EIE_RXERIE: u8 = 1 << 0;

// =============================================================================
// EIR Bits
// =============================================================================

/// Receive packet pending
pub const EIR_PKTIF: u8 = 1 << 6;
/// DMA done
pub const EIR_DMAIF: u8 = 1 << 5;
/// PHY link change
pub const EIR_LINKIF: u8 = 1 << 4;
/// Transmit done
pub const EIR_TXIF: u8 = 1 << 3;
/// Transmit error
pub const EIR_TXERIF: u8 = 1 << 1;
/// Receive error (ring full or too many packets)
pub const EIR_RXERIF: u8 = 1 << 0;

// =============================================================================
// ESTAT Bits
// =============================================================================

/// INT interrupt flag
pub const ESTAT_INT: u8 = 1 << 7;
/// Late collision aborted the last transmission
pub const ESTAT_LATECOL: u8 = 1 << 4;
/// Receive busy
pub const ESTAT_RXBUSY: u8 = 1 << 2;
/// Transmit abort
pub const ESTAT_TXABRT: u8 = 1 << 1;
/// Oscillator start-up timer expired
pub const ESTAT_CLKRDY: u8 = 1 << 0;

// =============================================================================
// ECON2 Bits
// =============================================================================

/// Buffer pointers auto-increment on RBM/WBM
pub const ECON2_AUTOINC: u8 = 1 << 7;
/// Decrement EPKTCNT
pub const ECON2_PKTDEC: u8 = 1 << 6;
/// Power save
pub const ECON2_PWRSV: u8 = 1 << 5;
/// Voltage regulator power save
pub const ECON2_VRPS: u8 = 1 << 3;

// =============================================================================
// ECON1 Bits
// =============================================================================

/// Transmit logic reset
pub const ECON1_TXRST: u8 = 1 << 7;
/// Receive logic reset
pub const ECON1_RXRST: u8 = 1 << 6;
/// DMA start
pub const ECON1_DMAST: u8 = 1 << 5;
/// DMA checksum mode
pub const ECON1_CSUMEN: u8 = 1 << 4;
/// Transmit request to send
pub const ECON1_TXRTS: u8 = 1 << 3;
/// Receive enable
pub const ECON1_RXEN: u8 = 1 << 2;
/// Bank select bit 1
pub const ECON1_BSEL1: u8 = 1 << 1;
/// Bank select bit 0
pub const ECON1_BSEL0: u8 = 1 << 0;
/// Bank select field
pub const ECON1_BSEL_MASK: u8 = ECON1_BSEL1 | ECON1_BSEL0;

// =============================================================================
// ERXFCON Bits
// =============================================================================

/// Unicast filter enable
pub const ERXFCON_UCEN: u8 = 1 << 7;
/// AND/OR filter selection
pub const ERXFCON_ANDOR: u8 = 1 << 6;
/// Post-filter CRC check enable
pub const ERXFCON_CRCEN: u8 = 1 << 5;
/// Pattern match filter enable
pub const ERXFCON_PMEN: u8 = 1 << 4;
/// Magic packet filter enable
pub const ERXFCON_MPEN: u8 = 1 << 3;
/// Hash table filter enable
pub const ERXFCON_HTEN: u8 = 1 << 2;
/// Multicast filter enable
pub const ERXFCON_MCEN: u8 = 1 << 1;
/// Broadcast filter enable
pub const ERXFCON_BCEN: u8 = 1 << 0;
