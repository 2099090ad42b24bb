//! MAC and MII Register Definitions
//!
//! These registers live in banks 2 and 3. Reads return one dummy byte before
//! the data, and the bit field opcodes have no effect on them, so every
//! update is a full register write.

// Complete register map; not every register is used by the driver
#![allow(dead_code)]

use super::{Bank, Register, RegisterPair};

// =============================================================================
// Bank 2: MAC Control
// =============================================================================

pub const MACON1: Register = Register::mac(Bank::Bank2, 0x00);
pub const MACON2: Register = Register::mac(Bank::Bank2, 0x01);
pub const MACON3: Register = Register::mac(Bank::Bank2, 0x02);
pub const MACON4: Register = Register::mac(Bank::Bank2, 0x03);
/// Back-to-back inter-packet gap
pub const MABBIPG: Register = Register::mac(Bank::Bank2, 0x04);
/// Non-back-to-back inter-packet gap, low byte
pub const MAIPGL: Register = Register::mac(Bank::Bank2, 0x06);
/// Non-back-to-back inter-packet gap, high byte
pub const MAIPGH: Register = Register::mac(Bank::Bank2, 0x07);
/// Retransmission maximum
pub const MACLCON1: Register = Register::mac(Bank::Bank2, 0x08);
/// Collision window
pub const MACLCON2: Register = Register::mac(Bank::Bank2, 0x09);
/// Maximum frame length low byte
pub const MAMXFLL: Register = Register::mac(Bank::Bank2, 0x0A);
/// Maximum frame length high byte
pub const MAMXFLH: Register = Register::mac(Bank::Bank2, 0x0B);
/// PHY support
pub const MAPHSUP: Register = Register::mac(Bank::Bank2, 0x0D);

pub const MAMXFL: RegisterPair = RegisterPair::new(MAMXFLL, MAMXFLH);

// =============================================================================
// Bank 2: MII Bridge
// =============================================================================

/// MII command
pub const MICMD: Register = Register::mac(Bank::Bank2, 0x12);
/// MII PHY register address
pub const MIREGADR: Register = Register::mac(Bank::Bank2, 0x14);
/// MII write data low byte
pub const MIWRL: Register = Register::mac(Bank::Bank2, 0x16);
/// MII write data high byte, writing it starts the PHY write
pub const MIWRH: Register = Register::mac(Bank::Bank2, 0x17);
/// MII read data low byte
pub const MIRDL: Register = Register::mac(Bank::Bank2, 0x18);
/// MII read data high byte
pub const MIRDH: Register = Register::mac(Bank::Bank2, 0x19);

// =============================================================================
// Bank 3: MAC Address and MII Status
// =============================================================================
//
// Zero-based names numbered from the last octet: MAADR5 holds the first
// octet on the wire and MAADR0 the last.

pub const MAADR1: Register = Register::mac(Bank::Bank3, 0x00);
pub const MAADR0: Register = Register::mac(Bank::Bank3, 0x01);
pub const MAADR3: Register = Register::mac(Bank::Bank3, 0x02);
pub const MAADR2: Register = Register::mac(Bank::Bank3, 0x03);
pub const MAADR5: Register = Register::mac(Bank::Bank3, 0x04);
pub const MAADR4: Register = Register::mac(Bank::Bank3, 0x05);

/// MAC address registers in wire order: `MAC_ADDRESS_REGISTERS[i]` holds `mac[i]`
pub const MAC_ADDRESS_REGISTERS: [Register; 6] = [MAADR5, MAADR4, MAADR3, MAADR2, MAADR1, MAADR0];

/// MII status
pub const MISTAT: Register = Register::mac(Bank::Bank3, 0x0A);

// =============================================================================
// MACON1 Bits
// =============================================================================

/// Pause frame transmission enable
pub const MACON1_TXPAUS: u8 = 1 << 3;
/// Pause frame reception enable
pub const MACON1_RXPAUS: u8 = 1 << 2;
/// Pass all control frames to the host
pub const MACON1_PASSALL: u8 = 1 << 1;
/// MAC receive enable
pub const MACON1_MARXEN: u8 = 1 << 0;

// =============================================================================
// MACON3 Bits
// =============================================================================

/// Automatic pad and CRC configuration bit 2
pub const MACON3_PADCFG2: u8 = 1 << 7;
/// Automatic pad and CRC configuration bit 1
pub const MACON3_PADCFG1: u8 = 1 << 6;
/// Automatic pad and CRC configuration bit 0 (pad short frames to 60 bytes)
pub const MACON3_PADCFG0: u8 = 1 << 5;
/// Append CRC to transmitted frames
pub const MACON3_TXCRCEN: u8 = 1 << 4;
/// Proprietary header enable
pub const MACON3_PHDRLEN: u8 = 1 << 3;
/// Huge frame enable
pub const MACON3_HFRMEN: u8 = 1 << 2;
/// Frame length checking enable
pub const MACON3_FRMLNEN: u8 = 1 << 1;
/// MAC full-duplex enable
pub const MACON3_FULDPX: u8 = 1 << 0;

// =============================================================================
// MACON4 Bits
// =============================================================================

/// Defer transmission (half duplex)
pub const MACON4_DEFER: u8 = 1 << 6;

// =============================================================================
// MICMD / MISTAT Bits
// =============================================================================

/// MII scan enable
pub const MICMD_MIISCAN: u8 = 1 << 1;
/// MII read enable
pub const MICMD_MIIRD: u8 = 1 << 0;

/// MII management read data not valid
pub const MISTAT_NVALID: u8 = 1 << 2;
/// MII scan operation in progress
pub const MISTAT_SCAN: u8 = 1 << 1;
/// MII management busy
pub const MISTAT_BUSY: u8 = 1 << 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_registers_need_dummy_read() {
        for reg in [MACON1, MACON3, MABBIPG, MICMD, MIRDH, MISTAT] {
            assert!(reg.is_mac_mii());
        }
        for reg in MAC_ADDRESS_REGISTERS {
            assert!(reg.is_mac_mii());
            assert_eq!(reg.bank(), Bank::Bank3);
        }
    }

    #[test]
    fn mac_address_mapping_is_reversed() {
        assert_eq!(MAC_ADDRESS_REGISTERS[0].address(), 0x04);
        assert_eq!(MAC_ADDRESS_REGISTERS[1].address(), 0x05);
        assert_eq!(MAC_ADDRESS_REGISTERS[4].address(), 0x00);
        assert_eq!(MAC_ADDRESS_REGISTERS[5].address(), 0x01);
    }

    #[test]
    fn well_known_addresses() {
        assert_eq!(MACON1.raw(), 0xC0);
        assert_eq!(MICMD.raw(), 0xD2);
        assert_eq!(MISTAT.raw(), 0xEA);
        assert_eq!(MAMXFL.low.raw(), 0xCA);
    }
}
