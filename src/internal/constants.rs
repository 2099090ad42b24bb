//! Centralized Constants
//!
//! This module provides a single source of truth for all magic numbers and
//! configuration constants used throughout the ENC28J60 driver.
//!
//! # Organization
//!
//! Constants are grouped by category:
//! - **Frame sizes**: Ethernet frame dimensions
//! - **Buffer memory**: The 8 KiB on-chip packet buffer and its default split
//! - **Packet framing**: Per-packet control byte, receive header, status vector
//! - **MAC timing**: Inter-frame gap values recommended by the datasheet
//! - **Timing**: Timeouts, delays, and polling intervals
//!
//! # Note
//!
//! Register addresses and bit definitions live in `internal::register` as they
//! are specific to the chip's register file.

// =============================================================================
// Frame Sizes
// =============================================================================

/// Maximum standard Ethernet frame size (1500 + 14 header + 4 CRC)
pub const MAX_FRAME_LEN: u16 = 1518;

/// Smallest value accepted for the configured maximum frame length
pub const MIN_FRAME_LEN: u16 = 64;

/// Standard Ethernet MTU (Maximum Transmission Unit)
pub const MTU: usize = 1500;

/// Ethernet header size (dst MAC + src MAC + EtherType)
pub const ETH_HEADER_SIZE: usize = 14;

/// CRC/FCS size at end of frame
pub const CRC_SIZE: usize = 4;

// =============================================================================
// Buffer Memory
// =============================================================================

/// Size of the on-chip Ethernet buffer in bytes
pub const BUFFER_SIZE: u16 = 0x2000;

/// Last valid buffer memory address
pub const BUFFER_END: u16 = BUFFER_SIZE - 1;

/// Default receive ring start (errata: keep the ring at the bottom of RAM)
pub const DEFAULT_RX_START: u16 = 0x0000;

/// Default transmit buffer start: room for one maximum frame at the top of RAM
pub const DEFAULT_TX_START: u16 = BUFFER_END - 0x0600;

/// Default receive ring end (inclusive), directly below the transmit buffer
pub const DEFAULT_RX_END: u16 = DEFAULT_TX_START - 1;

// =============================================================================
// Packet Framing
// =============================================================================

/// Per-packet control byte: use the MACON3 defaults for padding and CRC
pub const TX_CONTROL_BYTE: u8 = 0x00;

/// Size of the receive header preceding every packet in the ring
pub const RX_HEADER_LEN: usize = 6;

/// Size of the transmit status vector written after every sent frame
pub const TSV_LEN: usize = 7;

// =============================================================================
// MAC Timing
// =============================================================================

/// Non-back-to-back inter-packet gap, low byte
pub const MAIPGL_DEFAULT: u8 = 0x12;

/// Non-back-to-back inter-packet gap, high byte (half duplex only)
pub const MAIPGH_DEFAULT: u8 = 0x0C;

/// Back-to-back inter-packet gap for half duplex (9.6 us)
pub const MABBIPG_HALF_DUPLEX: u8 = 0x12;

/// Back-to-back inter-packet gap for full duplex (9.6 us)
pub const MABBIPG_FULL_DUPLEX: u8 = 0x15;

// =============================================================================
// Timing Constants
// =============================================================================

/// Settle time after releasing chip select before the first command
pub const BUS_IDLE_DELAY_US: u32 = 50;

/// Delay after a soft reset before polling CLKRDY
///
/// Errata: CLKRDY may read as set before the oscillator is stable, so a fixed
/// wait of at least 1 ms precedes the poll.
pub const POST_RESET_DELAY_US: u32 = 1_000;

/// Default budget for the oscillator start-up wait
pub const CLOCK_READY_TIMEOUT_US: u32 = 10_000;

/// Default budget for a single MII (PHY) register operation
pub const MII_TIMEOUT_US: u32 = 1_000;

/// Default budget for a frame to leave the transmit buffer
pub const TX_TIMEOUT_US: u32 = 50_000;

/// Interval between status polls during bounded waits
pub const POLL_INTERVAL_US: u32 = 10;

// =============================================================================
// MAC Address
// =============================================================================

/// Default locally-administered MAC address
/// Bit 1 of first byte = 1 indicates locally administered
/// Bit 0 of first byte = 0 indicates unicast
pub const DEFAULT_MAC_ADDR: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];

/// MAC address length in bytes
pub const MAC_ADDR_LEN: usize = 6;

// =============================================================================
// PHY
// =============================================================================

/// Highest PHY register address reachable through MIREGADR
pub const MAX_PHY_REG: u8 = 0x1F;

/// PHY identifier (PHID1:PHID2) with the revision nibble masked out
pub const PHY_ID: u32 = 0x0083_1400;

/// Mask applied to the PHY identifier before comparing against [`PHY_ID`]
pub const PHY_ID_MASK: u32 = 0xFFFF_FFF0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_fits_buffer() {
        assert!(DEFAULT_RX_START < DEFAULT_RX_END);
        assert_eq!(DEFAULT_RX_END + 1, DEFAULT_TX_START);

        // control byte + frame + status vector must fit above the ring
        let tx_last = DEFAULT_TX_START as usize + 1 + MAX_FRAME_LEN as usize + TSV_LEN - 1;
        assert!(tx_last <= BUFFER_END as usize);
    }

    #[test]
    fn default_mac_is_local_unicast() {
        assert_eq!(DEFAULT_MAC_ADDR[0] & 0x01, 0);
        assert_eq!(DEFAULT_MAC_ADDR[0] & 0x02, 0x02);
        assert_eq!(DEFAULT_MAC_ADDR.len(), MAC_ADDR_LEN);
    }

    #[test]
    fn frame_constants_consistent() {
        assert_eq!(MTU + ETH_HEADER_SIZE + CRC_SIZE, MAX_FRAME_LEN as usize);
        assert!(MIN_FRAME_LEN < MAX_FRAME_LEN);
    }
}
