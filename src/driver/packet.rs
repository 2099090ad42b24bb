//! Receive header and transmit status vector formats
//!
//! Every packet in the receive ring is preceded by a 6-byte header written
//! by the MAC, and every transmission leaves a 7-byte status vector directly
//! after the frame in the transmit region. Both are little-endian.

use crate::internal::constants::{RX_HEADER_LEN, TSV_LEN};

// =============================================================================
// Receive Status
// =============================================================================

/// Receive status vector bits (upper word of the receive header)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxStatus(u16);

impl RxStatus {
    /// A packet over 50 000 bit times was dropped before this one
    pub const LONG_DROP: u16 = 1 << 0;
    /// Carrier event seen since the last receive
    pub const CARRIER_EVENT: u16 = 1 << 2;
    /// CRC did not match
    pub const CRC_ERROR: u16 = 1 << 4;
    /// Length/type field did not match the actual length
    pub const LENGTH_CHECK_ERROR: u16 = 1 << 5;
    /// Length/type field larger than 1500
    pub const LENGTH_OUT_OF_RANGE: u16 = 1 << 6;
    /// Valid frame with no errors
    pub const RECEIVED_OK: u16 = 1 << 7;
    /// Multicast destination
    pub const MULTICAST: u16 = 1 << 8;
    /// Broadcast destination
    pub const BROADCAST: u16 = 1 << 9;
    /// Extra bits after the last full byte
    pub const DRIBBLE_NIBBLE: u16 = 1 << 10;
    /// Control frame
    pub const CONTROL_FRAME: u16 = 1 << 11;
    /// Pause control frame
    pub const PAUSE_FRAME: u16 = 1 << 12;
    /// Control frame with an unknown opcode
    pub const UNKNOWN_OPCODE: u16 = 1 << 13;
    /// VLAN tagged frame
    pub const VLAN: u16 = 1 << 14;

    /// Wrap raw status bits
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw status bits
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether every bit of `mask` is set
    pub const fn contains(self, mask: u16) -> bool {
        self.0 & mask == mask
    }

    /// Frame received without errors
    pub const fn is_ok(self) -> bool {
        self.contains(Self::RECEIVED_OK)
    }

    /// CRC error
    pub const fn crc_error(self) -> bool {
        self.contains(Self::CRC_ERROR)
    }

    /// Length check error
    pub const fn length_check_error(self) -> bool {
        self.contains(Self::LENGTH_CHECK_ERROR)
    }

    /// Multicast destination
    pub const fn is_multicast(self) -> bool {
        self.contains(Self::MULTICAST)
    }

    /// Broadcast destination
    pub const fn is_broadcast(self) -> bool {
        self.contains(Self::BROADCAST)
    }
}

/// Header preceding every packet in the receive ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxHeader {
    /// Ring address of the next packet's header
    pub next_packet: u16,
    /// Byte count reported by the MAC (including CRC)
    pub byte_count: u16,
    /// Receive status bits
    pub status: RxStatus,
}

impl RxHeader {
    /// Decode a header from its raw bytes
    pub const fn parse(raw: &[u8; RX_HEADER_LEN]) -> Self {
        Self {
            next_packet: u16::from_le_bytes([raw[0], raw[1]]),
            byte_count: u16::from_le_bytes([raw[2], raw[3]]),
            status: RxStatus::from_bits(u16::from_le_bytes([raw[4], raw[5]])),
        }
    }
}

/// Metadata of a packet copied out of the receive ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceivedPacket {
    /// Bytes copied into the caller's buffer
    pub len: usize,
    /// Byte count reported by the MAC
    pub reported_len: usize,
    /// Receive status bits
    pub status: RxStatus,
}

impl ReceivedPacket {
    /// Whether the packet did not fit in the caller's buffer
    pub const fn truncated(&self) -> bool {
        self.len < self.reported_len
    }
}

// =============================================================================
// Transmit Status
// =============================================================================

/// Transmit status vector written by the MAC after each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxStatus(u64);

impl TxStatus {
    const COLLISION_SHIFT: u32 = 16;
    const CRC_ERROR: u64 = 1 << 20;
    const LENGTH_CHECK_ERROR: u64 = 1 << 21;
    const LENGTH_OUT_OF_RANGE: u64 = 1 << 22;
    const DONE: u64 = 1 << 23;
    const MULTICAST: u64 = 1 << 24;
    const BROADCAST: u64 = 1 << 25;
    const PACKET_DEFER: u64 = 1 << 26;
    const EXCESSIVE_DEFER: u64 = 1 << 27;
    const EXCESSIVE_COLLISION: u64 = 1 << 28;
    const LATE_COLLISION: u64 = 1 << 29;
    const GIANT: u64 = 1 << 30;
    const UNDERRUN: u64 = 1 << 31;
    const WIRE_COUNT_SHIFT: u32 = 32;
    const CONTROL_FRAME: u64 = 1 << 48;
    const PAUSE_FRAME: u64 = 1 << 49;
    const BACKPRESSURE: u64 = 1 << 50;
    const VLAN: u64 = 1 << 51;

    /// Decode the 7-byte vector
    pub const fn parse(raw: &[u8; TSV_LEN]) -> Self {
        let bytes = [raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], 0];
        Self(u64::from_le_bytes(bytes))
    }

    /// Raw vector bits
    pub const fn bits(self) -> u64 {
        self.0
    }

    const fn flag(self, mask: u64) -> bool {
        self.0 & mask != 0
    }

    /// Frame length in bytes, excluding padding and collisions
    pub const fn byte_count(self) -> u16 {
        self.0 as u16
    }

    /// Collisions seen while sending
    pub const fn collision_count(self) -> u8 {
        ((self.0 >> Self::COLLISION_SHIFT) & 0x0F) as u8
    }

    /// Total bytes put on the wire, including collided attempts
    pub const fn wire_byte_count(self) -> u16 {
        (self.0 >> Self::WIRE_COUNT_SHIFT) as u16
    }

    /// Transmission completed
    pub const fn done(self) -> bool {
        self.flag(Self::DONE)
    }

    /// CRC error
    pub const fn crc_error(self) -> bool {
        self.flag(Self::CRC_ERROR)
    }

    /// Length check error
    pub const fn length_check_error(self) -> bool {
        self.flag(Self::LENGTH_CHECK_ERROR)
    }

    /// Length/type out of range
    pub const fn length_out_of_range(self) -> bool {
        self.flag(Self::LENGTH_OUT_OF_RANGE)
    }

    /// Multicast destination
    pub const fn is_multicast(self) -> bool {
        self.flag(Self::MULTICAST)
    }

    /// Broadcast destination
    pub const fn is_broadcast(self) -> bool {
        self.flag(Self::BROADCAST)
    }

    /// Deferred at least once
    pub const fn deferred(self) -> bool {
        self.flag(Self::PACKET_DEFER)
    }

    /// Deferred longer than 24 287 bit times and aborted
    pub const fn excessive_defer(self) -> bool {
        self.flag(Self::EXCESSIVE_DEFER)
    }

    /// Aborted after too many collisions
    pub const fn excessive_collision(self) -> bool {
        self.flag(Self::EXCESSIVE_COLLISION)
    }

    /// Collision after the collision window
    pub const fn late_collision(self) -> bool {
        self.flag(Self::LATE_COLLISION)
    }

    /// Frame larger than MAMXFL
    pub const fn giant(self) -> bool {
        self.flag(Self::GIANT)
    }

    /// Buffer underrun
    pub const fn underrun(self) -> bool {
        self.flag(Self::UNDERRUN)
    }

    /// Control frame
    pub const fn control_frame(self) -> bool {
        self.flag(Self::CONTROL_FRAME)
    }

    /// Pause control frame
    pub const fn pause_frame(self) -> bool {
        self.flag(Self::PAUSE_FRAME)
    }

    /// Backpressure applied
    pub const fn backpressure(self) -> bool {
        self.flag(Self::BACKPRESSURE)
    }

    /// VLAN tagged frame
    pub const fn vlan(self) -> bool {
        self.flag(Self::VLAN)
    }

    /// Whether any abort condition is flagged
    pub const fn has_error(self) -> bool {
        self.excessive_defer() || self.excessive_collision() || self.late_collision()
            || self.giant() || self.underrun()
    }
}
