//! Configuration types for the ENC28J60 driver

use crate::error::{ConfigError, ConfigResult};
use crate::internal::constants::{
    BUFFER_END, CLOCK_READY_TIMEOUT_US, DEFAULT_MAC_ADDR, DEFAULT_RX_END, DEFAULT_RX_START,
    DEFAULT_TX_START, MAX_FRAME_LEN, MII_TIMEOUT_US, MIN_FRAME_LEN, RX_HEADER_LEN, TSV_LEN,
    TX_TIMEOUT_US,
};

/// Ethernet duplex mode
///
/// The PHY does not auto-negotiate, so both link partners must be configured
/// for the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    #[default]
    Half,
    /// Full duplex
    Full,
}

/// ENC28J60 driver configuration
///
/// The 8 KiB on-chip buffer is split into a receive ring
/// (`rx_start..=rx_end`) and a transmit region starting at `tx_start`. The
/// transmit region holds one per-packet control byte, one frame and the
/// 7-byte transmit status vector the MAC writes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Enc28j60Config {
    /// Station MAC address
    pub mac_address: [u8; 6],
    /// First byte of the receive ring
    pub rx_start: u16,
    /// Last byte of the receive ring (inclusive)
    pub rx_end: u16,
    /// First byte of the transmit region
    pub tx_start: u16,
    /// Largest frame accepted for transmit and programmed into MAMXFL
    pub max_frame_len: u16,
    /// MAC and PHY duplex mode
    pub duplex: Duplex,
    /// Optional PHLCON value for the LED outputs
    pub led_config: Option<u16>,
    /// Budget for the oscillator start-up wait after reset
    pub clock_ready_timeout_us: u32,
    /// Budget for one PHY register access
    pub mii_timeout_us: u32,
    /// Budget for a pending transmission to finish
    pub tx_timeout_us: u32,
}

impl Default for Enc28j60Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Enc28j60Config {
    /// Create a new configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mac_address: DEFAULT_MAC_ADDR,
            rx_start: DEFAULT_RX_START,
            rx_end: DEFAULT_RX_END,
            tx_start: DEFAULT_TX_START,
            max_frame_len: MAX_FRAME_LEN,
            duplex: Duplex::Half,
            led_config: None,
            clock_ready_timeout_us: CLOCK_READY_TIMEOUT_US,
            mii_timeout_us: MII_TIMEOUT_US,
            tx_timeout_us: TX_TIMEOUT_US,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the MAC address
    #[must_use]
    pub const fn with_mac_address(mut self, addr: [u8; 6]) -> Self {
        self.mac_address = addr;
        self
    }

    /// Set the receive ring window (both ends inclusive)
    #[must_use]
    pub const fn with_rx_window(mut self, start: u16, end: u16) -> Self {
        self.rx_start = start;
        self.rx_end = end;
        self
    }

    /// Set the start of the transmit region
    #[must_use]
    pub const fn with_tx_start(mut self, start: u16) -> Self {
        self.tx_start = start;
        self
    }

    /// Set the maximum frame length
    #[must_use]
    pub const fn with_max_frame_len(mut self, len: u16) -> Self {
        self.max_frame_len = len;
        self
    }

    /// Set the duplex mode
    #[must_use]
    pub const fn with_duplex(mut self, duplex: Duplex) -> Self {
        self.duplex = duplex;
        self
    }

    /// Program PHLCON with the given LED configuration during init
    #[must_use]
    pub const fn with_led_config(mut self, phlcon: u16) -> Self {
        self.led_config = Some(phlcon);
        self
    }

    /// Set the clock-ready timeout
    #[must_use]
    pub const fn with_clock_ready_timeout_us(mut self, timeout_us: u32) -> Self {
        self.clock_ready_timeout_us = timeout_us;
        self
    }

    /// Set the PHY register access timeout
    #[must_use]
    pub const fn with_mii_timeout_us(mut self, timeout_us: u32) -> Self {
        self.mii_timeout_us = timeout_us;
        self
    }

    /// Set the transmit timeout
    #[must_use]
    pub const fn with_tx_timeout_us(mut self, timeout_us: u32) -> Self {
        self.tx_timeout_us = timeout_us;
        self
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check the buffer layout and frame length
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidFrameLength`] if `max_frame_len` is outside 64..=1518
    /// - [`ConfigError::InvalidRxWindow`] if the ring is empty, inverted, past
    ///   the end of RAM, or cannot hold one maximum frame plus its header
    /// - [`ConfigError::InvalidTxStart`] if the transmit region overlaps the
    ///   ring or runs past the end of RAM
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.max_frame_len < MIN_FRAME_LEN || self.max_frame_len > MAX_FRAME_LEN {
            return Err(ConfigError::InvalidFrameLength);
        }

        if self.rx_start >= self.rx_end || self.rx_end > BUFFER_END {
            return Err(ConfigError::InvalidRxWindow);
        }
        let ring_len = (self.rx_end - self.rx_start) as u32 + 1;
        if ring_len < RX_HEADER_LEN as u32 + self.max_frame_len as u32 {
            return Err(ConfigError::InvalidRxWindow);
        }

        // control byte + frame + status vector, last byte inclusive
        let tx_last = self.tx_start as u32 + self.max_frame_len as u32 + TSV_LEN as u32;
        if tx_last > BUFFER_END as u32 {
            return Err(ConfigError::InvalidTxStart);
        }
        let overlaps = (self.tx_start as u32) <= self.rx_end as u32
            && tx_last >= self.rx_start as u32;
        if overlaps {
            return Err(ConfigError::InvalidTxStart);
        }

        Ok(())
    }

    /// Whether `addr` lies inside the receive ring
    pub const fn ring_contains(&self, addr: u16) -> bool {
        addr >= self.rx_start && addr <= self.rx_end
    }
}

/// Driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Not initialized
    #[default]
    Uninitialized,
    /// Initialized, receive enabled
    Ready,
}

// =============================================================================
// Unit Tests
// =============================================================================
