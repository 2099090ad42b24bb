//! ENC28J60 Driver
//!
//! This module provides the main driver that ties the register access layer,
//! the buffer memory layer and the MII bridge into a complete Ethernet
//! controller: bring-up, frame transmit and polled frame receive.
//!
//! # Buffer Layout
//!
//! ```text
//! 0x0000 +-----------------------+ rx_start
//!        |   receive ring        |  [hdr][payload][hdr][payload]...
//!        |   (hardware writes,   |  ring wraps rx_end -> rx_start
//!        |    driver reads)      |
//!        +-----------------------+ rx_end
//!        |   transmit region     | tx_start: [ctrl][frame][tsv]
//! 0x1FFF +-----------------------+
//! ```

use embedded_hal::delay::DelayNs;

use super::config::{Duplex, Enc28j60Config, State};
use super::packet::{ReceivedPacket, RxHeader, TxStatus};
use crate::error::{BufferError, IoError, IoResult, Result};
use crate::hal::transport::Transport;
use crate::internal::constants::{
    BUS_IDLE_DELAY_US, MABBIPG_FULL_DUPLEX, MABBIPG_HALF_DUPLEX, MAIPGH_DEFAULT, MAIPGL_DEFAULT,
    POLL_INTERVAL_US, POST_RESET_DELAY_US, RX_HEADER_LEN, TSV_LEN, TX_CONTROL_BYTE,
};
use crate::internal::phy_regs::{addr as phy_addr, phcon1, phcon2};
use crate::internal::register::Bank;
use crate::internal::register::eth::{
    ECON1, ECON1_RXEN, ECON1_TXRST, ECON1_TXRTS, ECON2, ECON2_PKTDEC, EIE, EIE_INTIE, EIE_PKTIE,
    EIR, EIR_TXERIF, EIR_TXIF, EPKTCNT, ERDPT, EREVID, ERXND, ERXRDPT, ERXST, ESTAT,
    ESTAT_CLKRDY, ESTAT_TXABRT, ETXND, ETXST, EWRPT,
};
use crate::internal::register::mac::{
    MABBIPG, MAC_ADDRESS_REGISTERS, MACON1, MACON1_MARXEN, MACON1_RXPAUS, MACON1_TXPAUS, MACON2,
    MACON3, MACON3_FRMLNEN, MACON3_FULDPX, MACON3_PADCFG0, MACON3_TXCRCEN, MAIPGH, MAIPGL, MAMXFL,
};

/// ENC28J60 driver
///
/// Owns the transport and delay source. All chip state the driver depends
/// on (selected bank, next packet pointer, pending transmission) is shadowed
/// here, so there must be exactly one driver per chip.
///
/// # Example
///
/// ```ignore
/// use enc28j60_spi::{Enc28j60, Enc28j60Config, SpiTransport};
///
/// let transport = SpiTransport::new(spi_bus, cs_pin);
/// let mut eth = Enc28j60::new(transport, delay, Enc28j60Config::new());
/// eth.init()?;
///
/// eth.send(&frame)?;
///
/// let mut buf = [0u8; 1518];
/// let len = eth.poll(&mut buf)?;
/// ```
#[derive(Debug)]
pub struct Enc28j60<T, D> {
    pub(crate) transport: T,
    pub(crate) delay: D,
    pub(crate) config: Enc28j60Config,
    pub(crate) state: State,
    /// Bank currently selected on the chip; `None` when unknown
    pub(crate) bank: Option<Bank>,
    /// Ring address of the next packet header to read
    pub(crate) next_packet: u16,
    /// ETXND of the last frame handed to the MAC, until confirmed
    pub(crate) tx_end: Option<u16>,
}

impl<T, D> Enc28j60<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Create a driver; nothing is sent to the chip until [`init`](Self::init)
    pub fn new(transport: T, delay: D, config: Enc28j60Config) -> Self {
        Self {
            transport,
            delay,
            config,
            state: State::Uninitialized,
            bank: None,
            next_packet: config.rx_start,
            tx_end: None,
        }
    }

    /// Give back the transport and delay source
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Current driver state
    pub fn state(&self) -> State {
        self.state
    }

    /// Active configuration
    pub fn config(&self) -> &Enc28j60Config {
        &self.config
    }

    /// Ring address where the next packet header is expected
    pub fn next_packet_pointer(&self) -> u16 {
        self.next_packet
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Reset and configure the chip, then enable reception
    ///
    /// May be called again at any time; it resets the chip and the receive
    /// ring pointer.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`](crate::ConfigError) if the configuration is invalid
    /// - [`IoError::Timeout`] if the oscillator or a PHY access does not settle
    /// - [`IoError::Bus`] on transport failure
    pub fn init(&mut self) -> Result<()> {
        self.config.validate()?;
        self.state = State::Uninitialized;
        self.tx_end = None;

        self.transport.idle()?;
        self.delay.delay_us(BUS_IDLE_DELAY_US);

        self.soft_reset()?;
        self.delay.delay_us(POST_RESET_DELAY_US);
        let timeout = self.config.clock_ready_timeout_us;
        self.wait_until(timeout, |dev| {
            Ok(dev.read_control(ESTAT)? & ESTAT_CLKRDY != 0)
        })
        .inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ENC28J60 oscillator not ready after reset");
        })?;

        // Buffer layout
        let config = self.config;
        self.next_packet = config.rx_start;
        self.write_pair(ERXST, config.rx_start)?;
        self.write_pair(ERXRDPT, config.rx_start)?;
        self.write_pair(ERXND, config.rx_end)?;
        self.write_pair(ETXST, config.tx_start)?;

        // MAC
        self.write_control(MACON1, MACON1_MARXEN | MACON1_TXPAUS | MACON1_RXPAUS)?;
        self.write_control(MACON2, 0)?;
        let mut macon3 = MACON3_PADCFG0 | MACON3_TXCRCEN | MACON3_FRMLNEN;
        let back_to_back = match config.duplex {
            Duplex::Full => {
                macon3 |= MACON3_FULDPX;
                MABBIPG_FULL_DUPLEX
            }
            Duplex::Half => MABBIPG_HALF_DUPLEX,
        };
        self.write_control(MACON3, macon3)?;
        self.write_control(MAIPGL, MAIPGL_DEFAULT)?;
        self.write_control(MAIPGH, MAIPGH_DEFAULT)?;
        self.write_control(MABBIPG, back_to_back)?;
        self.write_pair(MAMXFL, config.max_frame_len)?;
        self.write_mac_registers(&config.mac_address)?;

        // PHY
        match config.duplex {
            Duplex::Full => self.phy_write(phy_addr::PHCON1, phcon1::PDPXMD)?,
            Duplex::Half => self.phy_write(phy_addr::PHCON2, phcon2::HDLDIS)?,
        }
        if let Some(leds) = config.led_config {
            self.phy_write(phy_addr::PHLCON, leds)?;
        }

        #[cfg(feature = "defmt")]
        let revision = self.read_control(EREVID)?;

        // Interrupt enables are set for external wiring; receive is polled
        self.bit_field_set(EIE, EIE_INTIE | EIE_PKTIE)?;
        self.bit_field_set(ECON1, ECON1_RXEN)?;

        self.state = State::Ready;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "ENC28J60 ready: rev {=u8}, ring {=u16:#x}..={=u16:#x}, tx {=u16:#x}",
            revision,
            config.rx_start,
            config.rx_end,
            config.tx_start
        );

        Ok(())
    }

    /// Silicon revision ID (EREVID)
    pub fn revision(&mut self) -> Result<u8> {
        Ok(self.read_control(EREVID)?)
    }

    // =========================================================================
    // Transmit
    // =========================================================================

    /// Queue a frame for transmission
    ///
    /// The frame must include the Ethernet header; padding and CRC are added
    /// by the MAC. Returns once the frame is in the transmit buffer and the
    /// MAC has been told to send it, without waiting for completion.
    ///
    /// # Errors
    ///
    /// - [`IoError::InvalidState`] before [`init`](Self::init)
    /// - [`BufferError::EmptyFrame`] or [`BufferError::FrameTooLarge`]
    /// - [`IoError::Timeout`] if a previous frame is still being sent
    pub fn send(&mut self, frame: &[u8]) -> Result<()> {
        self.ensure_ready()?;
        if frame.is_empty() {
            return Err(BufferError::EmptyFrame.into());
        }
        if frame.len() > self.config.max_frame_len as usize {
            return Err(BufferError::FrameTooLarge.into());
        }

        self.wait_tx_idle()?;

        // Errata: a failed transmission can leave the TX logic stuck
        if self.read_control(EIR)? & EIR_TXERIF != 0 {
            self.bit_field_set(ECON1, ECON1_TXRST)?;
            self.bit_field_clear(ECON1, ECON1_TXRST)?;
            self.bit_field_clear(EIR, EIR_TXERIF | EIR_TXIF)?;
            self.bit_field_clear(ESTAT, ESTAT_TXABRT)?;
        }

        let start = self.config.tx_start;
        let end = start + frame.len() as u16;
        self.write_pair(EWRPT, start)?;
        self.write_pair(ETXND, end)?;
        self.write_buffer(&[TX_CONTROL_BYTE])?;
        self.write_buffer(frame)?;
        self.bit_field_set(ECON1, ECON1_TXRTS)?;
        self.tx_end = Some(end);
        Ok(())
    }

    /// Wait for the last queued frame to leave and report its status
    ///
    /// # Errors
    ///
    /// - [`IoError::InvalidState`] if nothing was sent since the last call
    /// - [`IoError::Timeout`] if the MAC does not finish within `tx_timeout_us`
    /// - [`IoError::TransmitFailed`] if the MAC aborted the frame
    pub fn wait_transmit_complete(&mut self) -> Result<TxStatus> {
        self.ensure_ready()?;
        let Some(end) = self.tx_end else {
            return Err(IoError::InvalidState.into());
        };

        self.wait_tx_idle()?;
        self.tx_end = None;

        let mut raw = [0u8; TSV_LEN];
        self.write_pair(ERDPT, end.wrapping_add(1))?;
        self.read_buffer(&mut raw)?;
        let status = TxStatus::parse(&raw);

        let aborted = self.read_control(ESTAT)? & ESTAT_TXABRT != 0;
        let errored = self.read_control(EIR)? & EIR_TXERIF != 0;
        if aborted || errored {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "transmit aborted: collisions={=u8} late={=bool}",
                status.collision_count(),
                status.late_collision()
            );
            return Err(IoError::TransmitFailed.into());
        }
        Ok(status)
    }

    /// [`send`](Self::send) followed by [`wait_transmit_complete`](Self::wait_transmit_complete)
    pub fn send_confirmed(&mut self, frame: &[u8]) -> Result<TxStatus> {
        self.send(frame)?;
        self.wait_transmit_complete()
    }

    /// Whether the MAC is still sending the last frame
    pub fn is_transmitting(&mut self) -> Result<bool> {
        Ok(self.read_control(ECON1)? & ECON1_TXRTS != 0)
    }

    fn wait_tx_idle(&mut self) -> IoResult<()> {
        let timeout = self.config.tx_timeout_us;
        self.wait_until(timeout, |dev| Ok(dev.read_control(ECON1)? & ECON1_TXRTS == 0))
    }

    // =========================================================================
    // Receive
    // =========================================================================

    /// Number of packets waiting in the receive ring (EPKTCNT)
    pub fn pending_packets(&mut self) -> Result<u8> {
        self.ensure_ready()?;
        Ok(self.read_control(EPKTCNT)?)
    }

    /// Copy the next received packet into `buf`
    ///
    /// Returns `None` when the ring is empty. Packets longer than `buf` are
    /// truncated; the rest of the packet is dropped and the ring still
    /// advances past it.
    ///
    /// # Errors
    ///
    /// - [`IoError::InvalidState`] before [`init`](Self::init)
    /// - [`BufferError::CorruptRing`] if the header's next pointer lies
    ///   outside the ring; no pointer is changed
    pub fn poll_packet(&mut self, buf: &mut [u8]) -> Result<Option<ReceivedPacket>> {
        self.ensure_ready()?;
        if self.read_control(EPKTCNT)? == 0 {
            return Ok(None);
        }

        self.write_pair(ERDPT, self.next_packet)?;
        let mut raw = [0u8; RX_HEADER_LEN];
        self.read_buffer(&mut raw)?;
        let header = RxHeader::parse(&raw);

        if !self.config.ring_contains(header.next_packet) {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "receive header at {=u16:#x} points outside the ring: {=u16:#x}",
                self.next_packet,
                header.next_packet
            );
            return Err(BufferError::CorruptRing.into());
        }

        let reported_len = header.byte_count as usize;
        let len = reported_len.min(buf.len());
        if len > 0 {
            self.read_buffer(&mut buf[..len])?;
        }

        // Hand the packet's ring space back and drop it from EPKTCNT
        self.write_pair(ERXRDPT, header.next_packet)?;
        self.bit_field_set(ECON2, ECON2_PKTDEC)?;
        self.next_packet = header.next_packet;

        #[cfg(feature = "defmt")]
        if len < reported_len {
            defmt::debug!("received frame truncated: {} of {} bytes", len, reported_len);
        }

        Ok(Some(ReceivedPacket { len, reported_len, status: header.status }))
    }

    /// Copy the next received packet into `buf` and return its length
    ///
    /// Returns 0 when the ring is empty. See [`poll_packet`](Self::poll_packet).
    pub fn poll(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.poll_packet(buf)?.map_or(0, |packet| packet.len))
    }

    // =========================================================================
    // MAC Address
    // =========================================================================

    /// Read the station address from MAADR0..MAADR5
    pub fn mac_address(&mut self) -> Result<[u8; 6]> {
        Ok(self.read_mac_registers()?)
    }

    /// Program a new station address
    pub fn set_mac_address(&mut self, mac: [u8; 6]) -> Result<()> {
        self.write_mac_registers(&mac)?;
        self.config.mac_address = mac;
        Ok(())
    }

    pub(crate) fn read_mac_registers(&mut self) -> IoResult<[u8; 6]> {
        let mut mac = [0u8; 6];
        for (byte, reg) in mac.iter_mut().zip(MAC_ADDRESS_REGISTERS) {
            *byte = self.read_control(reg)?;
        }
        Ok(mac)
    }

    fn write_mac_registers(&mut self, mac: &[u8; 6]) -> IoResult<()> {
        for (&byte, reg) in mac.iter().zip(MAC_ADDRESS_REGISTERS) {
            self.write_control(reg, byte)?;
        }
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn ensure_ready(&self) -> IoResult<()> {
        if self.state == State::Ready {
            Ok(())
        } else {
            Err(IoError::InvalidState)
        }
    }

    /// Poll `done` every [`POLL_INTERVAL_US`] until it returns true or
    /// `timeout_us` has elapsed
    pub(crate) fn wait_until<F>(&mut self, timeout_us: u32, mut done: F) -> IoResult<()>
    where
        F: FnMut(&mut Self) -> IoResult<bool>,
    {
        let mut elapsed = 0u32;
        loop {
            if done(self)? {
                return Ok(());
            }
            if elapsed >= timeout_us {
                return Err(IoError::Timeout);
            }
            self.delay.delay_us(POLL_INTERVAL_US);
            elapsed = elapsed.saturating_add(POLL_INTERVAL_US);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
