//! smoltcp Network Stack Integration
#![cfg_attr(docsrs, doc(cfg(feature = "smoltcp")))]
//!
//! This module provides integration with the [smoltcp](https://docs.rs/smoltcp) network stack.
//! It implements the `smoltcp::phy::Device` trait for the ENC28J60 driver, allowing it to be
//! used as a network interface with smoltcp's TCP/IP stack.
//!
//! # Example
//!
//! ```ignore
//! use smoltcp::iface::{Config, Interface, SocketSet};
//! use smoltcp::wire::{IpAddress, IpCidr};
//! use enc28j60_spi::{Enc28j60, Enc28j60Config};
//! use enc28j60_spi::integration::ethernet_address;
//!
//! let mut eth = Enc28j60::new(transport, delay, Enc28j60Config::new());
//! eth.init()?;
//!
//! let config = Config::new(ethernet_address(&eth).into());
//! let mut iface = Interface::new(config, &mut eth, smoltcp::time::Instant::ZERO);
//!
//! iface.update_ip_addrs(|addrs| {
//!     addrs.push(IpCidr::new(IpAddress::v4(192, 168, 1, 100), 24)).unwrap();
//! });
//! ```
//!
//! # Token Ownership
//!
//! smoltcp asks `receive()` for an RX token and a TX token at the same time.
//! The frame is copied out of the chip while `receive()` still holds the
//! driver, so the RX token owns its bytes and only the TX token borrows the
//! driver. The cost is one 1518-byte stack buffer per received frame.

use embedded_hal::delay::DelayNs;
use smoltcp::phy::{ChecksumCapabilities, Device, DeviceCapabilities, Medium};
use smoltcp::time::Instant;

use crate::driver::config::State;
use crate::driver::enc28j60::Enc28j60;
use crate::hal::transport::Transport;
use crate::internal::constants::{CRC_SIZE, MAX_FRAME_LEN};

// =============================================================================
// RX Token
// =============================================================================

/// Receive token for smoltcp
///
/// Holds a copy of one received frame.
pub struct Enc28j60RxToken {
    buffer: [u8; MAX_FRAME_LEN as usize],
    len: usize,
}

impl smoltcp::phy::RxToken for Enc28j60RxToken {
    fn consume<R, F>(self, f: F) -> R
    where
        F: FnOnce(&[u8]) -> R,
    {
        f(&self.buffer[..self.len])
    }
}

// =============================================================================
// TX Token
// =============================================================================

/// Transmit token for smoltcp
///
/// Borrows the driver until the frame is handed to the MAC.
pub struct Enc28j60TxToken<'a, T, D> {
    eth: &'a mut Enc28j60<T, D>,
}

impl<T, D> smoltcp::phy::TxToken for Enc28j60TxToken<'_, T, D>
where
    T: Transport,
    D: DelayNs,
{
    fn consume<R, F>(self, len: usize, f: F) -> R
    where
        F: FnOnce(&mut [u8]) -> R,
    {
        let len = len.min(self.eth.config().max_frame_len as usize);
        let mut buffer = [0u8; MAX_FRAME_LEN as usize];
        let result = f(&mut buffer[..len]);

        // Transmit errors are dropped; smoltcp recovers at a higher layer
        if let Err(_e) = self.eth.send(&buffer[..len]) {
            #[cfg(feature = "defmt")]
            defmt::warn!("smoltcp transmit of {} bytes failed: {}", len, _e);
        }

        result
    }
}

// =============================================================================
// Device Implementation
// =============================================================================

impl<T, D> Device for Enc28j60<T, D>
where
    T: Transport,
    D: DelayNs,
{
    type RxToken<'a>
        = Enc28j60RxToken
    where
        Self: 'a;
    type TxToken<'a>
        = Enc28j60TxToken<'a, T, D>
    where
        Self: 'a;

    fn receive(&mut self, _timestamp: Instant) -> Option<(Self::RxToken<'_>, Self::TxToken<'_>)> {
        if self.state() != State::Ready {
            return None;
        }

        let mut buffer = [0u8; MAX_FRAME_LEN as usize];
        let packet = match self.poll_packet(&mut buffer) {
            Ok(Some(packet)) => packet,
            Ok(None) => return None,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("smoltcp receive failed: {}", _e);
                return None;
            }
        };

        Some((
            Enc28j60RxToken {
                buffer,
                len: packet.len,
            },
            Enc28j60TxToken { eth: self },
        ))
    }

    fn transmit(&mut self, _timestamp: Instant) -> Option<Self::TxToken<'_>> {
        if self.state() != State::Ready {
            return None;
        }
        Some(Enc28j60TxToken { eth: self })
    }

    fn capabilities(&self) -> DeviceCapabilities {
        let mut caps = DeviceCapabilities::default();
        caps.medium = Medium::Ethernet;

        // Ethernet MTU in smoltcp counts the header but not the FCS
        caps.max_transmission_unit = self.config().max_frame_len as usize - CRC_SIZE;

        // One frame in flight; the transmit buffer holds a single frame
        caps.max_burst_size = Some(1);

        // No checksum offload
        caps.checksum = ChecksumCapabilities::default();

        caps
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the configured MAC address as a smoltcp `EthernetAddress`
///
/// Uses the address from the active configuration; no bus access.
pub fn ethernet_address<T, D>(eth: &Enc28j60<T, D>) -> smoltcp::wire::EthernetAddress
where
    T: Transport,
    D: DelayNs,
{
    smoltcp::wire::EthernetAddress(eth.config().mac_address)
}
