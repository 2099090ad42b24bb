//! Serial transport to the ENC28J60
//!
//! Everything the driver does on the wire reduces to three primitives: assert
//! chip select, exchange bytes full duplex, release chip select. The
//! [`Transport`] trait captures exactly that, so the driver can run over a
//! hardware SPI peripheral, over bit-banged GPIO, or over a mock in tests.
//!
//! The ENC28J60 uses SPI mode 0 (CPOL = 0, CPHA = 0), MSB first, at up to
//! 20 MHz. Configure the SPI peripheral accordingly before handing it over.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal::spi::SpiBus;

use crate::error::{IoError, IoResult};

// =============================================================================
// Transport Trait
// =============================================================================

/// Byte-exchange bus with a chip-select line
///
/// Implementations must not buffer across [`deselect`](Transport::deselect):
/// once it returns, every byte of the frame has been clocked out.
pub trait Transport {
    /// Assert chip select (drive CS low)
    fn select(&mut self) -> IoResult<()>;

    /// Release chip select (drive CS high)
    fn deselect(&mut self) -> IoResult<()>;

    /// Clock one byte out and return the byte clocked in
    fn exchange(&mut self, byte: u8) -> IoResult<u8>;

    /// Fill `buf` with bytes clocked in while sending zeros
    fn read_into(&mut self, buf: &mut [u8]) -> IoResult<()> {
        for byte in buf.iter_mut() {
            *byte = self.exchange(0)?;
        }
        Ok(())
    }

    /// Clock out every byte of `data`, discarding what comes back
    fn write_from(&mut self, data: &[u8]) -> IoResult<()> {
        for &byte in data {
            self.exchange(byte)?;
        }
        Ok(())
    }

    /// Put the bus in its idle state: clock low, chip select released
    fn idle(&mut self) -> IoResult<()> {
        self.deselect()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn select(&mut self) -> IoResult<()> {
        (**self).select()
    }

    fn deselect(&mut self) -> IoResult<()> {
        (**self).deselect()
    }

    fn exchange(&mut self, byte: u8) -> IoResult<u8> {
        (**self).exchange(byte)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> IoResult<()> {
        (**self).read_into(buf)
    }

    fn write_from(&mut self, data: &[u8]) -> IoResult<()> {
        (**self).write_from(data)
    }

    fn idle(&mut self) -> IoResult<()> {
        (**self).idle()
    }
}

// =============================================================================
// Hardware SPI
// =============================================================================

/// Transport over an `embedded-hal` SPI bus plus a dedicated chip-select pin
///
/// The bus is used as a raw [`SpiBus`] rather than an `SpiDevice` because a
/// single chip-select frame carries a variable number of bytes decided while
/// the frame is open (the dummy byte of MAC/MII reads).
#[derive(Debug)]
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Wrap an SPI bus and chip-select pin
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Give back the bus and pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    fn select(&mut self) -> IoResult<()> {
        self.cs.set_low().map_err(|_| IoError::Bus)
    }

    fn deselect(&mut self) -> IoResult<()> {
        self.spi.flush().map_err(|_| IoError::Bus)?;
        self.cs.set_high().map_err(|_| IoError::Bus)
    }

    fn exchange(&mut self, byte: u8) -> IoResult<u8> {
        let mut word = [byte];
        self.spi.transfer_in_place(&mut word).map_err(|_| IoError::Bus)?;
        Ok(word[0])
    }

    fn read_into(&mut self, buf: &mut [u8]) -> IoResult<()> {
        buf.fill(0);
        self.spi.transfer_in_place(buf).map_err(|_| IoError::Bus)
    }

    fn write_from(&mut self, data: &[u8]) -> IoResult<()> {
        self.spi.write(data).map_err(|_| IoError::Bus)
    }
}

// =============================================================================
// Bit-Banged SPI
// =============================================================================

/// Software SPI (mode 0, MSB first) over four GPIO pins
///
/// Useful on boards where the ENC28J60 is wired to arbitrary pins. The clock
/// rate is whatever the GPIO toggling speed allows.
#[derive(Debug)]
pub struct BitBangTransport<SCK, MOSI, MISO, CS> {
    sck: SCK,
    mosi: MOSI,
    miso: MISO,
    cs: CS,
}

impl<SCK, MOSI, MISO, CS> BitBangTransport<SCK, MOSI, MISO, CS>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
    CS: OutputPin,
{
    /// Wrap the four bus pins
    pub fn new(sck: SCK, mosi: MOSI, miso: MISO, cs: CS) -> Self {
        Self { sck, mosi, miso, cs }
    }

    /// Give back the pins as `(sck, mosi, miso, cs)`
    pub fn release(self) -> (SCK, MOSI, MISO, CS) {
        (self.sck, self.mosi, self.miso, self.cs)
    }
}

impl<SCK, MOSI, MISO, CS> Transport for BitBangTransport<SCK, MOSI, MISO, CS>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
    CS: OutputPin,
{
    fn select(&mut self) -> IoResult<()> {
        self.cs.set_low().map_err(|_| IoError::Bus)
    }

    fn deselect(&mut self) -> IoResult<()> {
        self.cs.set_high().map_err(|_| IoError::Bus)
    }

    fn exchange(&mut self, byte: u8) -> IoResult<u8> {
        let mut received = 0u8;
        for bit in (0..8).rev() {
            // Data must be stable before the rising edge
            let state = PinState::from(byte & (1 << bit) != 0);
            self.mosi.set_state(state).map_err(|_| IoError::Bus)?;
            self.sck.set_high().map_err(|_| IoError::Bus)?;
            if self.miso.is_high().map_err(|_| IoError::Bus)? {
                received |= 1 << bit;
            }
            self.sck.set_low().map_err(|_| IoError::Bus)?;
        }
        Ok(received)
    }

    fn idle(&mut self) -> IoResult<()> {
        self.sck.set_low().map_err(|_| IoError::Bus)?;
        self.cs.set_high().map_err(|_| IoError::Bus)
    }
}
