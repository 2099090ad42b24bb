//! Error types for the ENC28J60 driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Configuration and initialization failures
//! - [`BufferError`]: Packet buffer and receive ring issues
//! - [`IoError`]: Bus, timeout and runtime TX/RX failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and initialization errors
///
/// These errors are reported by [`Enc28j60Config::validate`] and by the PHY
/// helpers when given an out-of-range register.
///
/// [`Enc28j60Config::validate`]: crate::Enc28j60Config::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Receive ring window is empty, inverted, outside device RAM or too small
    InvalidRxWindow,
    /// Transmit region overlaps the receive ring or does not fit in RAM
    InvalidTxStart,
    /// Maximum frame length outside the supported range
    InvalidFrameLength,
    /// PHY register address above 0x1F
    InvalidPhyRegister,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidRxWindow => "invalid receive ring window",
            ConfigError::InvalidTxStart => "invalid transmit buffer start",
            ConfigError::InvalidFrameLength => "invalid maximum frame length",
            ConfigError::InvalidPhyRegister => "invalid PHY register",
        }
    }
}

// =============================================================================
// Buffer Errors
// =============================================================================

/// Packet buffer errors
///
/// These errors relate to frames handed to the driver and to the state of
/// the on-chip receive ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Frame longer than the configured maximum frame length
    FrameTooLarge,
    /// Zero-length frame
    EmptyFrame,
    /// Receive header points outside the receive ring
    CorruptRing,
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BufferError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BufferError::FrameTooLarge => "frame too large",
            BufferError::EmptyFrame => "empty frame",
            BufferError::CorruptRing => "receive ring corrupted",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Runtime bus and TX/RX errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Bounded wait expired (clock ready, MII busy, transmit pending)
    Timeout,
    /// SPI bus or GPIO pin reported an error
    Bus,
    /// Invalid state for operation (e.g., not initialized)
    InvalidState,
    /// Transmission aborted by the MAC
    TransmitFailed,
    /// Text sink rejected diagnostic output
    Format,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "operation timed out",
            IoError::Bus => "bus error",
            IoError::InvalidState => "invalid state for operation",
            IoError::TransmitFailed => "transmission failed",
            IoError::Format => "formatting error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::InvalidRxWindow)) => { /* ... */ }
///     Err(Error::Buffer(BufferError::FrameTooLarge)) => { /* ... */ }
///     Err(Error::Io(IoError::Timeout)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Buffer error
    Buffer(BufferError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Buffer(e) => write!(f, "buffer: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<BufferError> for Error {
    fn from(e: BufferError) -> Self {
        Error::Buffer(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

impl From<core::fmt::Error> for IoError {
    fn from(_: core::fmt::Error) -> Self {
        IoError::Format
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for buffer operations
pub type BufferResult<T> = core::result::Result<T, BufferError>;

/// Result type alias for bus-level operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
