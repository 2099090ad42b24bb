//! PHY Register Definitions
//!
//! The integrated 10BASE-T PHY is not memory mapped. Its 16-bit registers are
//! reached through the MII bridge (MIREGADR, MICMD, MIWR, MIRD).

/// PHY register addresses
pub mod addr {
    /// Control register 1
    pub const PHCON1: u8 = 0x00;
    /// Status register 1
    pub const PHSTAT1: u8 = 0x01;
    /// Identifier register 1
    pub const PHID1: u8 = 0x02;
    /// Identifier register 2
    pub const PHID2: u8 = 0x03;
    /// Control register 2
    pub const PHCON2: u8 = 0x10;
    /// Status register 2
    pub const PHSTAT2: u8 = 0x11;
    /// Interrupt enable
    pub const PHIE: u8 = 0x12;
    /// Interrupt request
    pub const PHIR: u8 = 0x13;
    /// LED configuration
    pub const PHLCON: u8 = 0x14;
}

/// PHCON1 bits
pub mod phcon1 {
    /// PHY software reset
    pub const PRST: u16 = 1 << 15;
    /// PHY loopback
    pub const PLOOPBK: u16 = 1 << 14;
    /// PHY power down
    pub const PPWRSV: u16 = 1 << 11;
    /// PHY duplex mode: full duplex when set
    pub const PDPXMD: u16 = 1 << 8;
}

/// PHSTAT1 bits
pub mod phstat1 {
    /// Full duplex capable
    pub const PFDPX: u16 = 1 << 12;
    /// Half duplex capable
    pub const PHDPX: u16 = 1 << 11;
    /// Latching link status
    pub const LLSTAT: u16 = 1 << 2;
    /// Jabber detected
    pub const JBSTAT: u16 = 1 << 1;
}

/// PHCON2 bits
pub mod phcon2 {
    /// Force link up
    pub const FRCLNK: u16 = 1 << 14;
    /// Twisted-pair transmitter disable
    pub const TXDIS: u16 = 1 << 13;
    /// Jabber correction disable
    pub const JABBER: u16 = 1 << 10;
    /// Half-duplex loopback disable
    pub const HDLDIS: u16 = 1 << 8;
}

/// PHSTAT2 bits
pub mod phstat2 {
    /// Transmitting
    pub const TXSTAT: u16 = 1 << 13;
    /// Receiving
    pub const RXSTAT: u16 = 1 << 12;
    /// Collision
    pub const COLSTAT: u16 = 1 << 11;
    /// Link is up (non-latching)
    pub const LSTAT: u16 = 1 << 10;
    /// Configured for full duplex
    pub const DPXSTAT: u16 = 1 << 9;
    /// Polarity reversed
    pub const PLRITY: u16 = 1 << 5;
}

/// PHIE bits
pub mod phie {
    /// Link change interrupt enable
    pub const PLNKIE: u16 = 1 << 4;
    /// Global PHY interrupt enable
    pub const PGEIE: u16 = 1 << 1;
}

/// PHLCON fields
pub mod phlcon {
    /// LEDA configuration shift
    pub const LACFG_SHIFT: u16 = 8;
    /// LEDB configuration shift
    pub const LBCFG_SHIFT: u16 = 4;
    /// LED pulse stretch time shift
    pub const LFRQ_SHIFT: u16 = 2;
    /// Stretch LED events
    pub const STRCH: u16 = 1 << 1;
    /// Bits that must read as one
    pub const RESERVED: u16 = 0x3000;
}
