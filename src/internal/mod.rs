//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`register`]: Banked control register map, opcodes and bit definitions
//! - [`constants`]: Internal constants and magic numbers
//! - [`phy_regs`]: Integrated PHY register definitions
//! - [`request`]: Typed SPI transactions
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Do not depend on any types
//! or functions in this module from external code. They are subject to change
//! without notice.

pub(crate) mod constants;
pub(crate) mod phy_regs;
pub(crate) mod register;
pub(crate) mod request;
