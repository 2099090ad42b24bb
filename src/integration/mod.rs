//! External Stack Integrations
//!
//! - **smoltcp** (`smoltcp`): Integration with the smoltcp TCP/IP network stack
//!   - Implements `smoltcp::phy::Device` for [`Enc28j60`](crate::Enc28j60)
//!   - RX/TX token support
//!   - Requires `smoltcp` feature
//!
//! # Example
//!
//! ```ignore
//! use smoltcp::phy::Device;
//! let (rx, tx) = eth.receive(Instant::ZERO).unwrap();
//! ```

#[cfg(feature = "smoltcp")]
pub mod smoltcp;

#[cfg(feature = "smoltcp")]
pub use smoltcp::{Enc28j60RxToken, Enc28j60TxToken, ethernet_address};
