//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the driver on the
//! host without hardware: a behavioral model of the ENC28J60 behind the
//! [`Transport`] trait, plus GPIO, SPI, delay and PHY mocks.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec;
use std::vec::Vec;

use embedded_hal::digital::{self, ErrorType as DigitalErrorType, InputPin, OutputPin};
use embedded_hal::spi::{self, ErrorType as SpiErrorType, SpiBus};

use crate::error::{IoError, IoResult, Result};
use crate::hal::transport::Transport;
use crate::internal::constants::BUFFER_SIZE;
use crate::internal::register::eth::{
    ECON1_BSEL_MASK, ECON1_TXRTS, ECON2_AUTOINC, ECON2_PKTDEC, EIR_TXERIF, EIR_TXIF,
    ESTAT_CLKRDY, ESTAT_TXABRT,
};
use crate::internal::register::mac::{MICMD_MIIRD, MISTAT_BUSY};
use crate::internal::register::{Opcode, Register, RegisterPair};
use crate::phy::PhyAccess;

// =============================================================================
// Mock ENC28J60
// =============================================================================

/// Revision reported in EREVID (silicon rev. B7)
pub const MOCK_REVISION: u8 = 0x06;

// Raw addresses inside the mock register file
const ECON1: u8 = 0x1F;
const ECON2: u8 = 0x1E;
const ESTAT: u8 = 0x1D;
const EIR: u8 = 0x1C;
const COMMON_START: u8 = 0x1B;

const ERDPT: u8 = 0x00;
const EWRPT: u8 = 0x02;
const ETXST: u8 = 0x04;
const ETXND: u8 = 0x06;
const ERXST: u8 = 0x08;
const ERXND: u8 = 0x0A;
const ERXWRPT: u8 = 0x0E;

const EPKTCNT: u8 = 0x19;

const MICMD: u8 = 0x12;
const MIREGADR: u8 = 0x14;
const MIWRL: u8 = 0x16;
const MIWRH: u8 = 0x17;
const MIRDL: u8 = 0x18;
const MIRDH: u8 = 0x19;

const EREVID: u8 = 0x12;
const MISTAT: u8 = 0x0A;

const RX_OK_STATUS: u16 = 0x0080;
const TSV_DONE: u8 = 0x80;

/// One chip-select frame as seen on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiFrame {
    pub mosi: Vec<u8>,
    pub miso: Vec<u8>,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Opcode,
    Read { value: u8, dummy: bool },
    Write(u8),
    BitSet(u8),
    BitClear(u8),
    ReadBuffer,
    WriteBuffer,
    Done,
}

#[derive(Debug)]
struct ChipState {
    banks: [[u8; 32]; 4],
    memory: Vec<u8>,
    phy: [u16; 32],
    frame: Option<SpiFrame>,
    phase: Phase,
    log: Vec<SpiFrame>,
    clock_ready: bool,
    stall_transmit: bool,
    fail_transmit: bool,
    sent: Vec<Vec<u8>>,
    mii_busy_polls: u32,
    mii_busy_remaining: u32,
    mii_stuck: bool,
    exchanges_left: Option<usize>,
}

impl ChipState {
    fn new() -> Self {
        let mut phy = [0u16; 32];
        phy[0x02] = 0x0083;
        phy[0x03] = 0x1400;
        let mut state = Self {
            banks: [[0; 32]; 4],
            memory: vec![0; BUFFER_SIZE as usize],
            phy,
            frame: None,
            phase: Phase::Done,
            log: Vec::new(),
            clock_ready: true,
            stall_transmit: false,
            fail_transmit: false,
            sent: Vec::new(),
            mii_busy_polls: 0,
            mii_busy_remaining: 0,
            mii_stuck: false,
            exchanges_left: None,
        };
        state.reset();
        state
    }

    fn reset(&mut self) {
        self.banks = [[0; 32]; 4];
        self.banks[0][ECON2 as usize] = ECON2_AUTOINC;
        self.banks[3][EREVID as usize] = MOCK_REVISION;
        self.store_pair(0, ERXND, 0x1FFF);
        self.mii_busy_remaining = 0;
    }

    fn selected_bank(&self) -> usize {
        (self.banks[0][ECON1 as usize] & ECON1_BSEL_MASK) as usize
    }

    fn slot(&self, bank: usize, addr: u8) -> (usize, usize) {
        if addr >= COMMON_START {
            (0, addr as usize)
        } else {
            (bank, addr as usize)
        }
    }

    fn load(&self, bank: usize, addr: u8) -> u8 {
        let (b, a) = self.slot(bank, addr);
        self.banks[b][a]
    }

    fn store(&mut self, bank: usize, addr: u8, value: u8) {
        let (b, a) = self.slot(bank, addr);
        self.banks[b][a] = value;
    }

    fn load_pair(&self, bank: usize, low: u8) -> u16 {
        u16::from_le_bytes([self.load(bank, low), self.load(bank, low + 1)])
    }

    fn store_pair(&mut self, bank: usize, low: u8, value: u16) {
        let [l, h] = value.to_le_bytes();
        self.store(bank, low, l);
        self.store(bank, low + 1, h);
    }

    fn is_mac_mii(bank: usize, addr: u8) -> bool {
        match bank {
            2 => addr <= 0x19,
            3 => addr <= 0x05 || addr == MISTAT,
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Register file with side effects
    // -------------------------------------------------------------------------

    fn read_register(&mut self, bank: usize, addr: u8) -> u8 {
        if addr == ESTAT {
            let estat = self.load(0, ESTAT) & !ESTAT_CLKRDY;
            return if self.clock_ready { estat | ESTAT_CLKRDY } else { estat };
        }
        if bank == 3 && addr == MISTAT {
            let busy = self.mii_stuck || self.mii_busy_remaining > 0;
            self.mii_busy_remaining = self.mii_busy_remaining.saturating_sub(1);
            let mistat = self.load(3, MISTAT) & !MISTAT_BUSY;
            return if busy { mistat | MISTAT_BUSY } else { mistat };
        }
        self.load(bank, addr)
    }

    fn write_register(&mut self, bank: usize, addr: u8, value: u8) {
        let old = self.load(bank, addr);
        self.store(bank, addr, value);

        match (bank, addr) {
            (_, ECON1) => {
                if value & ECON1_TXRTS != 0 && old & ECON1_TXRTS == 0 {
                    self.transmit();
                }
            }
            (_, ECON2) => {
                if value & ECON2_PKTDEC != 0 {
                    let count = self.load(1, EPKTCNT).saturating_sub(1);
                    self.store(1, EPKTCNT, count);
                    self.store(0, ECON2, value & !ECON2_PKTDEC);
                }
            }
            (0, a) if a == ERXST || a == ERXST + 1 => {
                let start = self.load_pair(0, ERXST);
                self.store_pair(0, ERXWRPT, start);
            }
            (2, MICMD) => {
                if value & MICMD_MIIRD != 0 {
                    let reg = (self.load(2, MIREGADR) & 0x1F) as usize;
                    let [low, high] = self.phy[reg].to_le_bytes();
                    self.store(2, MIRDL, low);
                    self.store(2, MIRDH, high);
                    self.mii_busy_remaining = self.mii_busy_polls;
                }
            }
            (2, MIWRH) => {
                let reg = (self.load(2, MIREGADR) & 0x1F) as usize;
                self.phy[reg] = self.load_pair(2, MIWRL);
                self.mii_busy_remaining = self.mii_busy_polls;
            }
            _ => {}
        }
    }

    fn transmit(&mut self) {
        let start = self.load_pair(0, ETXST);
        let end = self.load_pair(0, ETXND);
        let frame: Vec<u8> = (start + 1..=end).map(|addr| self.mem(addr)).collect();

        let [count_low, count_high] = (frame.len() as u16).to_le_bytes();
        let mut tsv = [count_low, count_high, 0, 0, count_low, count_high, 0];
        if self.fail_transmit {
            self.fail_transmit = false;
            let estat = self.load(0, ESTAT);
            self.store(0, ESTAT, estat | ESTAT_TXABRT);
            let eir = self.load(0, EIR);
            self.store(0, EIR, eir | EIR_TXERIF);
        } else {
            tsv[2] = TSV_DONE;
            let eir = self.load(0, EIR);
            self.store(0, EIR, eir | EIR_TXIF);
        }
        for (i, byte) in tsv.into_iter().enumerate() {
            self.set_mem(end.wrapping_add(1 + i as u16), byte);
        }
        self.sent.push(frame);

        if !self.stall_transmit {
            let econ1 = self.load(0, ECON1);
            self.store(0, ECON1, econ1 & !ECON1_TXRTS);
        }
    }

    // -------------------------------------------------------------------------
    // Buffer memory
    // -------------------------------------------------------------------------

    fn mem(&self, addr: u16) -> u8 {
        self.memory[addr as usize % BUFFER_SIZE as usize]
    }

    fn set_mem(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize % BUFFER_SIZE as usize] = value;
    }

    fn ring_advance(&self, addr: u16) -> u16 {
        if addr == self.load_pair(0, ERXND) {
            self.load_pair(0, ERXST)
        } else {
            (addr + 1) % BUFFER_SIZE as u16
        }
    }

    fn write_ring(&mut self, mut addr: u16, data: &[u8]) -> u16 {
        for &byte in data {
            self.set_mem(addr, byte);
            addr = self.ring_advance(addr);
        }
        addr
    }

    fn receive(&mut self, next: u16, payload: &[u8]) {
        let write_pointer = self.load_pair(0, ERXWRPT);
        let mut header = [0u8; 6];
        header[0..2].copy_from_slice(&next.to_le_bytes());
        header[2..4].copy_from_slice(&(payload.len() as u16).to_le_bytes());
        header[4..6].copy_from_slice(&RX_OK_STATUS.to_le_bytes());
        let payload_start = self.write_ring(write_pointer, &header);
        self.write_ring(payload_start, payload);
        self.store_pair(0, ERXWRPT, next);
        let count = self.load(1, EPKTCNT).saturating_add(1);
        self.store(1, EPKTCNT, count);
    }

    // -------------------------------------------------------------------------
    // SPI protocol
    // -------------------------------------------------------------------------

    fn clock(&mut self, mosi: u8) -> u8 {
        let bank = self.selected_bank();
        match self.phase {
            Phase::Opcode => {
                let addr = mosi & 0x1F;
                self.phase = match Opcode::from_instruction(mosi) {
                    Opcode::ReadControl => {
                        let dummy = Self::is_mac_mii(bank, addr);
                        let value = self.read_register(bank, addr);
                        Phase::Read { value, dummy }
                    }
                    Opcode::ReadBuffer => Phase::ReadBuffer,
                    Opcode::WriteControl => Phase::Write(addr),
                    Opcode::WriteBuffer => Phase::WriteBuffer,
                    Opcode::BitFieldSet => Phase::BitSet(addr),
                    Opcode::BitFieldClear => Phase::BitClear(addr),
                    Opcode::SoftReset => {
                        self.reset();
                        Phase::Done
                    }
                };
                0
            }
            Phase::Read { value, dummy: true } => {
                self.phase = Phase::Read { value, dummy: false };
                0
            }
            Phase::Read { value, dummy: false } => {
                self.phase = Phase::Done;
                value
            }
            Phase::Write(addr) => {
                self.phase = Phase::Done;
                self.write_register(bank, addr, mosi);
                0
            }
            Phase::BitSet(addr) => {
                self.phase = Phase::Done;
                // Bit field operations are ignored on MAC/MII registers
                if !Self::is_mac_mii(bank, addr) {
                    let value = self.load(bank, addr) | mosi;
                    self.write_register(bank, addr, value);
                }
                0
            }
            Phase::BitClear(addr) => {
                self.phase = Phase::Done;
                if !Self::is_mac_mii(bank, addr) {
                    let value = self.load(bank, addr) & !mosi;
                    self.write_register(bank, addr, value);
                }
                0
            }
            Phase::ReadBuffer => {
                let addr = self.load_pair(0, ERDPT);
                let value = self.mem(addr);
                let next = self.ring_advance(addr);
                self.store_pair(0, ERDPT, next);
                value
            }
            Phase::WriteBuffer => {
                let addr = self.load_pair(0, EWRPT);
                self.set_mem(addr, mosi);
                self.store_pair(0, EWRPT, (addr + 1) % BUFFER_SIZE as u16);
                0
            }
            Phase::Done => 0,
        }
    }
}

/// Behavioral model of an ENC28J60 on the far side of the SPI bus
///
/// Clones share the same chip, so a test keeps one handle for inspection
/// while the driver owns another as its transport.
///
/// # Example
///
/// ```ignore
/// let chip = MockChip::new();
/// let mut eth = Enc28j60::new(chip.clone(), MockDelay::new(), Enc28j60Config::new());
/// eth.init()?;
///
/// chip.inject_packet(&[0xAB; 60]);
/// let len = eth.poll(&mut buf)?;
/// ```
#[derive(Debug, Clone)]
pub struct MockChip {
    state: Rc<RefCell<ChipState>>,
}

impl Default for MockChip {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChip {
    /// Create a chip in its post-reset state with the oscillator running
    pub fn new() -> Self {
        Self { state: Rc::new(RefCell::new(ChipState::new())) }
    }

    /// Completed chip-select frames, oldest first
    pub fn transactions(&self) -> Vec<SpiFrame> {
        self.state.borrow().log.clone()
    }

    pub fn clear_transactions(&self) {
        self.state.borrow_mut().log.clear();
    }

    /// Read a control register without side effects
    pub fn register(&self, reg: Register) -> u8 {
        self.state.borrow().load(reg.bank() as usize, reg.address())
    }

    /// Write a control register without side effects
    pub fn set_register(&self, reg: Register, value: u8) {
        self.state.borrow_mut().store(reg.bank() as usize, reg.address(), value);
    }

    pub fn pair(&self, pair: RegisterPair) -> u16 {
        u16::from_le_bytes([self.register(pair.low), self.register(pair.high)])
    }

    /// Bank selected by ECON1.BSEL
    pub fn selected_bank(&self) -> u8 {
        self.state.borrow().selected_bank() as u8
    }

    pub fn memory(&self, addr: u16, len: usize) -> Vec<u8> {
        let state = self.state.borrow();
        (0..len).map(|i| state.mem(addr.wrapping_add(i as u16))).collect()
    }

    pub fn phy_register(&self, reg: u8) -> u16 {
        self.state.borrow().phy[reg as usize & 0x1F]
    }

    pub fn set_phy_register(&self, reg: u8, value: u16) {
        self.state.borrow_mut().phy[reg as usize & 0x1F] = value;
    }

    /// Report MISTAT.BUSY for `polls` reads after each MII command
    pub fn set_mii_busy_polls(&self, polls: u32) {
        self.state.borrow_mut().mii_busy_polls = polls;
    }

    pub fn set_mii_stuck(&self, stuck: bool) {
        self.state.borrow_mut().mii_stuck = stuck;
    }

    pub fn set_clock_ready(&self, ready: bool) {
        self.state.borrow_mut().clock_ready = ready;
    }

    /// Keep ECON1.TXRTS set after a transmission starts
    pub fn stall_transmit(&self, stall: bool) {
        self.state.borrow_mut().stall_transmit = stall;
    }

    /// Abort the next transmission (ESTAT.TXABRT, EIR.TXERIF)
    pub fn fail_next_transmit(&self) {
        self.state.borrow_mut().fail_transmit = true;
    }

    /// Frames the MAC was asked to send, without control byte
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Let `count` more bytes through, then fail every exchange
    pub fn fail_after(&self, count: usize) {
        self.state.borrow_mut().exchanges_left = Some(count);
    }

    pub fn set_receive_write_pointer(&self, addr: u16) {
        self.state.borrow_mut().store_pair(0, ERXWRPT, addr);
    }

    /// Place a well-formed packet in the receive ring at ERXWRPT
    ///
    /// Returns the next packet pointer written into its header.
    pub fn inject_packet(&self, payload: &[u8]) -> u16 {
        let mut state = self.state.borrow_mut();
        let start = state.load_pair(0, ERXST);
        let end = state.load_pair(0, ERXND);
        let write_pointer = state.load_pair(0, ERXWRPT);

        let mut next = write_pointer as u32 + 6 + payload.len() as u32;
        next += next & 1;
        if next > end as u32 {
            next -= end as u32 - start as u32 + 1;
        }
        let next = next as u16;
        state.receive(next, payload);
        next
    }

    /// Place a packet whose header carries an arbitrary next pointer
    pub fn inject_raw_packet(&self, next: u16, payload: &[u8]) {
        let mut state = self.state.borrow_mut();
        let write_pointer = state.load_pair(0, ERXWRPT);
        state.receive(next, payload);
        let end = write_pointer.wrapping_add(6 + payload.len() as u16);
        state.store_pair(0, ERXWRPT, end);
    }
}

impl Transport for MockChip {
    fn select(&mut self) -> IoResult<()> {
        let mut state = self.state.borrow_mut();
        state.frame = Some(SpiFrame { mosi: Vec::new(), miso: Vec::new() });
        state.phase = Phase::Opcode;
        Ok(())
    }

    fn deselect(&mut self) -> IoResult<()> {
        let mut state = self.state.borrow_mut();
        if let Some(frame) = state.frame.take() {
            state.log.push(frame);
        }
        state.phase = Phase::Done;
        Ok(())
    }

    fn exchange(&mut self, byte: u8) -> IoResult<u8> {
        let mut state = self.state.borrow_mut();
        let left = state.exchanges_left;
        match left {
            Some(0) => return Err(IoError::Bus),
            Some(n) => state.exchanges_left = Some(n - 1),
            None => {}
        }
        if state.frame.is_none() {
            return Err(IoError::Bus);
        }

        let miso = state.clock(byte);
        if let Some(frame) = state.frame.as_mut() {
            frame.mosi.push(byte);
            frame.miso.push(miso);
        }
        Ok(miso)
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay that records the total requested time
///
/// Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    total_ns: Rc<Cell<u64>>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns.get()
    }

    /// Total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns() / 1_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + ns as u64);
    }
}

// =============================================================================
// Mock GPIO
// =============================================================================

/// Output pin that records every level it was driven to
#[derive(Debug, Clone, Default)]
pub struct MockOutputPin {
    history: Rc<RefCell<Vec<bool>>>,
    fail: Rc<Cell<bool>>,
}

impl MockOutputPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Levels driven so far, `true` for high
    pub fn history(&self) -> Vec<bool> {
        self.history.borrow().clone()
    }

    /// Make the next level change fail
    pub fn fail_next(&self) {
        self.fail.set(true);
    }

    fn drive(&mut self, high: bool) -> core::result::Result<(), digital::ErrorKind> {
        if self.fail.replace(false) {
            return Err(digital::ErrorKind::Other);
        }
        self.history.borrow_mut().push(high);
        Ok(())
    }
}

impl DigitalErrorType for MockOutputPin {
    type Error = digital::ErrorKind;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(true)
    }
}

/// Input pin fed from a queue of levels; reads low once the queue is empty
#[derive(Debug, Clone, Default)]
pub struct MockInputPin {
    levels: Rc<RefCell<VecDeque<bool>>>,
}

impl MockInputPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the bits of `byte`, MSB first
    pub fn queue_byte(&self, byte: u8) {
        let mut levels = self.levels.borrow_mut();
        for bit in (0..8).rev() {
            levels.push_back(byte & (1 << bit) != 0);
        }
    }
}

impl DigitalErrorType for MockInputPin {
    type Error = digital::ErrorKind;
}

impl InputPin for MockInputPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(self.levels.borrow_mut().pop_front().unwrap_or(false))
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

// =============================================================================
// Mock SPI Bus
// =============================================================================

#[derive(Debug, Default)]
struct SpiState {
    responses: VecDeque<u8>,
    written: Vec<u8>,
    flushed: bool,
}

/// SPI bus that records outgoing bytes and replays queued responses
#[derive(Debug, Clone, Default)]
pub struct MockSpiBus {
    state: Rc<RefCell<SpiState>>,
}

impl MockSpiBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_response(&self, bytes: &[u8]) {
        self.state.borrow_mut().responses.extend(bytes.iter().copied());
    }

    pub fn written(&self) -> Vec<u8> {
        self.state.borrow().written.clone()
    }

    pub fn flushed(&self) -> bool {
        self.state.borrow().flushed
    }

    fn clock(&self, byte: u8) -> u8 {
        let mut state = self.state.borrow_mut();
        state.written.push(byte);
        state.responses.pop_front().unwrap_or(0)
    }
}

impl SpiErrorType for MockSpiBus {
    type Error = spi::ErrorKind;
}

impl SpiBus for MockSpiBus {
    fn read(&mut self, words: &mut [u8]) -> core::result::Result<(), Self::Error> {
        for word in words.iter_mut() {
            *word = self.clock(0);
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> core::result::Result<(), Self::Error> {
        for &word in words {
            self.clock(word);
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> core::result::Result<(), Self::Error> {
        let len = read.len().max(write.len());
        for i in 0..len {
            let incoming = self.clock(write.get(i).copied().unwrap_or(0));
            if let Some(slot) = read.get_mut(i) {
                *slot = incoming;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> core::result::Result<(), Self::Error> {
        for word in words.iter_mut() {
            *word = self.clock(*word);
        }
        Ok(())
    }

    fn flush(&mut self) -> core::result::Result<(), Self::Error> {
        self.state.borrow_mut().flushed = true;
        Ok(())
    }
}

// =============================================================================
// Mock PHY
// =============================================================================

/// PHY register file for testing the PHY helpers without a MAC
#[derive(Debug, Clone, Default)]
pub struct MockPhy {
    registers: [u16; 32],
}

impl MockPhy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, reg: u8, value: u16) {
        self.registers[reg as usize & 0x1F] = value;
    }

    pub fn get(&self, reg: u8) -> u16 {
        self.registers[reg as usize & 0x1F]
    }
}

impl PhyAccess for MockPhy {
    fn read_phy(&mut self, reg: u8) -> Result<u16> {
        Ok(self.get(reg))
    }

    fn write_phy(&mut self, reg: u8, value: u16) -> Result<()> {
        self.set(reg, value);
        Ok(())
    }
}

// =============================================================================
// Self Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::register::{Bank, eth};

    #[test]
    fn mock_chip_starts_in_reset_state() {
        let chip = MockChip::new();
        assert_eq!(chip.register(eth::EREVID), MOCK_REVISION);
        assert_eq!(chip.register(eth::ECON2), ECON2_AUTOINC);
        assert_eq!(chip.selected_bank(), 0);
        assert_eq!(chip.phy_register(0x02), 0x0083);
    }

    #[test]
    fn mock_chip_common_registers_alias_all_banks() {
        let chip = MockChip::new();
        chip.set_register(eth::ECON1, Bank::Bank2 as u8);
        let mut transport = chip.clone();
        transport.select().unwrap();
        transport.exchange(0x1F).unwrap();
        assert_eq!(transport.exchange(0).unwrap(), Bank::Bank2 as u8);
        transport.deselect().unwrap();
    }

    #[test]
    fn mock_chip_idle_without_frame_logs_nothing() {
        let mut chip = MockChip::new();
        chip.idle().unwrap();
        assert!(chip.transactions().is_empty());
    }

    #[test]
    fn mock_delay_shares_counter() {
        use embedded_hal::delay::DelayNs;

        let delay = MockDelay::new();
        let mut handle = delay.clone();
        handle.delay_us(25);
        assert_eq!(delay.total_us(), 25);
    }
}
