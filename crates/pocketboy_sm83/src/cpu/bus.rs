use std::fmt;

/// Abstraction over the memory bus seen by the CPU.
///
/// `read` and `write` are total: a bus decides for itself what unmapped
/// regions return (commonly `0xFF`) and whether writes to ROM are
/// discarded. The CPU never interprets addresses.
///
/// The remaining methods are stub seams for hardware the core does not
/// model. `DI`, `EI` and `RETI` report the interrupt-master-enable value
/// they would have set, and `HALT`/`STOP` announce themselves; an
/// interrupt controller or clock control can hook these without any
/// change to the decoder. The defaults do nothing.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);

    /// Called by `DI` (false) and by `EI`/`RETI` (true).
    fn set_interrupt_master_enable(&mut self, _enabled: bool) {}

    /// Called when `HALT` executes. The core itself keeps running.
    fn enter_halt(&mut self) {}

    /// Called when `STOP` executes. The core itself keeps running.
    fn enter_stop(&mut self) {}
}

/// Direction of a bus transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryAccessMode {
    Read,
    Write,
}

impl fmt::Display for MemoryAccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryAccessMode::Read => f.write_str("read"),
            MemoryAccessMode::Write => f.write_str("write"),
        }
    }
}

/// A single recorded bus transaction.
///
/// For reads, `data` is the value returned to the CPU; for writes it is
/// the value stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryAccess {
    pub address: u16,
    pub data: u8,
    pub mode: MemoryAccessMode,
}

/// Error vocabulary for bus implementations that want to reject an
/// access.
///
/// The CPU itself never raises this: the [`Bus`] operations are total.
/// It exists so embedder buses that police address ranges can report
/// violations in a common shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("bad memory access: {mode} at {address:#06X}")]
pub struct BadMemoryAccess {
    pub address: u16,
    pub mode: MemoryAccessMode,
}

/// Flat 64 KiB open bus used by tests and the tracer binary.
///
/// Every address is plain RAM: reads return the last value written there
/// and default to zero. The bus additionally records its most recent
/// transaction and a running transaction count, which is what a per-cycle
/// observer uses to classify a machine cycle as a read, a write, or an
/// internal cycle with no bus activity.
pub struct OpenBus {
    memory: [u8; 0x10000],
    last_access: Option<MemoryAccess>,
    access_count: u64,
}

impl OpenBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            last_access: None,
            access_count: 0,
        }
    }

    /// Read a byte without recording a transaction.
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    /// Write a byte without recording a transaction. Used to seed memory
    /// before a run.
    #[inline]
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    /// Copy `bytes` into memory starting at `base`, wrapping at the top
    /// of the address space.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            let addr = base.wrapping_add(offset as u16);
            self.memory[addr as usize] = byte;
        }
    }

    /// The most recent transaction, if any access has happened yet.
    #[inline]
    pub fn last_access(&self) -> Option<MemoryAccess> {
        self.last_access
    }

    /// Total number of read/write transactions since construction or the
    /// last `clear`.
    #[inline]
    pub fn access_count(&self) -> u64 {
        self.access_count
    }

    /// Zero all memory and forget the transaction history.
    pub fn clear(&mut self) {
        self.memory.fill(0);
        self.last_access = None;
        self.access_count = 0;
    }
}

impl Default for OpenBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for OpenBus {
    fn read(&mut self, addr: u16) -> u8 {
        let value = self.memory[addr as usize];
        self.last_access = Some(MemoryAccess {
            address: addr,
            data: value,
            mode: MemoryAccessMode::Read,
        });
        self.access_count += 1;
        value
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
        self.last_access = Some(MemoryAccess {
            address: addr,
            data: value,
            mode: MemoryAccessMode::Write,
        });
        self.access_count += 1;
    }
}
