//! Cycle-accurate emulator core for the Sharp SM83 (the "LR35902" CPU of
//! the Game Boy).
//!
//! The crate models the CPU only: its register file, the full unprefixed
//! and CB-prefixed opcode tables, and the exact machine-cycle schedule of
//! every instruction. Memory, timers, the PPU and the interrupt
//! controller live behind the [`Bus`] trait; the CPU announces the stub
//! instructions (`DI`/`EI`/`RETI`/`HALT`/`STOP`) through default-no-op
//! hooks on that trait so an external controller can be attached without
//! touching the decoder.
//!
//! Every bus read or write is immediately followed by exactly one machine
//! cycle, and instructions that burn time without touching the bus emit
//! bare "internal" cycles. An optional observer installed with
//! [`Cpu::set_on_tick`] is invoked once per machine cycle with a
//! read-only [`CpuView`] of the core, which is how a host measures time
//! and verifies per-cycle bus traffic.
//!
//! ```
//! use pocketboy_sm83::{Cpu, CpuState, OpenBus};
//!
//! let mut bus = OpenBus::new();
//! bus.poke(0x0000, 0x3C); // INC A
//! let mut cpu = Cpu::new(bus);
//! cpu.reset(CpuState::default());
//!
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 1);
//! assert_eq!(cpu.a(), 0x01);
//! assert_eq!(cpu.pc(), 0x0001);
//! ```

pub mod cpu;

pub use cpu::{
    BadMemoryAccess, Bus, Cpu, CpuState, CpuView, Flag, MemoryAccess, MemoryAccessMode, OpenBus,
    Registers, StepError,
};
