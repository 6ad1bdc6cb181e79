mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod regs;

use std::fmt;

pub use bus::{BadMemoryAccess, Bus, MemoryAccess, MemoryAccessMode, OpenBus};
pub use regs::{Flag, Registers};

pub(crate) use regs::WideReg;

/// Snapshot of the externally visible register file.
///
/// Used to seed the CPU via [`Cpu::reset`] and by test harnesses to
/// describe expected final states; not a runtime entity. `Default` is the
/// all-zero state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub f: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

/// Errors that abort a single [`Cpu::step`].
///
/// Both are fatal to the current instruction. Machine cycles emitted
/// before the failure are not rolled back, so a caller that wants to
/// continue after an error should `reset` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// One of the 11 architecturally undefined SM83 opcodes was fetched.
    #[error("illegal opcode {0:#04X}")]
    IllegalOpcode(u8),
    /// The fetched opcode has no handler. Carries the extended opcode
    /// (`0xCBnn` for prefixed instructions). The finished decoder covers
    /// both tables in full, so this is only ever seen by embedders
    /// wiring up partial cores of their own.
    #[error("opcode not implemented: {0:#06X}")]
    OpcodeNotImplemented(u16),
}

type OnTick<B> = dyn FnMut(CpuView<'_, B>);

/// SM83 CPU core.
///
/// The CPU owns exactly one bus for its whole lifetime and drives it in
/// machine-cycle steps: every `read`/`write` is followed by one cycle,
/// and instructions that spend time on internal ALU work emit bare
/// cycles with no bus traffic. [`Cpu::step`] runs one instruction.
pub struct Cpu<B: Bus> {
    bus: B,
    pub(crate) regs: Registers,
    cycles: u64,
    on_tick: Option<Box<OnTick<B>>>,
}

impl<B: Bus> fmt::Debug for Cpu<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("cycles", &self.cycles)
            .field("on_tick", &self.on_tick.is_some())
            .finish_non_exhaustive()
    }
}

/// Read-only view of the CPU handed to the cycle observer.
///
/// The observer may inspect registers, flags and the bus, but has no way
/// to mutate the core; that restriction is what makes it safe to call
/// from inside an instruction.
pub struct CpuView<'a, B: Bus> {
    cpu: &'a Cpu<B>,
}

impl<B: Bus> CpuView<'_, B> {
    #[inline]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.cpu.b()
    }

    #[inline]
    pub fn c(&self) -> u8 {
        self.cpu.c()
    }

    #[inline]
    pub fn d(&self) -> u8 {
        self.cpu.d()
    }

    #[inline]
    pub fn e(&self) -> u8 {
        self.cpu.e()
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.cpu.f()
    }

    #[inline]
    pub fn h(&self) -> u8 {
        self.cpu.h()
    }

    #[inline]
    pub fn l(&self) -> u8 {
        self.cpu.l()
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.cpu.af()
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.cpu.bc()
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.cpu.de()
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.cpu.hl()
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.cpu.flag(flag)
    }

    /// Machine cycles elapsed since the last reset, including the cycle
    /// currently being observed.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// Shared view of the bus, e.g. to inspect the transaction that this
    /// cycle carried.
    #[inline]
    pub fn bus(&self) -> &B {
        &self.cpu.bus
    }
}

impl<B: Bus> Cpu<B> {
    /// Execute exactly one instruction (including the second byte of a
    /// CB-prefixed one) and return the number of machine cycles it took.
    ///
    /// On an illegal opcode the fetch cycle has already been emitted and
    /// PC has already advanced past the offending byte when the error is
    /// returned.
    pub fn step(&mut self) -> Result<u32, StepError> {
        let start = self.cycles;
        let opcode = self.fetch8();
        self.exec_opcode(opcode)?;
        Ok((self.cycles - start) as u32)
    }

    /// Install the per-cycle observer, replacing any previous one.
    pub fn set_on_tick<F>(&mut self, callback: F)
    where
        F: FnMut(CpuView<'_, B>) + 'static,
    {
        self.on_tick = Some(Box::new(callback));
    }

    /// Remove the per-cycle observer.
    pub fn clear_on_tick(&mut self) {
        self.on_tick = None;
    }

    /// Advance time by one machine cycle and notify the observer.
    ///
    /// This is the single funnel every cycle goes through; the helpers in
    /// `helpers.rs` pair it with the bus operations.
    pub(crate) fn tick(&mut self) {
        self.cycles += 1;
        // Take the callback out for the duration of the call so it can
        // borrow the CPU immutably through the view.
        if let Some(mut callback) = self.on_tick.take() {
            callback(CpuView { cpu: self });
            self.on_tick = Some(callback);
        }
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.regs.b
    }

    #[inline]
    pub fn c(&self) -> u8 {
        self.regs.c
    }

    #[inline]
    pub fn d(&self) -> u8 {
        self.regs.d
    }

    #[inline]
    pub fn e(&self) -> u8 {
        self.regs.e
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.regs.f
    }

    #[inline]
    pub fn h(&self) -> u8 {
        self.regs.h
    }

    #[inline]
    pub fn l(&self) -> u8 {
        self.regs.l
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.regs.af()
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.regs.bc()
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.regs.de()
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.regs.hl()
    }

    /// Machine cycles elapsed since the last reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consume the CPU and hand the bus back.
    pub fn into_bus(self) -> B {
        self.bus
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.regs.f & flag as u8 != 0
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= flag as u8;
        } else {
            self.regs.f &= !(flag as u8);
        }
    }

    #[inline]
    pub(crate) fn toggle_flag(&mut self, flag: Flag) {
        self.regs.f ^= flag as u8;
    }

    /// Replace the whole flag register in one assignment.
    ///
    /// Most ALU operations define all four flags at once; composing F
    /// here keeps the low nibble zero by construction. Operations that
    /// preserve a flag pass its current value back in.
    #[inline]
    pub(crate) fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.regs.f = u8::from(z) << 7 | u8::from(n) << 6 | u8::from(h) << 5 | u8::from(c) << 4;
    }
}
