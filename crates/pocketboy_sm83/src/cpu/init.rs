use super::{Bus, Cpu, CpuState, Registers};

impl<B: Bus> Cpu<B> {
    /// Create a CPU bound to `bus` for its whole lifetime.
    ///
    /// The register file starts zeroed; embedders that want the DMG
    /// post-boot register values seed them through [`Cpu::reset`].
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            regs: Registers::default(),
            cycles: 0,
            on_tick: None,
        }
    }

    /// Overwrite the entire visible register file from `state` and zero
    /// the machine-cycle counter.
    ///
    /// Pass `CpuState::default()` for the all-zero reset. The bus and the
    /// installed observer are left untouched.
    pub fn reset(&mut self, state: CpuState) {
        self.regs = Registers {
            a: state.a,
            // Lower 4 bits of F are always zero, even when the snapshot
            // says otherwise.
            f: state.f & 0xF0,
            b: state.b,
            c: state.c,
            d: state.d,
            e: state.e,
            h: state.h,
            l: state.l,
            sp: state.sp,
            pc: state.pc,
        };
        self.cycles = 0;
    }
}
