use crate::cpu::{Bus, Cpu, StepError};

impl<B: Bus> Cpu<B> {
    /// STOP: three cycles (fetch plus two internal), matching the single
    /// step test vectors rather than the one-cycle figure in gbops. The
    /// padding byte is not consumed and the core does not stop; the bus
    /// hook carries the event to whoever models clock control.
    pub(super) fn exec_stop(&mut self) {
        self.bus.enter_stop();
        self.idle_cycle();
        self.idle_cycle();
    }

    /// HALT: same 3-cycle no-op schedule as STOP. Halt state belongs to
    /// the interrupt controller behind the bus hook.
    pub(super) fn exec_halt(&mut self) {
        self.bus.enter_halt();
        self.idle_cycle();
        self.idle_cycle();
    }

    pub(super) fn exec_di(&mut self) {
        self.bus.set_interrupt_master_enable(false);
    }

    pub(super) fn exec_ei(&mut self) {
        self.bus.set_interrupt_master_enable(true);
    }

    /// Build the error for one of the 11 opcode holes, logging the full
    /// register file first so a trapped run can be diagnosed from the
    /// log alone.
    pub(super) fn illegal_opcode(&mut self, opcode: u8) -> StepError {
        let opcode_addr = self.regs.pc.wrapping_sub(1);
        log::error!(
            "illegal opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            opcode = opcode,
            pc = opcode_addr,
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        StepError::IllegalOpcode(opcode)
    }
}
