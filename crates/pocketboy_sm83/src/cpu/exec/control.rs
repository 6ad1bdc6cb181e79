use crate::cpu::{Bus, Cpu, Flag};

impl<B: Bus> Cpu<B> {
    /// Branch condition from the `cc` field: 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    fn cc_condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.flag(Flag::Z),
            1 => self.flag(Flag::Z),
            2 => !self.flag(Flag::C),
            3 => self.flag(Flag::C),
            _ => false,
        }
    }

    pub(super) fn exec_jr_cc(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cc = (opcode >> 3) & 0x03;
        self.jr(self.cc_condition(cc));
    }

    pub(super) fn exec_jp_cc(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cc = (opcode >> 3) & 0x03;
        self.jp_cond(self.cc_condition(cc));
    }

    pub(super) fn exec_jp_a16(&mut self) {
        self.jp_cond(true);
    }

    /// JP (HL): one cycle, PC takes HL without any extra time.
    pub(super) fn exec_jp_hl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    pub(super) fn exec_call_cc(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cc = (opcode >> 3) & 0x03;
        self.call_cond(self.cc_condition(cc));
    }

    pub(super) fn exec_ret_cc(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cc = (opcode >> 3) & 0x03;
        self.ret_cond(self.cc_condition(cc));
    }
}
