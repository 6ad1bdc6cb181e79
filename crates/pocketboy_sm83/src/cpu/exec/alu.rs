use crate::cpu::{Bus, Cpu, Flag, WideReg};

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_alu_reg_group(&mut self, opcode: u8) {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(src);

        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }
    }

    pub(super) fn exec_alu_imm(&mut self, opcode: u8) {
        let value = self.fetch8();

        match opcode {
            0xC6 => self.alu_add(value, false),
            0xCE => self.alu_add(value, true),
            0xD6 => self.alu_sub(value, false),
            0xDE => self.alu_sub(value, true),
            0xE6 => self.alu_and(value),
            0xEE => self.alu_xor(value),
            0xF6 => self.alu_or(value),
            0xFE => self.alu_cp(value),
            _ => unreachable!(),
        }
    }

    /// Unprefixed rotates of A. These share the rotation core with the
    /// CB-prefixed forms but always report Z=0.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a;
        let result = match opcode {
            0x07 => self.alu_rlc(a),
            0x0F => self.alu_rrc(a),
            0x17 => self.alu_rl(a),
            0x1F => self.alu_rr(a),
            _ => unreachable!(),
        };
        self.set_flag(Flag::Z, false);
        self.regs.a = result;
    }

    /// ADD HL,rr: flags from the 16-bit add, result staged into HL
    /// around the internal cycle.
    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.regs.wide(WideReg::from_rp(opcode >> 4));
        let result = self.alu_add16_hl(value);
        self.store_wide_staged(WideReg::Hl, result);
    }

    /// ADD SP,e8: four cycles. Both trailing cycles are internal; SP
    /// takes its new value after the last one.
    pub(super) fn exec_add_sp_r8(&mut self) {
        let imm = self.fetch8();
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.idle_cycle();
        self.idle_cycle();
        self.regs.sp = result;
    }

    /// LD HL,SP+e8: three cycles, same flag rule as ADD SP,e8.
    pub(super) fn exec_ld_hl_sp_r8(&mut self) {
        let imm = self.fetch8();
        let base = self.regs.sp;
        let result = self.alu_add16_signed(base, imm);
        self.idle_cycle();
        self.regs.set_hl(result);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
    }

    pub(super) fn exec_ccf(&mut self) {
        self.toggle_flag(Flag::C);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
    }
}
