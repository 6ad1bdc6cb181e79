use crate::cpu::{Bus, Cpu, WideReg};

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_inc8_reg(&mut self, opcode: u8) {
        debug_assert!(
            matches!(opcode, 0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C),
            "unexpected INC r opcode {opcode:#04x}"
        );

        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(reg);
        let result = self.alu_inc8(value);
        self.write_reg8(reg, result);
    }

    pub(super) fn exec_dec8_reg(&mut self, opcode: u8) {
        debug_assert!(
            matches!(opcode, 0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D),
            "unexpected DEC r opcode {opcode:#04x}"
        );

        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(reg);
        let result = self.alu_dec8(value);
        self.write_reg8(reg, result);
    }

    /// INC rr: no flags, two cycles. The result lands low byte first,
    /// with the internal cycle in between.
    pub(super) fn exec_inc16_rr(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let reg = WideReg::from_rp(opcode >> 4);
        let value = self.regs.wide(reg).wrapping_add(1);
        self.store_wide_staged(reg, value);
    }

    /// DEC rr: same schedule as INC rr.
    pub(super) fn exec_dec16_rr(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let reg = WideReg::from_rp(opcode >> 4);
        let value = self.regs.wide(reg).wrapping_sub(1);
        self.store_wide_staged(reg, value);
    }
}
