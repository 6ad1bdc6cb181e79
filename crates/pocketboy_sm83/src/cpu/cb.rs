use super::{Bus, Cpu, Flag};

impl<B: Bus> Cpu<B> {
    /// Fetch and execute a CB-prefixed instruction (bit operations,
    /// shifts, and rotates).
    ///
    /// The second opcode byte costs one fetch cycle. Decoding follows
    /// the usual x/y/z split of the byte: `x` selects the operation
    /// class, `y` the sub-operation or bit index, `z` the operand.
    /// Operand index 6 is (HL), which adds a read cycle and, for the
    /// read-modify-write forms, a write cycle.
    pub(super) fn exec_cb(&mut self) {
        let cb = self.fetch8();
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        match x {
            0 => {
                // Rotates and shifts.
                let value = self.read_reg8(z);
                let result = match y {
                    0 => self.alu_rlc(value),
                    1 => self.alu_rrc(value),
                    2 => self.alu_rl(value),
                    3 => self.alu_rr(value),
                    4 => self.alu_sla(value),
                    5 => self.alu_sra(value),
                    6 => self.alu_swap(value),
                    7 => self.alu_srl(value),
                    _ => unreachable!(),
                };
                self.write_reg8(z, result);
            }
            1 => {
                // BIT b, r: test only, so the (HL) form never writes
                // back. C is preserved.
                let value = self.read_reg8(z);
                self.set_flag(Flag::Z, value & (1 << y) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            2 => {
                // RES b, r: flags untouched.
                let value = self.read_reg8(z);
                self.write_reg8(z, value & !(1 << y));
            }
            3 => {
                // SET b, r: flags untouched.
                let value = self.read_reg8(z);
                self.write_reg8(z, value | (1 << y));
            }
            _ => unreachable!(),
        }
    }
}
