mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu, StepError};

impl<B: Bus> Cpu<B> {
    /// Decode and execute a single opcode.
    ///
    /// The match is exhaustive over `0x00..=0xFF` with no catch-all arm,
    /// so the compiler proves the primary table has no holes. Handlers
    /// emit their own machine cycles; by the time an arm returns, the
    /// instruction's full cycle schedule has been played out.
    pub(super) fn exec_opcode(&mut self, opcode: u8) -> Result<(), StepError> {
        match opcode {
            // NOP
            0x00 => {}

            // 16-bit immediate loads.
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(opcode),

            // LD (BC/DE/HL±), A
            0x02 | 0x12 | 0x22 | 0x32 => self.exec_ld_indirect_a(opcode),

            // 16-bit INC rr
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16_rr(opcode),

            // INC r
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => self.exec_inc8_reg(opcode),

            // DEC r
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => self.exec_dec8_reg(opcode),

            // LD r, d8 (and LD (HL), d8)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => self.exec_ld_r_d8(opcode),

            // Rotate A instructions (unprefixed).
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            // LD (a16), SP
            0x08 => self.exec_ld_a16_sp(),

            // ADD HL, rr (16-bit)
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),

            // LD A, (BC/DE/HL±)
            0x0A | 0x1A | 0x2A | 0x3A => self.exec_ld_a_indirect(opcode),

            // 16-bit DEC rr
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16_rr(opcode),

            // STOP
            0x10 => self.exec_stop(),

            // JR r8 (relative)
            0x18 => self.jr(true),

            // JR cc, r8
            0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr_cc(opcode),

            // DAA
            0x27 => self.alu_daa(),

            // CPL
            0x2F => self.exec_cpl(),

            // SCF
            0x37 => self.exec_scf(),

            // CCF
            0x3F => self.exec_ccf(),

            // HALT sits in the middle of the LD r,r' block.
            0x76 => self.exec_halt(),

            // 8-bit register/memory transfers: LD r1, r2
            0x40..=0x7F => self.exec_ld_r_r(opcode),

            // 8-bit ALU operations on A: ADD/ADC/SUB/SBC/AND/XOR/OR/CP r,(HL)
            0x80..=0xBF => self.exec_alu_reg_group(opcode),

            // RET cc
            0xC0 | 0xC8 | 0xD0 | 0xD8 => self.exec_ret_cc(opcode),

            // POP rr
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop_rr(opcode),

            // JP cc, a16
            0xC2 | 0xCA | 0xD2 | 0xDA => self.exec_jp_cc(opcode),

            // JP a16
            0xC3 => self.exec_jp_a16(),

            // CALL cc, a16
            0xC4 | 0xCC | 0xD4 | 0xDC => self.exec_call_cc(opcode),

            // PUSH rr
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push_rr(opcode),

            // 8-bit ALU immediate operations on A
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.exec_alu_imm(opcode),

            // RST nn
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(opcode),

            // RET
            0xC9 => self.ret(),

            // CB prefix: bit operations, shifts, and rotates.
            0xCB => self.exec_cb(),

            // CALL a16
            0xCD => self.exec_call_a16(),

            // RETI
            0xD9 => self.exec_reti(),

            // LDH (a8),A / LDH A,(a8)
            0xE0 | 0xF0 => self.exec_ldh_a8(opcode),

            // LDH (C),A / LDH A,(C)
            0xE2 | 0xF2 => self.exec_ldh_c(opcode),

            // ADD SP, r8
            0xE8 => self.exec_add_sp_r8(),

            // JP (HL)
            0xE9 => self.exec_jp_hl(),

            // LD (a16),A / LD A,(a16)
            0xEA | 0xFA => self.exec_ld_a16_a(opcode),

            // DI
            0xF3 => self.exec_di(),

            // LD HL, SP+r8
            0xF8 => self.exec_ld_hl_sp_r8(),

            // LD SP, HL
            0xF9 => self.exec_ld_sp_hl(),

            // EI
            0xFB => self.exec_ei(),

            // The 11 opcode holes. Architecturally undefined; the step
            // fails with no side effects beyond the fetch already made.
            0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
                return Err(self.illegal_opcode(opcode));
            }
        }

        Ok(())
    }
}
