//! Property-based tests for CPU invariants.
//!
//! These exercise the algebraic identities of the instruction set across
//! arbitrary register files: flag-register well-formedness, inverse
//! operation pairs, and rotation periodicity.

use pocketboy_sm83::{Cpu, CpuState, Flag, OpenBus};
use proptest::prelude::*;

/// The 11 opcode holes with no defined behaviour.
const ILLEGAL_OPCODES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

/// Every opcode with defined behaviour (0xCB is included and decodes
/// whatever second byte the program supplies).
fn defined_opcodes() -> Vec<u8> {
    (0u16..=0xFF)
        .map(|op| op as u8)
        .filter(|op| !ILLEGAL_OPCODES.contains(op))
        .collect()
}

/// Seed a CPU with `program` at PC and run `steps` instructions.
fn run_program(state: CpuState, program: &[u8], steps: usize) -> Cpu<OpenBus> {
    let mut bus = OpenBus::new();
    bus.load(state.pc, program);
    let mut cpu = Cpu::new(bus);
    cpu.reset(state);
    for _ in 0..steps {
        cpu.step().expect("step failed");
    }
    cpu
}

proptest! {
    /// The low nibble of F is unrepresentable, and AF is always the
    /// concatenation of A and F — straight out of reset...
    #[test]
    fn prop_reset_masks_f_and_af_concatenates(a in any::<u8>(), f in any::<u8>()) {
        let mut cpu = Cpu::new(OpenBus::new());
        cpu.reset(CpuState { a, f, ..CpuState::default() });
        prop_assert_eq!(cpu.f() & 0x0F, 0);
        prop_assert_eq!(cpu.af(), (u16::from(cpu.a()) << 8) | u16::from(cpu.f()));
    }

    /// ...and after executing any defined opcode over an arbitrary
    /// register file. Also bounds every instruction to 1–6 machine
    /// cycles.
    #[test]
    fn prop_defined_opcodes_preserve_flag_invariants(
        opcode in prop::sample::select(defined_opcodes()),
        cb in any::<u8>(),
        a in any::<u8>(),
        f in any::<u8>(),
        bc in any::<u16>(),
        de in any::<u16>(),
        hl in any::<u16>(),
        sp in any::<u16>(),
    ) {
        let state = CpuState {
            a,
            f,
            b: (bc >> 8) as u8,
            c: bc as u8,
            d: (de >> 8) as u8,
            e: de as u8,
            h: (hl >> 8) as u8,
            l: hl as u8,
            sp,
            pc: 0x4000,
        };
        // The byte after the opcode doubles as the CB selector and as an
        // ordinary operand; the rest of memory is zero.
        let cpu = run_program(state, &[opcode, cb], 1);

        prop_assert_eq!(cpu.f() & 0x0F, 0);
        prop_assert_eq!(cpu.af(), (u16::from(cpu.a()) << 8) | u16::from(cpu.f()));
        prop_assert_eq!(cpu.bc(), (u16::from(cpu.b()) << 8) | u16::from(cpu.c()));
        prop_assert_eq!(cpu.de(), (u16::from(cpu.d()) << 8) | u16::from(cpu.e()));
        prop_assert_eq!(cpu.hl(), (u16::from(cpu.h()) << 8) | u16::from(cpu.l()));
        prop_assert!((1..=6).contains(&cpu.cycles()));
    }

    /// ADD A,B then SUB A,B restores A regardless of flags.
    #[test]
    fn prop_add_then_sub_restores_a(a in any::<u8>(), b in any::<u8>(), f in any::<u8>()) {
        let state = CpuState { a, b, f, ..CpuState::default() };
        let cpu = run_program(state, &[0x80, 0x90], 2);
        prop_assert_eq!(cpu.a(), a);
    }

    /// SWAP is an involution, and leaves the documented flag profile.
    #[test]
    fn prop_swap_twice_is_identity(b in any::<u8>(), f in any::<u8>()) {
        let state = CpuState { b, f, ..CpuState::default() };
        let cpu = run_program(state, &[0xCB, 0x30, 0xCB, 0x30], 2);
        prop_assert_eq!(cpu.b(), b);
        prop_assert_eq!(cpu.flag(Flag::Z), b == 0);
        prop_assert!(!cpu.flag(Flag::N));
        prop_assert!(!cpu.flag(Flag::H));
        prop_assert!(!cpu.flag(Flag::C));
    }

    /// Eight RLCs walk every bit around the byte and back home.
    #[test]
    fn prop_rlc_eight_times_restores(c_reg in any::<u8>(), f in any::<u8>()) {
        let state = CpuState { c: c_reg, f, ..CpuState::default() };
        let program = [0xCB, 0x01].repeat(8);
        let cpu = run_program(state, &program, 8);
        prop_assert_eq!(cpu.c(), c_reg);
    }

    /// POP AF can never smuggle bits into the low nibble of F.
    #[test]
    fn prop_pop_af_masks_low_nibble(lo in any::<u8>(), hi in any::<u8>()) {
        let mut bus = OpenBus::new();
        bus.poke(0x0000, 0xF1);
        bus.poke(0xFFFC, lo);
        bus.poke(0xFFFD, hi);
        let mut cpu = Cpu::new(bus);
        cpu.reset(CpuState { sp: 0xFFFC, ..CpuState::default() });
        cpu.step().expect("step failed");

        prop_assert_eq!(cpu.a(), hi);
        prop_assert_eq!(cpu.f(), lo & 0xF0);
        prop_assert_eq!(cpu.af(), (u16::from(hi) << 8) | u16::from(lo & 0xF0));
        prop_assert_eq!(cpu.sp(), 0xFFFE);
    }
}
