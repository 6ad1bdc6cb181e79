//! Minimal execution tracer for flat SM83 binary images.
//!
//! Loads a raw image at address 0 of an open bus, runs a bounded number
//! of instructions from the given entry point, and prints the final
//! register file. Per-step traces go to the log, so
//! `RUST_LOG=debug sm83_trace image.bin 150 500` shows each instruction.

use anyhow::{Context, Result};
use pocketboy_sm83::{Cpu, CpuState, OpenBus};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image_path = args
        .next()
        .context("Usage: sm83_trace <image> [entry_pc_hex] [max_steps]")?;
    let entry = match args.next() {
        Some(raw) => u16::from_str_radix(raw.trim_start_matches("0x"), 16)
            .with_context(|| format!("invalid entry point '{raw}'"))?,
        None => 0,
    };
    let max_steps: u64 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid step budget '{raw}'"))?,
        None => 100,
    };

    let image = std::fs::read(&image_path)
        .with_context(|| format!("failed to read image '{image_path}'"))?;

    let mut bus = OpenBus::new();
    bus.load(0x0000, &image);
    let mut cpu = Cpu::new(bus);
    cpu.reset(CpuState {
        sp: 0xFFFE,
        pc: entry,
        ..CpuState::default()
    });

    for step in 0..max_steps {
        let pc = cpu.pc();
        let opcode = cpu.bus().peek(pc);
        match cpu.step() {
            Ok(cycles) => {
                log::debug!(
                    "step {step}: PC=0x{pc:04X} op=0x{opcode:02X} ({cycles} cycles) AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} SP=0x{sp:04X}",
                    af = cpu.af(),
                    bc = cpu.bc(),
                    de = cpu.de(),
                    hl = cpu.hl(),
                    sp = cpu.sp(),
                );
            }
            Err(err) => {
                log::error!("step {step} at PC=0x{pc:04X}: {err}");
                break;
            }
        }
    }

    println!(
        "AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} SP=0x{:04X} PC=0x{:04X} ({} machine cycles)",
        cpu.af(),
        cpu.bc(),
        cpu.de(),
        cpu.hl(),
        cpu.sp(),
        cpu.pc(),
        cpu.cycles()
    );

    Ok(())
}
