//! exerciser - Run 8080EX1 to test emulation correctness
//!
//! Loads the exerciser HEX image and a BDOS-emulator HEX that answers
//! the console system calls it makes, then runs from 0x0100 until the
//! exerciser halts. Each instruction group prints its own PASSED or
//! ERROR line through the stub console.

use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use vm80::cpu::Cpu;
use vm80::io::IoDevice;
use vm80::memory::Memory;

const DEFAULT_PROGRAM: &str = "8080exer/8080EX1.HEX";
const DEFAULT_BDOS: &str = "8080exer/bdos-emu.hex";

/// Console stub: input reads 0, output prints 7-bit ASCII
struct StubIo;

impl IoDevice for StubIo {
    fn read_u8(&mut self, _port: u8, _mem: &mut Memory) -> Option<u8> {
        Some(0)
    }

    fn write_u8(&mut self, _port: u8, value: u8, _mem: &mut Memory) {
        print!("{}", (value & 0x7F) as char);
        let _ = io::stdout().flush();
    }
}

fn run(program_file: &str, bdos_file: &str) -> io::Result<()> {
    let mut cpu = Cpu::new();
    let mut mem = Memory::new();
    let mut io = StubIo;

    mem.load_hex(&fs::read_to_string(program_file)?)?;
    mem.load_hex(&fs::read_to_string(bdos_file)?)?;

    cpu.pc = 0x0100;
    cpu.run(&mut mem, &mut io);
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_file = args.get(1).map(String::as_str).unwrap_or(DEFAULT_PROGRAM);
    let bdos_file = args.get(2).map(String::as_str).unwrap_or(DEFAULT_BDOS);

    let start = Instant::now();
    println!("Starting the exerciser. This is going to take a while.");
    println!();

    if let Err(e) = run(program_file, bdos_file) {
        eprintln!("exerciser: {}", e);
        std::process::exit(1);
    }

    println!();
    println!("Finished in {:.1?}.", start.elapsed());
}
