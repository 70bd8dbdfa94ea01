//! altair - Altair 8800 emulator
//!
//! Console host for Altair BASIC on an emulated 8800 with a 2SIO
//! board. Good enough to run 4K BASIC, 8K BASIC and Extended BASIC.

use std::fs;
use std::io::{self, Read, Write};
use termion::raw::IntoRawMode;
use vm80::components::altair::AltairSio;
use vm80::cpu::Cpu;
use vm80::memory::Memory;

/// BASIC ROM images and the answers to their boot questions
/// (memory size, then terminal width / features)
const BASIC_4K: (&str, &str) = ("altair_basic_bin/4kbas40.bin", "65529\r\rY\r");
const BASIC_8K: (&str, &str) = ("altair_basic_bin/8kbas.bin", "65529\r\rY\r");
const BASIC_EXTENDED: (&str, &str) = ("altair_basic_bin/exbas.bin", "65529\rY\r");

struct Options {
    program: &'static str,
    init: &'static str,
    autorun_file: Option<String>,
}

fn parse_args(args: &[String]) -> Options {
    let mut version: Option<(&'static str, &'static str)> = None;
    let mut autorun_file = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-4" | "--4k" => {
                version = pick_version(version, BASIC_4K);
                i += 1;
            }
            "-8" | "--8k" => {
                version = pick_version(version, BASIC_8K);
                i += 1;
            }
            "-e" | "--extended" => {
                version = pick_version(version, BASIC_EXTENDED);
                i += 1;
            }
            "-f" | "--autorun_file" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: {} requires a file path", args[i]);
                    std::process::exit(1);
                }
                autorun_file = Some(args[i + 1].clone());
                i += 2;
            }
            "--help" | "-h" => {
                println!("altair - Altair 8800 emulator running Altair BASIC");
                println!();
                println!("Usage: {} [OPTIONS]", args[0]);
                println!();
                println!("Options:");
                println!("  -4, --4k                Load 4K BASIC");
                println!("  -8, --8k                Load 8K BASIC (default)");
                println!("  -e, --extended          Load Extended BASIC");
                println!("  -f, --autorun_file <F>  BASIC listing to type in on startup");
                println!("  --help, -h              Show this help message");
                println!();
                println!("ESC sends BASIC a break (^C); Ctrl-C leaves the emulator.");
                std::process::exit(0);
            }
            arg => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    let (program, init) = version.unwrap_or(BASIC_8K);
    Options {
        program,
        init,
        autorun_file,
    }
}

fn pick_version(
    current: Option<(&'static str, &'static str)>,
    wanted: (&'static str, &'static str),
) -> Option<(&'static str, &'static str)> {
    if current.is_some() {
        eprintln!("Error: -4, -8 and -e are mutually exclusive");
        std::process::exit(1);
    }
    Some(wanted)
}

fn run(options: &Options) -> io::Result<()> {
    let mut cpu = Cpu::new();
    let mut mem = Memory::new();
    let mut sio = AltairSio::new();

    let program = fs::read(options.program)?;
    mem.load(&program, 0);

    // Answer the boot questions, then type in the autorun listing
    sio.push_input_bytes(options.init.as_bytes());
    if let Some(path) = &options.autorun_file {
        let listing = fs::read_to_string(path)?;
        for line in listing.lines() {
            sio.push_input_bytes(line.as_bytes());
            sio.push_input(b'\r');
        }
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock().into_raw_mode()?;
    let mut stdin = termion::async_stdin().bytes();

    cpu.halted = false;
    while !cpu.halted {
        if let Some(ch) = sio.take_output() {
            // Raw mode does no output processing; expand LF ourselves
            if ch == b'\n' {
                stdout.write_all(b"\r\n")?;
            } else if ch != b'\r' {
                stdout.write_all(&[ch])?;
            }
            stdout.flush()?;
        }

        if let Some(Ok(byte)) = stdin.next() {
            match byte {
                // Ctrl-C leaves the emulator (raw mode eats SIGINT)
                0x03 => break,
                // Enter becomes CR + NUL
                b'\r' | b'\n' => sio.push_input_bytes(&[0x0D, 0x00]),
                // ESC is BASIC's break
                0x1B => sio.push_input(0x03),
                _ => sio.push_input(byte),
            }
        }

        cpu.step(&mut mem, &mut sio);
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    if let Err(e) = run(&options) {
        eprintln!("altair: {}", e);
        std::process::exit(1);
    }
}
