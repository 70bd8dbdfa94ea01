//! Emulator state and coordination for the CP/M host
//!
//! This module manages the overall emulator state: CPU, memory, the
//! CP/M machine adapter, the terminal, and rendering.

use crate::components::cpm::CpmMachine;
use crate::components::terminal::{self, Terminal};
use crate::cpu::Cpu;
use crate::memory::Memory;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub mod graphics;
pub mod keymap;

use graphics::{FramebufferRenderer, DISPLAY_WIDTH};

/// CPU steps per rendered frame; roughly a 2 MHz 8080's worth of
/// instructions per 60 Hz frame
const INSTRUCTIONS_PER_FRAME: usize = 30_000;

/// Glyph cell size of the bitmap font
const GLYPH_WIDTH: usize = 8;
const GLYPH_HEIGHT: usize = 16;

/// Terminal foreground, a phosphor-ish gray
const FOREGROUND: u8 = 0xC8;
const BACKGROUND: u8 = 0x00;

// =============================================================================
// FontRom
// =============================================================================

/// An 8x16 bitmap font: 256 glyphs, one byte per row, MSB leftmost
pub struct FontRom {
    glyphs: Vec<u8>,
}

impl FontRom {
    /// Size of a complete font image in bytes
    pub const SIZE: usize = 256 * GLYPH_HEIGHT;

    /// Load the font from its file
    pub fn load(path: &Path) -> io::Result<Self> {
        let glyphs = fs::read(path)?;
        if glyphs.len() < Self::SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "font file {} is {} bytes, expected at least {}",
                    path.display(),
                    glyphs.len(),
                    Self::SIZE
                ),
            ));
        }
        Ok(Self { glyphs })
    }

    /// Rasterize the terminal into an RGBA framebuffer, inverting the
    /// cursor cell
    pub fn render(&self, term: &Terminal, framebuffer: &mut [u8]) {
        for row in 0..terminal::ROWS {
            for col in 0..terminal::COLUMNS {
                let cell = row * terminal::COLUMNS + col;
                let ch = term.buffer()[cell];
                let inverted = cell == term.cursor();
                self.render_glyph(framebuffer, col, row, ch, inverted);
            }
        }
    }

    /// Draw one character cell
    fn render_glyph(&self, framebuffer: &mut [u8], col: usize, row: usize, ch: u8, inverted: bool) {
        let (on, off) = if inverted {
            (BACKGROUND, FOREGROUND)
        } else {
            (FOREGROUND, BACKGROUND)
        };
        for scan_line in 0..GLYPH_HEIGHT {
            let bits = self.glyphs[ch as usize * GLYPH_HEIGHT + scan_line];
            let y = row * GLYPH_HEIGHT + scan_line;
            for bit in 0..GLYPH_WIDTH {
                let x = col * GLYPH_WIDTH + bit;
                let lit = bits & (0x80 >> bit) != 0;
                let color = if lit { on } else { off };
                let idx = (y * DISPLAY_WIDTH as usize + x) * 4;
                framebuffer[idx] = color;
                framebuffer[idx + 1] = color;
                framebuffer[idx + 2] = color;
                framebuffer[idx + 3] = 0xFF;
            }
        }
    }
}

// =============================================================================
// EmulatorState
// =============================================================================

/// Main emulator state for the CP/M host
pub struct EmulatorState {
    cpu: Cpu,
    memory: Memory,
    machine: CpmMachine,
    terminal: Terminal,
    font: FontRom,
    renderer: FramebufferRenderer,
    last_frame_time: Instant,
    target_frame_duration: Duration,
}

impl EmulatorState {
    /// Create a new emulator: mount the drives, boot from drive A,
    /// point the CPU at address 0
    pub fn new(
        device: wgpu::Device,
        queue: wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        font: FontRom,
        disk_images: &[Option<PathBuf>],
    ) -> io::Result<Self> {
        let mut memory = Memory::new();
        let machine = CpmMachine::new(disk_images, &mut memory)?;
        let cpu = Cpu::new();

        Ok(Self {
            cpu,
            memory,
            machine,
            terminal: Terminal::new(),
            font,
            renderer: FramebufferRenderer::new(device, queue, surface_format),
            last_frame_time: Instant::now(),
            target_frame_duration: Duration::from_micros(16667), // 60 FPS
        })
    }

    /// Whether the CPU has halted
    pub fn halted(&self) -> bool {
        self.cpu.halted
    }

    /// Queue one keyboard byte for the machine
    pub fn push_key(&mut self, byte: u8) {
        self.machine.push_input(byte);
    }

    /// Update emulator state for one frame
    ///
    /// Runs a batch of CPU steps, draining the console output latch
    /// into the terminal after every step so at most one byte is
    /// latched at a time, then sleeps off any remaining frame budget.
    pub fn update(&mut self) {
        let elapsed = self.last_frame_time.elapsed();

        for _ in 0..INSTRUCTIONS_PER_FRAME {
            if self.cpu.halted {
                break;
            }
            self.cpu.step(&mut self.memory, &mut self.machine);
            if let Some(ch) = self.machine.take_output() {
                self.terminal.putch(ch);
            }
        }

        if elapsed < self.target_frame_duration {
            std::thread::sleep(self.target_frame_duration - elapsed);
        }

        self.last_frame_time = Instant::now();
    }

    /// Render current frame to surface
    pub fn render(&mut self, surface_texture: &wgpu::SurfaceTexture) {
        let framebuffer = self.renderer.framebuffer_mut();
        self.font.render(&self.terminal, framebuffer);
        self.renderer.render(surface_texture);
    }
}
