//! vm80 - CP/M machine emulator
//!
//! Main entry point for the CP/M host: a generic CP/M machine with
//! sixteen 8" floppy drives and an ADM-3A terminal in a window.

use std::path::PathBuf;
use std::sync::Arc;
use vm80::emulator::graphics::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vm80::emulator::keymap::key_to_ascii;
use vm80::emulator::{EmulatorState, FontRom};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Fixed-name bitmap font read from the working directory
const FONT_FILE: &str = "font8x16.bin";

/// Application state for winit event loop
struct App {
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    emulator: Option<EmulatorState>,
    font: Option<FontRom>,
    disk_images: Vec<Option<PathBuf>>,
    ctrl_held: bool,
}

impl App {
    fn new(font: FontRom, disk_images: Vec<Option<PathBuf>>) -> Self {
        Self {
            window: None,
            surface: None,
            emulator: None,
            font: Some(font),
            disk_images,
            ctrl_held: false,
        }
    }
}

/// Open a wgpu device on a window-backed surface, leaving the surface
/// configured at the terminal's fixed size
///
/// Returns the surface together with the device, queue and texture
/// format the renderer draws with.
fn init_gpu(
    window: Arc<Window>,
) -> (
    wgpu::Surface<'static>,
    wgpu::Device,
    wgpu::Queue,
    wgpu::TextureFormat,
) {
    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
    let surface = instance
        .create_surface(window)
        .expect("no drawing surface for the terminal window");

    // Any adapter able to present to the surface will do; an 80x24
    // terminal makes no demands worth negotiating over
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        compatible_surface: Some(&surface),
        ..Default::default()
    }))
    .expect("no graphics adapter can drive the terminal window");

    let (device, queue) = pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("vm80 terminal"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: wgpu::MemoryHints::default(),
        },
        None,
    ))
    .expect("graphics device request failed");

    // Prefer an sRGB format so the phosphor gray renders the same
    // everywhere
    let caps = surface.get_capabilities(&adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .unwrap_or(caps.formats[0]);

    surface.configure(
        &device,
        &wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        },
    );

    (surface, device, queue, format)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attrs = Window::default_attributes()
            .with_title("vm80 - CP/M")
            .with_inner_size(winit::dpi::PhysicalSize::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("terminal window creation failed"),
        );

        let (surface, device, queue, format) = init_gpu(window.clone());

        // Boot the machine: mounts drives and loads the boot sector
        let font = self.font.take().expect("font consumed twice");
        let emulator = match EmulatorState::new(device, queue, format, font, &self.disk_images) {
            Ok(emulator) => emulator,
            Err(e) => {
                eprintln!("Failed to start machine: {}", e);
                std::process::exit(1);
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.surface = Some(surface);
        self.emulator = Some(emulator);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.ctrl_held = modifiers.state().control_key();
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state == ElementState::Pressed {
                    if let Some(byte) = key_to_ascii(&key_event.logical_key, self.ctrl_held) {
                        if let Some(emulator) = &mut self.emulator {
                            emulator.push_key(byte);
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(emulator), Some(surface), Some(window)) =
                    (&mut self.emulator, &self.surface, &self.window)
                else {
                    return;
                };

                // Run the machine for a frame's worth of steps
                emulator.update();

                if emulator.halted() {
                    event_loop.exit();
                    return;
                }

                match surface.get_current_texture() {
                    Ok(frame) => {
                        emulator.render(&frame);
                        frame.present();
                        window.request_redraw();
                    }
                    // A lost or outdated surface heals on its own;
                    // draw again on the next redraw
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        window.request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        eprintln!("GPU out of memory, shutting down");
                        event_loop.exit();
                    }
                    Err(e) => {
                        eprintln!("Dropped a frame: {}", e);
                        window.request_redraw();
                    }
                }
            }
            _ => {}
        }
    }
}

/// Parse `--drive_a path` .. `--drive_p path` (short forms -da..-dp)
/// into the sixteen drive slots
fn parse_args(args: &[String]) -> Vec<Option<PathBuf>> {
    let mut disk_images: Vec<Option<PathBuf>> = vec![None; 16];

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        let letter = arg
            .strip_prefix("--drive_")
            .or_else(|| arg.strip_prefix("-d"))
            .and_then(|rest| {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ 'a'..='p'), None) => Some(c),
                    _ => None,
                }
            });

        match (arg, letter) {
            ("--help", _) | ("-h", _) => {
                println!("vm80 - CP/M machine emulator");
                println!();
                println!("Usage: {} [OPTIONS]", args[0]);
                println!();
                println!("Options:");
                println!("  -da, --drive_a <PATH>  Disk image for drive A (boot drive)");
                println!("  ...");
                println!("  -dp, --drive_p <PATH>  Disk image for drive P");
                println!("  --help, -h             Show this help message");
                println!();
                println!("Disk images are 8\" 250 KB CP/M floppies (128 x 26 x 77).");
                println!("The terminal font is read from {} in the", FONT_FILE);
                println!("working directory.");
                std::process::exit(0);
            }
            (_, Some(letter)) => {
                if i + 1 >= args.len() {
                    eprintln!("Error: {} requires a disk image path", arg);
                    std::process::exit(1);
                }
                let slot = letter as usize - 'a' as usize;
                disk_images[slot] = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    disk_images
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let disk_images = parse_args(&args);

    if disk_images[0].is_none() {
        eprintln!("Error: drive A must hold a disk image to boot from");
        eprintln!("Use --help for usage information");
        std::process::exit(1);
    }

    // Named images must exist before the machine comes up
    for (slot, path) in disk_images.iter().enumerate() {
        if let Some(path) = path {
            if !path.exists() {
                eprintln!(
                    "Error: disk image '{}' for drive {} does not exist",
                    path.display(),
                    (b'A' + slot as u8) as char
                );
                std::process::exit(1);
            }
            println!("Drive {}: {}", (b'A' + slot as u8) as char, path.display());
        }
    }

    let font = match FontRom::load(std::path::Path::new(FONT_FILE)) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Failed to load font '{}': {}", FONT_FILE, e);
            std::process::exit(1);
        }
    };

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run app
    let mut app = App::new(font, disk_images);
    event_loop
        .run_app(&mut app)
        .expect("Failed to run event loop");
}
