use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, TICKS_PER_SECOND};
use chip8_core::FrameBuffer;

use crate::keymap::keymap;
use crate::Machine;

const SCALE: usize = 10;

/// # Window
/// An SDL2 window showing the 64x32 Chip-8 display, scaled up.
/// It gets a call to `render` once per frame.
pub struct Window {
    canvas: sdl2::render::WindowCanvas,
}

impl Window {
    /// Creates a window bound to an sdl2 context.
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self> {
        let video_subsystem = sdl.video().map_err(anyhow::Error::msg)?;
        let window = video_subsystem
            .window(
                "Chip-8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .context("unable to open window")?;
        let canvas = window
            .into_canvas()
            .build()
            .context("unable to create canvas")?;

        Ok(Window { canvas })
    }

    /// Formats a FrameBuffer for rendering as an SDL2 RGB24 texture.
    ///
    /// An SDL2 texture is a 1D array of bytes that represent concatenated rows of RGB pixels,
    /// so every pixel becomes three 0 or 255 intensities.
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .rows()
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&lit| std::iter::repeat(if lit { 255 } else { 0 }).take(3))
            .collect()
    }

    /// Formats the FrameBuffer as an SDL2 RGB24 texture and renders it.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<()> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .context("unable to create texture")?;

        let pixels = Window::frame_to_sdl_texture(frame);
        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&pixels);
            })
            .map_err(anyhow::Error::msg)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(anyhow::Error::msg)?;
        self.canvas.present();
        Ok(())
    }
}

/// Drives the interpreter from the SDL2 event loop
/// - one `tick` per 60Hz frame, sleeping off whatever time is left
/// - Space held fast-forwards, Escape or closing the window quits
pub fn run(mut chip8: Machine) -> Result<()> {
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut window = Window::new(&sdl)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let frame_time = Duration::from_secs(1) / TICKS_PER_SECOND;
    // Whether or not the frame rate should be respected
    let mut fast_forward = false;

    'event: loop {
        let frame_start = Instant::now();

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.input_mut().press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.input_mut().release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        chip8
            .tick()
            .with_context(|| format!("program stopped at {:#05X}", chip8.pc()))?;
        window.render(chip8.display())?;

        let elapsed = frame_start.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}
