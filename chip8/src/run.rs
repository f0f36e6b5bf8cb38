use anyhow::{Context, Result};

use crate::Machine;

/// Runs `frames` ticks as fast as possible and returns the final display as text.
pub fn run_headless(chip8: &mut Machine, frames: u64) -> Result<String> {
    for frame in 0..frames {
        chip8
            .tick()
            .with_context(|| format!("program stopped at {:#05X} in frame {}", chip8.pc(), frame))?;
    }
    log::info!(
        "ran {} frames; pc {:#05X}, sound {}",
        frames,
        chip8.pc(),
        if chip8.is_sound_active() { "on" } else { "off" }
    );
    Ok(chip8.display().to_string())
}
