use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chip8_core::constants::{DEFAULT_INSTRUCTIONS_PER_TICK, ROM_ADDR};
use chip8_core::{
    disassemble, AddressPolicy, Chip8, Config, FrameBuffer, Keypad, LogTracer, ReturnPolicy,
};

#[cfg(feature = "sdl")]
mod keymap;
mod run;
#[cfg(feature = "sdl")]
mod window;

/// The interpreter as wired up by this binary.
pub type Machine = Chip8<FrameBuffer, Keypad, StdRng>;

/// Runs a Chip-8 ROM.
#[derive(Parser, Debug)]
#[command(name = "chip8", version)]
struct Args {
    /// Path to the ROM image
    rom: PathBuf,

    /// Instructions executed per 60Hz frame
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_TICK)]
    ipt: usize,

    /// Run this many frames without a window and print the final display
    #[arg(long)]
    frames: Option<u64>,

    /// Seed for the random number generator behind Cxnn
    #[arg(long)]
    seed: Option<u64>,

    /// Hold down a key (0-F) for the whole headless run; may be repeated
    #[arg(long = "key", value_parser = parse_key)]
    keys: Vec<u8>,

    /// Log every executed instruction at trace level
    #[arg(long)]
    trace: bool,

    /// Print a listing of the ROM instead of running it
    #[arg(long)]
    disassemble: bool,

    /// Stop with an error when a return finds an empty stack
    #[arg(long)]
    halt_on_empty_return: bool,

    /// Stop with an error on any access outside memory
    #[arg(long, conflicts_with = "wrap_addresses")]
    strict_addresses: bool,

    /// Wrap out-of-range addresses into memory
    #[arg(long)]
    wrap_addresses: bool,
}

fn parse_key(key: &str) -> Result<u8> {
    let key = u8::from_str_radix(key, 16).with_context(|| format!("{:?} is not a hex key", key))?;
    if key > 0xF {
        bail!("key {:X} is outside of 0-F", key);
    }
    Ok(key)
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::default().instructions_per_tick(self.ipt);
        if self.halt_on_empty_return {
            config = config.return_policy(ReturnPolicy::Fault);
        }
        if self.strict_addresses {
            config = config.address_policy(AddressPolicy::Strict);
        }
        if self.wrap_addresses {
            config = config.address_policy(AddressPolicy::Wrap);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let rom = fs::read(&args.rom)
        .with_context(|| format!("unable to read {}", args.rom.display()))?;
    log::info!("read {} bytes from {}", rom.len(), args.rom.display());

    if args.disassemble {
        for line in disassemble(&rom, ROM_ADDR) {
            println!("{}", line);
        }
        return Ok(());
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut keypad = Keypad::new();
    for key in &args.keys {
        keypad.press(*key);
    }

    let mut chip8: Machine = Chip8::with_config(&rom, FrameBuffer::new(), keypad, rng, args.config())
        .context("unable to load ROM")?;
    if args.trace {
        chip8.set_tracer(Some(Box::new(LogTracer)));
    }

    match args.frames {
        Some(frames) => headless(&mut chip8, frames),
        None => interactive(chip8),
    }
}

fn headless(chip8: &mut Machine, frames: u64) -> Result<()> {
    print!("{}", run::run_headless(chip8, frames)?);
    Ok(())
}

#[cfg(feature = "sdl")]
fn interactive(chip8: Machine) -> Result<()> {
    window::run(chip8)
}

/// Without a window the best we can do is a second's worth of frames.
#[cfg(not(feature = "sdl"))]
fn interactive(mut chip8: Machine) -> Result<()> {
    log::warn!("built without the `sdl` feature; running headless");
    headless(&mut chip8, u64::from(chip8_core::constants::TICKS_PER_SECOND))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("a").unwrap(), 0xA);
        assert_eq!(parse_key("F").unwrap(), 0xF);
        assert!(parse_key("10").is_err());
        assert!(parse_key("g").is_err());
    }

    #[test]
    fn test_args_map_onto_config() {
        let args = Args::parse_from([
            "chip8",
            "game.ch8",
            "--ipt",
            "8",
            "--halt-on-empty-return",
            "--wrap-addresses",
        ]);
        let config = args.config();
        assert_eq!(config.instructions_per_tick, 8);
        assert_eq!(config.return_policy, ReturnPolicy::Fault);
        assert_eq!(config.address_policy, AddressPolicy::Wrap);
    }

    #[test]
    fn test_conflicting_address_flags_are_rejected() {
        let result = Args::try_parse_from([
            "chip8",
            "game.ch8",
            "--strict-addresses",
            "--wrap-addresses",
        ]);
        assert!(result.is_err());
    }
}
