use crate::constants::{
    FLAG_REGISTER, FONT, FONT_ADDR, MAX_ROM_SIZE, MEMORY_SIZE, REGISTER_COUNT, ROM_ADDR,
};
use crate::error::{Error, Result};

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Timers
/// - 2 8-bit timers (delay & sound), each decremented once per tick down to 0
///
/// ## Memory
/// - a call stack of return addresses with no fixed depth
/// - 4096 bytes of addressable memory
///     - 0x050..0x0A0 holds the font sprite sheet
///     - 0x200.. holds the ROM
///
/// ## Input
/// - `register_needing_key` is set while `Fx0A` waits for a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub stack: Vec<u16>,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub memory: [u8; MEMORY_SIZE],
    pub register_needing_key: Option<u8>,
}

impl State {
    /// Zeroed memory with the sprite sheet in place and the pc at the ROM entry point.
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font_start = FONT_ADDR as usize;
        memory[font_start..font_start + FONT.len()].copy_from_slice(&FONT);

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: ROM_ADDR,
            stack: Vec::new(),
            delay_timer: 0,
            sound_timer: 0,
            memory,
            register_needing_key: None,
        }
    }

    /// Copies a ROM image verbatim to 0x200.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                len: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = ROM_ADDR as usize;
        self.memory[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    pub fn register(&self, x: u8) -> u8 {
        self.v[x as usize & 0xF]
    }

    pub fn register_mut(&mut self, x: u8) -> &mut u8 {
        &mut self.v[x as usize & 0xF]
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = flag as u8;
    }

    /// Decrements both timers once, stopping at 0.
    pub fn advance_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
