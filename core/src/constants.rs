/// Total addressable memory in bytes (0x000..=0xFFF).
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to addresses under the wrapping address policy.
pub const ADDRESS_MASK: usize = MEMORY_SIZE - 1;

/// Where the font sprite sheet is written at construction.
pub const FONT_ADDR: u16 = 0x050;

/// Where ROMs are loaded into memory; also the initial program counter.
pub const ROM_ADDR: u16 = 0x200;

/// Largest ROM image that fits between `ROM_ADDR` and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - ROM_ADDR as usize;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// VF doubles as the carry, borrow and collision flag.
pub const FLAG_REGISTER: usize = 0xF;

/// Fetch/decode/execute cycles performed per call to `tick`.
pub const DEFAULT_INSTRUCTIONS_PER_TICK: usize = 16;

/// Rate at which hosts are expected to call `tick`.
pub const TICKS_PER_SECOND: u32 = 60;

/// Each font glyph is 5 rows of 8 pixels (only the high nibble is used).
pub const GLYPH_HEIGHT: u16 = 5;

/// # Sprite sheet
/// Hexadecimal digits 0..F, each drawn as a 4x5 sprite.
///
/// ```text
/// 0xF0 ####
/// 0x90 #  #
/// 0x90 #  #
/// 0x90 #  #
/// 0xF0 ####
/// ```
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
