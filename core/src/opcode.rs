/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Decoding is cased on:
/// - `(n, _, _, _)` the group; applies to all opcodes
/// - `(_, _, _, n)` the variant within group 0x8
/// - `(_, _, n, n)` the variant within groups 0x0, 0xE and 0xF
///
/// The remaining nibbles carry operands.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an immediate byte assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx, or the bound of the range V0..=Vx
/// - `(_, _, n, _)` the register Vy
pub trait Opcode {
    /// The leading nibble.
    /// `[g___]`
    fn group(&self) -> u8;

    /// The second nibble.
    /// `[_x__]`
    fn x(&self) -> u8;

    /// The third nibble.
    /// `[__y_]`
    fn y(&self) -> u8;

    /// The trailing nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The low byte.
    /// `[__nn]`
    fn nn(&self) -> u8;

    /// The low 12 bits.
    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn group(&self) -> u8 {
        (self >> 12) as u8
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combines two consecutive memory bytes into an opcode word.
pub fn word(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_is_big_endian() {
        assert_eq!(word(0xAB, 0xCD), 0xABCD);
    }

    #[test]
    fn test_nibbles() {
        let op: u16 = 0xABCD;
        assert_eq!((op.group(), op.x(), op.y(), op.n()), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_nn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nn(), 0xCD);
    }

    #[test]
    fn test_nnn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nnn(), 0x0BCD);
    }
}
