use thiserror::Error;

use crate::instruction::Instruction;
use crate::opcode::Opcode;

/// A word inside groups 0x8, 0xE or 0xF that names no known variant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown opcode {word:#06X}")]
pub struct DecodeError {
    pub word: u16,
}

/// Selects the Instruction for a given opcode word.
///
/// Group 0x0 never fails: anything other than `00E0`/`00EE` is an inert `SYS nnn`.
pub fn decode(op: u16) -> Result<Instruction, DecodeError> {
    use Instruction::*;

    let (x, y, nn, addr) = (op.x(), op.y(), op.nn(), op.nnn());

    let instruction = match (op.group(), op.n()) {
        (0x0, _) => match nn {
            0xE0 => ClearDisplay,
            0xEE => Return,
            _ => SystemCall { addr },
        },
        (0x1, _) => Goto { addr },
        (0x2, _) => Call { addr },
        (0x3, _) => SkipIfEqual { x, nn },
        (0x4, _) => SkipIfNotEqual { x, nn },
        (0x5, _) => SkipIfRegistersEqual { x, y },
        (0x6, _) => SetRegister { x, nn },
        (0x7, _) => AddImmediate { x, nn },
        (0x8, 0x0) => Assign { x, y },
        (0x8, 0x1) => Or { x, y },
        (0x8, 0x2) => And { x, y },
        (0x8, 0x3) => Xor { x, y },
        (0x8, 0x4) => AddRegisters { x, y },
        (0x8, 0x5) => Subtract { x, y },
        (0x8, 0x6) => ShiftRight { x },
        (0x8, 0x7) => ReverseSubtract { x, y },
        (0x8, 0xE) => ShiftLeft { x },
        (0x9, _) => SkipIfRegistersNotEqual { x, y },
        (0xA, _) => SetIndex { addr },
        (0xB, _) => JumpWithOffset { addr },
        (0xC, _) => AndRandom { x, nn },
        (0xD, n) => Draw { x, y, n },
        (0xE, _) => match nn {
            0x9E => SkipIfKeyPressed { x },
            0xA1 => SkipIfKeyNotPressed { x },
            _ => return Err(DecodeError { word: op }),
        },
        (0xF, _) => match nn {
            0x07 => GetDelayTimer { x },
            0x0A => WaitForKey { x },
            0x15 => SetDelayTimer { x },
            0x18 => SetSoundTimer { x },
            0x1E => AddToIndex { x },
            0x29 => SetIndexToGlyph { x },
            0x33 => StoreBcd { x },
            0x55 => DumpRegisters { x },
            0x65 => LoadRegisters { x },
            _ => return Err(DecodeError { word: op }),
        },
        _ => return Err(DecodeError { word: op }),
    };

    Ok(instruction)
}
