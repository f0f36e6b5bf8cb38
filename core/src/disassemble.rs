use std::fmt;

use crate::decode::{decode, DecodeError};
use crate::instruction::Instruction;
use crate::opcode::word;

/// One two-byte slot of a program image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub address: u16,
    pub word: u16,
    /// `None` when the image ends halfway through this word.
    pub instruction: Option<Result<Instruction, DecodeError>>,
}

/// Decodes `image` two bytes at a time as if it were loaded at `origin`.
///
/// Data embedded in a ROM (sprites, tables) decodes as whatever it happens to look like.
pub fn disassemble(image: &[u8], origin: u16) -> Vec<Line> {
    image
        .chunks(2)
        .enumerate()
        .map(|(index, bytes)| {
            let address = origin.wrapping_add(2 * index as u16);
            match *bytes {
                [high, low] => {
                    let op = word(high, low);
                    Line {
                        address,
                        word: op,
                        instruction: Some(decode(op)),
                    }
                }
                [high] => Line {
                    address,
                    word: word(high, 0),
                    instruction: None,
                },
                _ => unreachable!("chunks(2) yields one or two bytes"),
            }
        })
        .collect()
}

/// `ADDR  WORD  MNEMONIC`
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instruction {
            Some(Ok(instruction)) => {
                write!(f, "{:03X}  {:04X}  {}", self.address, self.word, instruction)
            }
            Some(Err(_)) => write!(f, "{:03X}  {:04X}  ??", self.address, self.word),
            None => write!(f, "{:03X}  {:02X}    (truncated)", self.address, self.word >> 8),
        }
    }
}
