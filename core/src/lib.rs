//! A Chip-8 interpreter core: decoder, instruction set and virtual CPU.
//!
//! The host owns the frame loop; it calls [`Chip8::tick`] once per frame and
//! renders whatever [`Display`] implementation it handed to the interpreter.

pub use chip8::Chip8;
pub use config::{AddressPolicy, Config, ReturnPolicy};
pub use decode::{decode, DecodeError};
pub use disassemble::{disassemble, Line};
pub use display::{Display, FrameBuffer};
pub use error::{Error, Result};
pub use input::{Input, Keypad};
pub use instruction::Instruction;
pub use random::RandomSource;
pub use state::State;
pub use trace::{LogTracer, TraceEvent, Tracer};

mod chip8;
mod config;
pub mod constants;
mod decode;
mod disassemble;
mod display;
mod error;
mod input;
mod instruction;
pub mod opcode;
mod operations;
mod random;
mod state;
mod trace;
