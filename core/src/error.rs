use thiserror::Error;

use crate::decode::DecodeError;

/// Everything that can stop a running program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    UnknownOpcode(#[from] DecodeError),
    #[error("address {address:#06X} is outside of memory")]
    AddressOutOfRange { address: usize },
    #[error("return with an empty call stack at {pc:#05X}")]
    StackUnderflow { pc: u16 },
    #[error("ROM of {len} bytes does not fit in {max} bytes of program memory")]
    RomTooLarge { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
