use std::fmt;

/// # Instructions
/// The closed set of Chip-8 operations, each carrying its decoded operands.
///
/// Operand conventions:
/// - `x`, `y` register indices 0x0..=0xF
/// - `nn` an immediate byte
/// - `n` a 4-bit row count
/// - `addr` a 12-bit address
///
/// Instructions are pure data; `Chip8::execute` gives them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `0nnn` machine code routine; inert
    SystemCall { addr: u16 },
    /// `00E0`
    ClearDisplay,
    /// `00EE`
    Return,
    /// `1nnn`
    Goto { addr: u16 },
    /// `2nnn`
    Call { addr: u16 },
    /// `3xnn`
    SkipIfEqual { x: u8, nn: u8 },
    /// `4xnn`
    SkipIfNotEqual { x: u8, nn: u8 },
    /// `5xy0`
    SkipIfRegistersEqual { x: u8, y: u8 },
    /// `6xnn`
    SetRegister { x: u8, nn: u8 },
    /// `7xnn`
    AddImmediate { x: u8, nn: u8 },
    /// `8xy0`
    Assign { x: u8, y: u8 },
    /// `8xy1`
    Or { x: u8, y: u8 },
    /// `8xy2`
    And { x: u8, y: u8 },
    /// `8xy3`
    Xor { x: u8, y: u8 },
    /// `8xy4`
    AddRegisters { x: u8, y: u8 },
    /// `8xy5`
    Subtract { x: u8, y: u8 },
    /// `8xy6`
    ShiftRight { x: u8 },
    /// `8xy7`
    ReverseSubtract { x: u8, y: u8 },
    /// `8xyE`
    ShiftLeft { x: u8 },
    /// `9xy0`
    SkipIfRegistersNotEqual { x: u8, y: u8 },
    /// `Annn`
    SetIndex { addr: u16 },
    /// `Bnnn`
    JumpWithOffset { addr: u16 },
    /// `Cxnn`
    AndRandom { x: u8, nn: u8 },
    /// `Dxyn`
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E`
    SkipIfKeyPressed { x: u8 },
    /// `ExA1`
    SkipIfKeyNotPressed { x: u8 },
    /// `Fx07`
    GetDelayTimer { x: u8 },
    /// `Fx0A`
    WaitForKey { x: u8 },
    /// `Fx15`
    SetDelayTimer { x: u8 },
    /// `Fx18`
    SetSoundTimer { x: u8 },
    /// `Fx1E`
    AddToIndex { x: u8 },
    /// `Fx29`
    SetIndexToGlyph { x: u8 },
    /// `Fx33`
    StoreBcd { x: u8 },
    /// `Fx55`
    DumpRegisters { x: u8 },
    /// `Fx65`
    LoadRegisters { x: u8 },
}

fn xy(group: u16, x: u8, y: u8, n: u16) -> u16 {
    group << 12 | u16::from(x & 0xF) << 8 | u16::from(y & 0xF) << 4 | n
}

fn xnn(group: u16, x: u8, nn: u8) -> u16 {
    group << 12 | u16::from(x & 0xF) << 8 | u16::from(nn)
}

fn nnn(group: u16, addr: u16) -> u16 {
    group << 12 | addr & 0x0FFF
}

impl Instruction {
    /// The canonical word for this instruction.
    /// Operands are truncated to their field widths and unused nibbles are zero.
    ///
    /// A `SystemCall` whose address ends in `E0` or `EE` encodes to a word that
    /// decodes as `ClearDisplay` or `Return`.
    pub fn encode(&self) -> u16 {
        use Instruction::*;

        match *self {
            SystemCall { addr } => nnn(0x0, addr),
            ClearDisplay => 0x00E0,
            Return => 0x00EE,
            Goto { addr } => nnn(0x1, addr),
            Call { addr } => nnn(0x2, addr),
            SkipIfEqual { x, nn } => xnn(0x3, x, nn),
            SkipIfNotEqual { x, nn } => xnn(0x4, x, nn),
            SkipIfRegistersEqual { x, y } => xy(0x5, x, y, 0x0),
            SetRegister { x, nn } => xnn(0x6, x, nn),
            AddImmediate { x, nn } => xnn(0x7, x, nn),
            Assign { x, y } => xy(0x8, x, y, 0x0),
            Or { x, y } => xy(0x8, x, y, 0x1),
            And { x, y } => xy(0x8, x, y, 0x2),
            Xor { x, y } => xy(0x8, x, y, 0x3),
            AddRegisters { x, y } => xy(0x8, x, y, 0x4),
            Subtract { x, y } => xy(0x8, x, y, 0x5),
            ShiftRight { x } => xy(0x8, x, 0, 0x6),
            ReverseSubtract { x, y } => xy(0x8, x, y, 0x7),
            ShiftLeft { x } => xy(0x8, x, 0, 0xE),
            SkipIfRegistersNotEqual { x, y } => xy(0x9, x, y, 0x0),
            SetIndex { addr } => nnn(0xA, addr),
            JumpWithOffset { addr } => nnn(0xB, addr),
            AndRandom { x, nn } => xnn(0xC, x, nn),
            Draw { x, y, n } => xy(0xD, x, y, u16::from(n & 0xF)),
            SkipIfKeyPressed { x } => xnn(0xE, x, 0x9E),
            SkipIfKeyNotPressed { x } => xnn(0xE, x, 0xA1),
            GetDelayTimer { x } => xnn(0xF, x, 0x07),
            WaitForKey { x } => xnn(0xF, x, 0x0A),
            SetDelayTimer { x } => xnn(0xF, x, 0x15),
            SetSoundTimer { x } => xnn(0xF, x, 0x18),
            AddToIndex { x } => xnn(0xF, x, 0x1E),
            SetIndexToGlyph { x } => xnn(0xF, x, 0x29),
            StoreBcd { x } => xnn(0xF, x, 0x33),
            DumpRegisters { x } => xnn(0xF, x, 0x55),
            LoadRegisters { x } => xnn(0xF, x, 0x65),
        }
    }
}

/// Renders the conventional assembly mnemonic, e.g. `LD V1, 0x22`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            SystemCall { addr } => write!(f, "SYS {:#05X}", addr),
            ClearDisplay => write!(f, "CLS"),
            Return => write!(f, "RET"),
            Goto { addr } => write!(f, "JP {:#05X}", addr),
            Call { addr } => write!(f, "CALL {:#05X}", addr),
            SkipIfEqual { x, nn } => write!(f, "SE V{:X}, {:#04X}", x, nn),
            SkipIfNotEqual { x, nn } => write!(f, "SNE V{:X}, {:#04X}", x, nn),
            SkipIfRegistersEqual { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            SetRegister { x, nn } => write!(f, "LD V{:X}, {:#04X}", x, nn),
            AddImmediate { x, nn } => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Assign { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddRegisters { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Subtract { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x } => write!(f, "SHR V{:X}", x),
            ReverseSubtract { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x } => write!(f, "SHL V{:X}", x),
            SkipIfRegistersNotEqual { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            SetIndex { addr } => write!(f, "LD I, {:#05X}", addr),
            JumpWithOffset { addr } => write!(f, "JP V0, {:#05X}", addr),
            AndRandom { x, nn } => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipIfKeyPressed { x } => write!(f, "SKP V{:X}", x),
            SkipIfKeyNotPressed { x } => write!(f, "SKNP V{:X}", x),
            GetDelayTimer { x } => write!(f, "LD V{:X}, DT", x),
            WaitForKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelayTimer { x } => write!(f, "LD DT, V{:X}", x),
            SetSoundTimer { x } => write!(f, "LD ST, V{:X}", x),
            AddToIndex { x } => write!(f, "ADD I, V{:X}", x),
            SetIndexToGlyph { x } => write!(f, "LD F, V{:X}", x),
            StoreBcd { x } => write!(f, "LD B, V{:X}", x),
            DumpRegisters { x } => write!(f, "LD [I], V{:X}", x),
            LoadRegisters { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
