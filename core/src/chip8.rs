use crate::config::{AddressPolicy, Config};
use crate::constants::{ADDRESS_MASK, MEMORY_SIZE, REGISTER_COUNT};
use crate::decode::decode;
use crate::display::Display;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::instruction::Instruction;
use crate::opcode::word;
use crate::random::RandomSource;
use crate::state::State;
use crate::trace::{TraceEvent, Tracer};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns:
///  - the machine `state` (memory, registers, pc, I, stack, timers)
///  - the `display` it draws into and the `input` it reads keys from
///  - the `rng` behind `Cxnn`
///  - an optional `tracer` told about every executed instruction
///
/// One instance runs one ROM. Hosts call `tick` once per frame and render
/// `display()` afterwards; loading another ROM means building a new `Chip8`.
pub struct Chip8<D, I, R> {
    pub(crate) state: State,
    pub(crate) display: D,
    pub(crate) input: I,
    pub(crate) rng: R,
    config: Config,
    tracer: Option<Box<dyn Tracer>>,
}

impl<D: Display, I: Input, R: RandomSource> Chip8<D, I, R> {
    /// Builds an interpreter with the default `Config` and the ROM loaded at 0x200.
    pub fn new(rom: &[u8], display: D, input: I, rng: R) -> Result<Self> {
        Self::with_config(rom, display, input, rng, Config::default())
    }

    pub fn with_config(rom: &[u8], display: D, input: I, rng: R, config: Config) -> Result<Self> {
        let mut state = State::new();
        state.load_rom(rom)?;
        log::debug!("loaded {} byte ROM with {:?}", rom.len(), config);

        Ok(Chip8 {
            state,
            display,
            input,
            rng,
            config,
            tracer: None,
        })
    }

    /// Installs (or removes) the sink that receives a `TraceEvent` per instruction.
    pub fn set_tracer(&mut self, tracer: Option<Box<dyn Tracer>>) {
        self.tracer = tracer;
    }

    /// Advances the machine by one host frame
    /// - decrements both timers once
    /// - runs `instructions_per_tick` cycles
    ///
    /// Errors are fatal to the program; the pc is left just past the failing instruction.
    pub fn tick(&mut self) -> Result<()> {
        self.state.advance_timers();
        for _ in 0..self.config.instructions_per_tick {
            self.cycle()?;
        }
        Ok(())
    }

    /// Runs a single cycle
    /// - while awaiting a key, polls the input instead of fetching
    /// - otherwise fetches, decodes and executes the next instruction
    pub fn cycle(&mut self) -> Result<()> {
        if let Some(register) = self.state.register_needing_key {
            if let Some(key) = self.input.pending_key() {
                log::debug!("V{:X} received key {:X}", register, key);
                *self.state.register_mut(register) = key;
                self.state.register_needing_key = None;
            }
            return Ok(());
        }

        let pc = self.state.pc;
        let op = self.fetch()?;
        let instruction = decode(op)?;

        if let Some(tracer) = self.tracer.as_mut() {
            tracer.trace(&TraceEvent {
                pc,
                word: op,
                instruction,
                v: self.state.v,
                i: self.state.i,
            });
        }

        self.execute(instruction)
    }

    /// Reads the opcode at the pc and moves the pc on to the next one.
    fn fetch(&mut self) -> Result<u16> {
        let pc = self.state.pc as usize;
        let op = word(self.read(pc)?, self.read(pc + 1)?);
        self.state.pc = self.state.pc.wrapping_add(2);
        Ok(op)
    }

    /// Applies one instruction to the machine.
    pub fn execute(&mut self, instruction: Instruction) -> Result<()> {
        use Instruction::*;

        match instruction {
            SystemCall { .. } => {}
            ClearDisplay => self.clear_display(),
            Return => self.ret()?,
            Goto { addr } => self.goto(addr),
            Call { addr } => self.call(addr),
            SkipIfEqual { x, nn } => self.skip_if(self.state.register(x) == nn),
            SkipIfNotEqual { x, nn } => self.skip_if(self.state.register(x) != nn),
            SkipIfRegistersEqual { x, y } => {
                self.skip_if(self.state.register(x) == self.state.register(y))
            }
            SetRegister { x, nn } => self.set_register(x, nn),
            AddImmediate { x, nn } => self.add_immediate(x, nn),
            Assign { x, y } => self.assign(x, y),
            Or { x, y } => self.or(x, y),
            And { x, y } => self.and(x, y),
            Xor { x, y } => self.xor(x, y),
            AddRegisters { x, y } => self.add_registers(x, y),
            Subtract { x, y } => self.subtract(x, y),
            ShiftRight { x } => self.shift_right(x),
            ReverseSubtract { x, y } => self.reverse_subtract(x, y),
            ShiftLeft { x } => self.shift_left(x),
            SkipIfRegistersNotEqual { x, y } => {
                self.skip_if(self.state.register(x) != self.state.register(y))
            }
            SetIndex { addr } => self.set_index(addr),
            JumpWithOffset { addr } => self.jump_with_offset(addr),
            AndRandom { x, nn } => self.and_random(x, nn),
            Draw { x, y, n } => self.draw(x, y, n)?,
            SkipIfKeyPressed { x } => {
                self.skip_if(self.input.is_key_pressed(self.state.register(x)))
            }
            SkipIfKeyNotPressed { x } => {
                self.skip_if(!self.input.is_key_pressed(self.state.register(x)))
            }
            GetDelayTimer { x } => self.get_delay_timer(x),
            WaitForKey { x } => self.wait_for_key(x),
            SetDelayTimer { x } => self.set_delay_timer(x),
            SetSoundTimer { x } => self.set_sound_timer(x),
            AddToIndex { x } => self.add_to_index(x),
            SetIndexToGlyph { x } => self.set_index_to_glyph(x),
            StoreBcd { x } => self.store_bcd(x)?,
            DumpRegisters { x } => self.dump_registers(x)?,
            LoadRegisters { x } => self.load_registers(x)?,
        }
        Ok(())
    }

    /// Resolves an address according to the configured `AddressPolicy`.
    pub(crate) fn address(&self, address: usize) -> Result<usize> {
        match self.config.address_policy {
            AddressPolicy::Wrap => Ok(address & ADDRESS_MASK),
            AddressPolicy::Strict if address < MEMORY_SIZE => Ok(address),
            AddressPolicy::Strict => Err(Error::AddressOutOfRange { address }),
        }
    }

    pub(crate) fn read(&self, address: usize) -> Result<u8> {
        Ok(self.state.memory[self.address(address)?])
    }

    pub(crate) fn write(&mut self, address: usize, value: u8) -> Result<()> {
        let address = self.address(address)?;
        self.state.memory[address] = value;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.state.v
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn stack(&self) -> &[u16] {
        &self.state.stack
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    /// Whether a host should be sounding its beeper this frame.
    pub fn is_sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn memory(&self) -> &[u8] {
        &self.state.memory
    }

    pub fn is_waiting_for_key(&self) -> bool {
        self.state.register_needing_key.is_some()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
