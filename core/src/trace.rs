use crate::constants::REGISTER_COUNT;
use crate::instruction::Instruction;

/// The machine as it was just before `instruction` executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    /// Address the instruction was fetched from.
    pub pc: u16,
    pub word: u16,
    pub instruction: Instruction,
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
}

/// Receives one event per executed instruction.
pub trait Tracer {
    fn trace(&mut self, event: &TraceEvent);
}

/// Forwards events to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&mut self, event: &TraceEvent) {
        log::trace!(
            "pc{:04X} {:04X} {:<16} v{:02X?} i{:04X}",
            event.pc,
            event.word,
            event.instruction.to_string(),
            event.v,
            event.i
        );
    }
}

/// Keeps every event; handy for tests and debuggers.
impl Tracer for Vec<TraceEvent> {
    fn trace(&mut self, event: &TraceEvent) {
        self.push(*event);
    }
}

/// Lets a caller keep a handle on a tracer after handing it to the interpreter.
impl<T: Tracer> Tracer for std::rc::Rc<std::cell::RefCell<T>> {
    fn trace(&mut self, event: &TraceEvent) {
        self.borrow_mut().trace(event);
    }
}
