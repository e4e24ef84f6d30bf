use std::io;
use thiserror::Error;

/// Fatal conditions raised while the processor is running.
///
/// Every variant stops the machine; nothing is retried.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("unknown instruction {opcode:#010b} at pc {pc:#04x}")]
    UnknownInstruction { opcode: u8, pc: u8 },
    #[error("unknown instruction class in {opcode:#010b} at pc {pc:#04x}")]
    UnknownClass { opcode: u8, pc: u8 },
    #[error("division by zero at pc {pc:#04x}")]
    DivideByZero { pc: u8 },
    #[error("register index {index} out of range at pc {pc:#04x}")]
    InvalidRegister { index: u8, pc: u8 },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program: {0}")]
    Io(#[from] io::Error),
    #[error("program is {0} bytes, memory holds 256")]
    ProgramTooLarge(usize),
}

/// Raised by the pure instruction decoder; the processor attaches the pc.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown instruction class in {0:#010b}")]
    UnknownClass(u8),
    #[error("unknown opcode {0:#010b}")]
    UnknownOpcode(u8),
}
