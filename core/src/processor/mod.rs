pub mod instruction;
pub mod ram;
pub mod register;
mod execution;

use std::io::Write;

use self::instruction::{AluOp, Instruction, Opcode};
use self::ram::Ram;
use self::register::{Flags, Register};
use crate::error::{DecodeError, LoadError, ProcessorError};

pub struct Ls8 {
    reg: Register,
    ram: Ram,
    running: bool,
}

/// Operand bytes following an instruction; missing operands read as 0.
#[derive(Copy, Clone, Debug, Default)]
struct Operands {
    a: u8,
    b: u8,
}

impl Ls8 {
    pub fn new() -> Ls8 {
        Ls8 {
            reg: Register::new(),
            ram: Ram::new(),
            running: true,
        }
    }

    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.ram.load(program)
    }

    /// Runs until HLT or a fatal error. Printed values are written to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), ProcessorError> {
        log::info!("run from pc {:02x}", self.reg.pc);

        while self.running {
            self.step(out)?;
        }

        log::info!("halted at pc {:02x}", self.reg.pc);
        Ok(())
    }

    /// Executes a single instruction. Any error stops the machine.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<(), ProcessorError> {
        if !self.running {
            return Ok(());
        }

        let result = self.clock(out);
        if result.is_err() {
            self.running = false;
        }

        result
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pc(&self) -> u8 {
        self.reg.pc
    }

    pub fn register(&self, idx: u8) -> Option<u8> {
        self.reg.get(idx)
    }

    pub fn sp(&self) -> u8 {
        self.reg.sp()
    }

    pub fn flags(&self) -> Flags {
        self.reg.fl
    }

    pub fn read_ram(&self, addr: u8) -> u8 {
        self.ram.read(addr)
    }

    fn clock<W: Write>(&mut self, out: &mut W) -> Result<(), ProcessorError> {
        let pc = self.reg.pc;
        let raw_op = self.ram.read(pc);
        let inst = Instruction::decode(raw_op).map_err(|err| match err {
            DecodeError::UnknownClass(opcode) => ProcessorError::UnknownClass { opcode, pc },
            DecodeError::UnknownOpcode(opcode) => ProcessorError::UnknownInstruction { opcode, pc },
        })?;
        let operands = self.fetch_operands(pc, inst.operand_count);

        log::debug!("op: {:02x} {:?} {:?}, {}", raw_op, inst.opcode, operands, &self.reg);

        match inst.opcode {
            Opcode::HLT => {
                self.running = false;
            }
            Opcode::Generic(op) => {
                self.exec_generic(op, operands, out)?;
                self.reg.inc_pc(inst.size());
            }
            Opcode::Alu(op) => {
                if op == AluOp::DIV && self.read_reg(operands.b)? == 0 {
                    return Err(ProcessorError::DivideByZero { pc });
                }

                self.exec_alu(op, operands)?;
                self.reg.inc_pc(inst.size());
            }
            Opcode::Jump(op) => {
                self.exec_jump(op, operands.a, inst.operand_count)?;
            }
        }

        Ok(())
    }

    fn fetch_operands(&self, pc: u8, operand_count: u8) -> Operands {
        let mut operands = Operands::default();

        if operand_count > 0 {
            operands.a = self.ram.read(pc.wrapping_add(1));
        }
        if operand_count > 1 {
            operands.b = self.ram.read(pc.wrapping_add(2));
        }

        operands
    }

    fn check_reg(&self, idx: u8) -> Result<(), ProcessorError> {
        self.read_reg(idx).map(|_| ())
    }

    fn read_reg(&self, idx: u8) -> Result<u8, ProcessorError> {
        self.reg.get(idx).ok_or(ProcessorError::InvalidRegister { index: idx, pc: self.reg.pc })
    }

    fn write_reg(&mut self, idx: u8, data: u8) -> Result<(), ProcessorError> {
        let pc = self.reg.pc;
        self.reg.set(idx, data).ok_or(ProcessorError::InvalidRegister { index: idx, pc })
    }
}

impl Default for Ls8 {
    fn default() -> Self {
        Ls8::new()
    }
}
