mod opcode;

pub use self::opcode::*;

use crate::error::DecodeError;

/// One decoded instruction byte, laid out as `AABCDDDD`.
///
/// `AA` is the operand count and bits 5-4 select the class
/// (`00` generic, `01` jump, `10` ALU).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub raw_op: u8,
    pub operand_count: u8,
    pub class: Class,
    pub opcode: Opcode,
}

impl Instruction {
    pub fn decode(raw_op: u8) -> Result<Instruction, DecodeError> {
        let operand_count = raw_op >> 6;
        let class = match (raw_op >> 4) & 0b11 {
            0b00 => Class::Generic,
            0b01 => Class::Jump,
            0b10 => Class::Alu,
            _ => return Err(DecodeError::UnknownClass(raw_op)),
        };

        let opcode = match class {
            Class::Generic if raw_op == HLT => Some(Opcode::HLT),
            Class::Generic => GenericOp::from_byte(raw_op).map(Opcode::Generic),
            Class::Jump => JumpOp::from_byte(raw_op).map(Opcode::Jump),
            Class::Alu => AluOp::from_byte(raw_op).map(Opcode::Alu),
        };
        let opcode = opcode.ok_or(DecodeError::UnknownOpcode(raw_op))?;

        Ok(Instruction {
            raw_op,
            operand_count,
            class,
            opcode,
        })
    }

    /// Distance from this instruction to the next one in memory.
    pub fn size(&self) -> u8 {
        self.operand_count + 1
    }
}
