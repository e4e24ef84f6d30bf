use std::cmp::Ordering;

use super::super::instruction::AluOp;
use super::super::{Ls8, Operands};
use crate::error::ProcessorError;

pub fn add(op0: u8, op1: u8) -> u8 {
    op0.wrapping_add(op1)
}

pub fn sub(op0: u8, op1: u8) -> u8 {
    op0.wrapping_sub(op1)
}

pub fn mul(op0: u8, op1: u8) -> u8 {
    op0.wrapping_mul(op1)
}

pub fn div(op0: u8, op1: u8) -> Option<u8> {
    op0.checked_div(op1)
}

pub fn cmp(op0: u8, op1: u8) -> Ordering {
    op0.cmp(&op1)
}

impl Ls8 {
    pub(in crate::processor) fn exec_alu(&mut self, op: AluOp, operands: Operands) -> Result<(), ProcessorError> {
        let op0 = self.read_reg(operands.a)?;
        let op1 = self.read_reg(operands.b)?;

        let res = match op {
            AluOp::ADD => add(op0, op1),
            AluOp::SUB => sub(op0, op1),
            AluOp::MUL => mul(op0, op1),
            AluOp::DIV => div(op0, op1).ok_or(ProcessorError::DivideByZero { pc: self.reg.pc })?,
            AluOp::CMP => {
                self.reg.fl.set_comparison(cmp(op0, op1));
                return Ok(());
            }
        };

        self.write_reg(operands.a, res)
    }
}
