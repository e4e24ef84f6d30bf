use std::io::Write;

use super::super::instruction::GenericOp;
use super::super::{Ls8, Operands};
use crate::error::ProcessorError;

impl Ls8 {
    pub(in crate::processor) fn exec_generic<W: Write>(&mut self, op: GenericOp, operands: Operands, out: &mut W) -> Result<(), ProcessorError> {
        match op {
            GenericOp::LDI => self.write_reg(operands.a, operands.b)?,
            GenericOp::ST => {
                let addr = self.read_reg(operands.a)?;
                let data = self.read_reg(operands.b)?;

                self.ram.write(addr, data);
            }
            GenericOp::PUSH => {
                let data = self.read_reg(operands.a)?;
                self.push(data);
            }
            GenericOp::POP => {
                self.check_reg(operands.a)?;
                let data = self.pop();
                self.write_reg(operands.a, data)?;
            }
            GenericOp::PRN => {
                let data = self.read_reg(operands.a)?;
                writeln!(out, "{}", data)?;
            }
        }

        Ok(())
    }

    pub(in crate::processor) fn push(&mut self, data: u8) {
        let sp = self.reg.sp().wrapping_sub(1);

        self.reg.set_sp(sp);
        self.ram.write(sp, data);
    }

    pub(in crate::processor) fn pop(&mut self) -> u8 {
        let sp = self.reg.sp();
        let data = self.ram.read(sp);

        self.reg.set_sp(sp.wrapping_add(1));

        data
    }
}
