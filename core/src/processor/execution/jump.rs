use super::super::instruction::JumpOp;
use super::super::register::Flags;
use super::super::Ls8;
use crate::error::ProcessorError;

/// Address of the instruction following one at `pc` with `operand_count` operands.
pub fn next_pc(pc: u8, operand_count: u8) -> u8 {
    pc.wrapping_add(operand_count + 1)
}

pub fn jeq(flags: &Flags, dest: u8, next: u8) -> u8 {
    branch(flags.equal(), dest, next)
}

pub fn jne(flags: &Flags, dest: u8, next: u8) -> u8 {
    branch(!flags.equal(), dest, next)
}

fn branch(is_branch: bool, dest: u8, next: u8) -> u8 {
    if is_branch { dest } else { next }
}

impl Ls8 {
    /// Jump instructions leave the pc pointing at whatever runs next,
    /// including the fallthrough when a branch is not taken.
    pub(in crate::processor) fn exec_jump(&mut self, op: JumpOp, reg_a: u8, operand_count: u8) -> Result<(), ProcessorError> {
        let next = next_pc(self.reg.pc, operand_count);

        let pc = match op {
            JumpOp::CALL => {
                self.check_reg(reg_a)?;
                self.push(next);
                self.read_reg(reg_a)?
            }
            JumpOp::RET => self.pop(),
            JumpOp::JMP => self.read_reg(reg_a)?,
            JumpOp::JEQ => jeq(&self.reg.fl, self.read_reg(reg_a)?, next),
            JumpOp::JNE => jne(&self.reg.fl, self.read_reg(reg_a)?, next),
        };

        self.reg.pc = pc;

        Ok(())
    }
}
