pub const HLT: u8 = 0b0000_0001;

pub const LDI: u8 = 0b1000_0010;
pub const ST: u8 = 0b1000_0100;
pub const PUSH: u8 = 0b0100_0101;
pub const POP: u8 = 0b0100_0110;
pub const PRN: u8 = 0b0100_0111;

pub const RET: u8 = 0b0001_0001;
pub const CALL: u8 = 0b0101_0000;
pub const JMP: u8 = 0b0101_0100;
pub const JEQ: u8 = 0b0101_0101;
pub const JNE: u8 = 0b0101_0110;

pub const ADD: u8 = 0b1010_0000;
pub const SUB: u8 = 0b1010_0001;
pub const MUL: u8 = 0b1010_0010;
pub const DIV: u8 = 0b1010_0011;
pub const CMP: u8 = 0b1010_0111;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Class {
    Generic,
    Jump,
    Alu,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GenericOp {
    LDI,
    ST,
    PUSH,
    POP,
    PRN,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum JumpOp {
    CALL,
    RET,
    JMP,
    JEQ,
    JNE,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AluOp {
    ADD,
    SUB,
    MUL,
    DIV,
    CMP,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Opcode {
    HLT,
    Generic(GenericOp),
    Jump(JumpOp),
    Alu(AluOp),
}

impl GenericOp {
    pub fn from_byte(raw_op: u8) -> Option<GenericOp> {
        match raw_op {
            LDI => Some(GenericOp::LDI),
            ST => Some(GenericOp::ST),
            PUSH => Some(GenericOp::PUSH),
            POP => Some(GenericOp::POP),
            PRN => Some(GenericOp::PRN),
            _ => None,
        }
    }
}

impl JumpOp {
    pub fn from_byte(raw_op: u8) -> Option<JumpOp> {
        match raw_op {
            CALL => Some(JumpOp::CALL),
            RET => Some(JumpOp::RET),
            JMP => Some(JumpOp::JMP),
            JEQ => Some(JumpOp::JEQ),
            JNE => Some(JumpOp::JNE),
            _ => None,
        }
    }
}

impl AluOp {
    pub fn from_byte(raw_op: u8) -> Option<AluOp> {
        match raw_op {
            ADD => Some(AluOp::ADD),
            SUB => Some(AluOp::SUB),
            MUL => Some(AluOp::MUL),
            DIV => Some(AluOp::DIV),
            CMP => Some(AluOp::CMP),
            _ => None,
        }
    }
}
