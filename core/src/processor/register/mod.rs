mod flags;

pub use self::flags::Flags;

use std::fmt;

pub const REGISTER_COUNT: usize = 8;
pub const SP: usize = 7;
pub const SP_INIT: u8 = 0xF4;

pub struct Register {
    r: [u8; REGISTER_COUNT],
    pub pc: u8,
    pub fl: Flags,
}

impl Register {
    pub fn new() -> Register {
        let mut r = [0; REGISTER_COUNT];
        r[SP] = SP_INIT;

        Register {
            r,
            pc: 0,
            fl: Flags::new(),
        }
    }

    /// Returns `None` when `idx` does not name one of R0-R7.
    pub fn get(&self, idx: u8) -> Option<u8> {
        self.r.get(idx as usize).copied()
    }

    pub fn set(&mut self, idx: u8, data: u8) -> Option<()> {
        let slot = self.r.get_mut(idx as usize)?;
        *slot = data;

        Some(())
    }

    // R7 viewed as the stack pointer; same storage as `get(7)`.
    pub fn sp(&self) -> u8 {
        self.r[SP]
    }

    pub fn set_sp(&mut self, sp: u8) {
        self.r[SP] = sp;
    }

    pub fn inc_pc(&mut self, count: u8) -> u8 {
        let pc = self.pc;
        self.pc = self.pc.wrapping_add(count);

        pc
    }
}

impl Default for Register {
    fn default() -> Self {
        Register::new()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pc: {:02x}, fl: {:03b}, r:", self.pc, self.fl.get())?;
        for r in self.r.iter() {
            write!(f, " {:02x}", r)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_state() {
        let reg = Register::new();

        assert_eq!(reg.pc, 0);
        assert_eq!(reg.sp(), 0xF4);
        assert!((0..7).all(|idx| reg.get(idx) == Some(0)));
    }

    #[test]
    fn stack_pointer_aliases_r7() {
        let mut reg = Register::new();

        reg.set(7, 0x80).unwrap();
        assert_eq!(reg.sp(), 0x80);

        reg.set_sp(0x10);
        assert_eq!(reg.get(7), Some(0x10));
    }

    #[test]
    fn out_of_range_index() {
        let mut reg = Register::new();

        assert_eq!(reg.get(8), None);
        assert_eq!(reg.set(8, 1), None);
    }

    #[test]
    fn inc_pc_wraps() {
        let mut reg = Register::new();
        reg.pc = 0xFE;

        assert_eq!(reg.inc_pc(3), 0xFE);
        assert_eq!(reg.pc, 0x01);
    }

    #[test]
    fn display_lists_every_register() {
        let reg = Register::new();
        assert_eq!(
            reg.to_string(),
            "pc: 00, fl: 000, r: 00 00 00 00 00 00 00 f4"
        );
    }
}
