use crate::error::LoadError;

pub const RAM_SIZE: usize = 0x100;

pub struct Ram {
    ram: [u8; RAM_SIZE],
}

impl Ram {
    pub const fn new() -> Ram {
        Ram {
            ram: [0; RAM_SIZE],
        }
    }

    /// Copies `program` into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > RAM_SIZE {
            return Err(LoadError::ProgramTooLarge(program.len()));
        }

        self.ram[..program.len()].copy_from_slice(program);
        log::debug!("loaded {} bytes", program.len());

        Ok(())
    }

    #[inline]
    pub fn read(&self, addr: u8) -> u8 {
        log::trace!("ram[r] addr: {:02x}", addr);
        self.ram[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u8, data: u8) -> () {
        log::trace!("ram[w] addr: {:02x}, data: {:02x}", addr, data);
        self.ram[addr as usize] = data;
    }
}

impl Default for Ram {
    fn default() -> Self {
        Ram::new()
    }
}
