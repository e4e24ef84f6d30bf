pub mod error;
pub mod loader;
mod processor;

pub use processor::instruction;
pub use processor::register::Flags;

pub type LS8 = processor::Ls8;
