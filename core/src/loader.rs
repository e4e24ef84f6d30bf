//! Reads `.ls8` program text: one base-2 byte per line.
//!
//! Parsing follows `strtoul(line, &end, 2)`: leading whitespace is skipped,
//! the longest run of binary digits is taken and the rest of the line is
//! ignored, so `10000010 # LDI R0,8` yields `0x82`. Lines without a leading
//! binary numeral do not take up an address.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::LS8;

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let text = fs::read_to_string(path.as_ref())?;
    let program = parse_program(&text);
    log::debug!("parsed {} bytes from {}", program.len(), path.as_ref().display());

    Ok(program)
}

pub fn parse_program(text: &str) -> Vec<u8> {
    text.lines().filter_map(parse_line).collect()
}

/// Loads the program at `path` into a freshly booted machine.
pub fn boot_file<P: AsRef<Path>>(path: P) -> Result<LS8, LoadError> {
    let program = load_file(path)?;
    let mut ls8 = LS8::new();
    ls8.load(&program)?;

    Ok(ls8)
}

fn parse_line(line: &str) -> Option<u8> {
    let digits: Vec<u64> = line
        .trim_start()
        .chars()
        .map_while(|c| c.to_digit(2))
        .map(u64::from)
        .collect();

    if digits.is_empty() {
        return None;
    }

    // saturates like strtoul, then keeps the low byte
    let value = digits.iter().try_fold(0u64, |acc, &digit| {
        acc.checked_mul(2).and_then(|acc| acc.checked_add(digit))
    });

    Some(value.unwrap_or(u64::MAX) as u8)
}
