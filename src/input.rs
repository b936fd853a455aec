//! Sentinel-terminated input handling shared by the hand-written scanners.
//!
//! Kernel inputs are single-byte-character strings ending at a terminator.
//! A Rust slice already knows its length, so the end of the slice acts as an
//! implicit terminator; an explicit `0x00` inside the slice ends the string
//! early, exactly as it would for a C string.

/// Marks the end of an input string.
pub const TERMINATOR: u8 = 0x00;

/// The part of `input` that precedes the first terminator.
///
/// Returns the whole slice when it holds no terminator byte.
pub fn terminated(input: &[u8]) -> &[u8] {
    match input.iter().position(|&b| b == TERMINATOR) {
        Some(end) => &input[..end],
        None => input,
    }
}

/// Reads the byte at `index`, yielding [`TERMINATOR`] past the end of `input`.
///
/// Scanners that walk forward until they see the terminator use this so
/// that reading one position past the last character is well defined.
#[inline]
pub fn byte_at(input: &[u8], index: usize) -> u8 {
    input.get(index).copied().unwrap_or(TERMINATOR)
}
