//! Hand-written scanners for `{"aaaab"} ∪ a+ ∪ b+`.
//!
//! Each scanner walks the input once and stops at the terminator or at the
//! first rejecting byte. No matching engine is involved.

use crate::input::{byte_at, TERMINATOR};

const LITERAL: &[u8; 5] = b"aaaab";

/// True iff `input` is exactly `"aaaab"`.
///
/// Compares the five literal bytes in order, then requires the sixth
/// position to be the terminator so that longer strings starting with
/// `"aaaab"` are rejected.
pub fn matches_literal(input: &[u8]) -> bool {
    for (i, &expected) in LITERAL.iter().enumerate() {
        if byte_at(input, i) != expected {
            return false;
        }
    }
    byte_at(input, LITERAL.len()) == TERMINATOR
}

/// True iff every byte before the terminator is `'a'`. Vacuously true for `""`.
pub fn all_a(input: &[u8]) -> bool {
    all_same(input, b'a')
}

/// True iff every byte before the terminator is `'b'`. Vacuously true for `""`.
pub fn all_b(input: &[u8]) -> bool {
    all_same(input, b'b')
}

fn all_same(input: &[u8], wanted: u8) -> bool {
    let mut i = 0;
    loop {
        match byte_at(input, i) {
            TERMINATOR => return true,
            b if b != wanted => return false,
            _ => i += 1,
        }
    }
}

/// Optimized membership decision.
///
/// Rejects the empty string even though `all_a("")` holds; the reference
/// form accepts it. The differential harness is expected to report that
/// disagreement.
pub fn decide(input: &[u8]) -> bool {
    byte_at(input, 0) != TERMINATOR && (matches_literal(input) || all_a(input) || all_b(input))
}
