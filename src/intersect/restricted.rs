//! `L1`-only membership, with no `L2` exclusion.

use super::in_l1;

/// True iff `input` is a non-empty run over `{a, b, c}`.
pub fn decide(input: &[u8]) -> bool {
    in_l1(input)
}
