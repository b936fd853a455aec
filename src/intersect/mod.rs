//! The intersect kernel: membership in `L1 ∖ L2`.
//!
//! `L1` is meant to be `(abc)+` but is recognized leniently as any
//! non-empty run over `{a, b, c}`; block length is never checked.
//! `L2` is "starts with `a` or `b`", decided from the first byte alone.
//!
//! Three entry points share the predicates below:
//!
//! - [`decide`] returns the difference decision as a `bool`
//! - [`decide_and_mark`] runs the same computation and fires a marker hook
//!   exactly when the input is a member
//! - [`restricted::decide`] decides `L1` membership only

pub mod restricted;

use crate::input::{byte_at, TERMINATOR};

/// Whether control reached the marker of the instrumented variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    Reached,
    NotReached,
}

impl Reach {
    pub fn is_reached(self) -> bool {
        self == Reach::Reached
    }
}

impl From<Reach> for bool {
    fn from(reach: Reach) -> bool {
        reach.is_reached()
    }
}

/// `L1` alphabet membership.
#[inline]
pub fn is_l1_byte(b: u8) -> bool {
    b == b'a' || b == b'b' || b == b'c'
}

/// `L2` first-byte membership.
#[inline]
pub fn is_l2_first(b: u8) -> bool {
    b == b'a' || b == b'b'
}

/// True iff the first byte is in `{a, b, c}` and so is every byte after it
/// up to the terminator.
pub fn in_l1(input: &[u8]) -> bool {
    let mut i = 0;
    if !is_l1_byte(byte_at(input, i)) {
        return false;
    }
    i += 1;
    loop {
        match byte_at(input, i) {
            TERMINATOR => return true,
            b if is_l1_byte(b) => i += 1,
            _ => return false,
        }
    }
}

/// True iff the first byte is `a` or `b`.
pub fn in_l2(input: &[u8]) -> bool {
    is_l2_first(byte_at(input, 0))
}

/// Difference decision: `in_l1(input) && !in_l2(input)`.
pub fn decide(input: &[u8]) -> bool {
    in_l1(input) && !in_l2(input)
}

/// Instrumented difference decision.
///
/// Calls `marker` once, at the decision point, iff the input is a member;
/// otherwise `marker` is dropped uncalled.
pub fn decide_and_mark<F: FnOnce()>(input: &[u8], marker: F) -> Reach {
    let l1_accepted = in_l1(input);
    let l2_accepted = in_l2(input);

    if l1_accepted && !l2_accepted {
        marker();
        Reach::Reached
    } else {
        Reach::NotReached
    }
}

/// Instrumented decision with no marker hook.
pub fn probe(input: &[u8]) -> Reach {
    decide_and_mark(input, || {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differential::Words;
    use std::cell::Cell;

    #[test]
    fn test_byte_predicates() {
        assert!(is_l1_byte(b'a'));
        assert!(is_l1_byte(b'c'));
        assert!(!is_l1_byte(b'd'));
        assert!(!is_l1_byte(TERMINATOR));
        assert!(is_l2_first(b'b'));
        assert!(!is_l2_first(b'c'));
        assert!(!is_l2_first(TERMINATOR));
    }

    #[test]
    fn test_in_l1() {
        assert!(in_l1(b"abc"));
        assert!(in_l1(b"abcabc"));
        assert!(!in_l1(b""));
        assert!(!in_l1(b"xyz"));
        assert!(!in_l1(b"abd"));
    }

    #[test]
    fn test_in_l1_ignores_block_length() {
        assert!(in_l1(b"a"));
        assert!(in_l1(b"ab"));
        assert!(in_l1(b"cccc"));
    }

    #[test]
    fn test_in_l2_looks_at_first_byte_only() {
        assert!(in_l2(b"a"));
        assert!(in_l2(b"bxyz"));
        assert!(!in_l2(b"cab"));
        assert!(!in_l2(b""));
    }

    #[test]
    fn test_decide() {
        assert!(!decide(b"abc"));
        assert!(!decide(b""));
        assert!(decide(b"c"));
        assert!(decide(b"cab"));
        assert!(!decide(b"cax"));
    }

    #[test]
    fn test_leading_b_is_excluded_by_l2() {
        assert!(in_l1(b"bcabc"));
        assert!(in_l2(b"bcabc"));
        assert!(!decide(b"bcabc"));
    }

    #[test]
    fn test_marker_fires_iff_decide() {
        let corpus: Vec<Vec<u8>> = Words::new(b"abcx", 0, 5)
            .map(|w| w.to_vec())
            .chain(crate::samples::INTERSECT_SAMPLES.iter().flat_map(|s| {
                s.matches
                    .iter()
                    .chain(s.nomatches.iter())
                    .map(|w| w.as_bytes().to_vec())
            }))
            .collect();

        for input in &corpus {
            let fired = Cell::new(0);
            let reach = decide_and_mark(input, || fired.set(fired.get() + 1));
            assert_eq!(reach.is_reached(), decide(input), "input {:?}", input);
            assert_eq!(fired.get(), usize::from(decide(input)));
            assert_eq!(bool::from(probe(input)), decide(input));
        }
    }

    #[test]
    fn test_samples() {
        for sample in crate::samples::INTERSECT_SAMPLES {
            for m in sample.matches {
                assert!(decide(m.as_bytes()), "{}: rejects {:?}", sample.note, m);
            }
            for n in sample.nomatches {
                assert!(!decide(n.as_bytes()), "{}: accepts {:?}", sample.note, n);
            }
        }
    }
}
