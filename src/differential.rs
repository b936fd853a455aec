//! Exhaustive differential checking of two kernels.
//!
//! A harness compares a reference kernel against a candidate by feeding
//! both every string over a small alphabet, shortest first, and recording
//! each input on which their decisions differ.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::Kernel;

/// A word produced by [`Words`]. Short words stay on the stack.
pub type Word = SmallVec<[u8; 16]>;

/// Every string over `alphabet` with length in `min_len..=max_len`, in
/// shortlex order (by length, then by alphabet position).
pub struct Words<'a> {
    alphabet: &'a [u8],
    digits: SmallVec<[usize; 16]>,
    max_len: usize,
    done: bool,
}

impl<'a> Words<'a> {
    pub fn new(alphabet: &'a [u8], min_len: usize, max_len: usize) -> Self {
        Self {
            alphabet,
            digits: smallvec![0; min_len],
            max_len,
            done: min_len > max_len || (alphabet.is_empty() && min_len > 0),
        }
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet.len() {
                return;
            }
            *digit = 0;
        }
        // Every position wrapped: move on to the next length.
        let len = self.digits.len() + 1;
        if len > self.max_len || self.alphabet.is_empty() {
            self.done = true;
        } else {
            self.digits = smallvec![0; len];
        }
    }
}

impl Iterator for Words<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        if self.done {
            return None;
        }
        let word = self.digits.iter().map(|&d| self.alphabet[d]).collect();
        self.advance();
        Some(word)
    }
}

/// Input space for [`compare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustiveConfig {
    pub alphabet: Vec<u8>,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for ExhaustiveConfig {
    /// Non-empty strings over `{a, b}` up to length 10.
    fn default() -> Self {
        Self {
            alphabet: b"ab".to_vec(),
            min_len: 1,
            max_len: 10,
        }
    }
}

/// One input on which two kernels disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub input: Vec<u8>,
    pub reference: bool,
    pub candidate: bool,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\": reference={} candidate={}",
            self.input.escape_ascii(),
            self.reference,
            self.candidate
        )
    }
}

/// Outcome of an exhaustive comparison.
#[derive(Debug, Clone, Default)]
pub struct DifferentialReport {
    checked: usize,
    mismatches: Vec<Mismatch>,
}

impl DifferentialReport {
    /// Number of inputs fed to both kernels.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Disagreements in the order they were found.
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Runs `reference` and `candidate` on every word described by `config`.
pub fn compare<R, C>(reference: &R, candidate: &C, config: &ExhaustiveConfig) -> DifferentialReport
where
    R: Kernel + ?Sized,
    C: Kernel + ?Sized,
{
    let mut report = DifferentialReport::default();
    for word in Words::new(&config.alphabet, config.min_len, config.max_len) {
        report.checked += 1;
        let expected = reference.decide(&word);
        let actual = candidate.decide(&word);
        if expected != actual {
            report.mismatches.push(Mismatch {
                input: word.to_vec(),
                reference: expected,
                candidate: actual,
            });
        }
    }
    report
}
