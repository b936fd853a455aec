//! membership-kernels: paired recognizers for small regular languages.
//!
//! Each kernel decides whether a byte string belongs to a fixed language.
//! Kernels come as independently written pairs, a reference form built on a
//! general regex engine and an optimized single-pass scan, so that a
//! differential or symbolic-execution harness can feed both the same inputs
//! and compare outcomes.
//!
//! ```
//! use membership_kernels::{ab, intersect};
//!
//! assert!(ab::reference::decide(b"aaaab"));
//! assert!(ab::optimized::decide(b"bbb"));
//! assert!(intersect::decide(b"cab"));
//! assert!(!intersect::decide(b"abc"));
//! ```
//!
//! Inputs end at the first `0x00` byte or at the end of the slice,
//! whichever comes first.

pub mod ab;
pub mod cli;
pub mod differential;
pub mod input;
pub mod intersect;

#[cfg(test)]
mod samples;

use std::fmt;

pub use intersect::Reach;

/// Errors a kernel can report through its fallible entry point.
#[derive(Debug)]
pub enum KernelError {
    /// The fixed pattern of a reference kernel failed to compile.
    PatternCompile(regex::Error),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::PatternCompile(err) => write!(f, "pattern failed to compile: {}", err),
        }
    }
}

impl std::error::Error for KernelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KernelError::PatternCompile(err) => Some(err),
        }
    }
}

/// A membership query: does `input` belong to the kernel's language?
///
/// Implementations are pure; the same input always gets the same answer
/// and nothing is retained between calls.
pub trait Kernel {
    /// Short name, used for the executable and in reports.
    fn name(&self) -> &'static str;

    /// Pure membership query; only the bytes before the first terminator count.
    fn decide(&self, input: &[u8]) -> bool;
}

/// `{"aaaab"} ∪ a* ∪ b*` via the regex engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbReference;

/// `{"aaaab"} ∪ a+ ∪ b+` via hand-written scanners.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbOptimized;

/// `L1 ∖ L2` from the intersect kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Difference;

/// `L1` alone from the intersect kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct L1Membership;

impl Kernel for AbReference {
    fn name(&self) -> &'static str {
        "ab-reference"
    }

    fn decide(&self, input: &[u8]) -> bool {
        ab::reference::decide(input)
    }
}

impl Kernel for AbOptimized {
    fn name(&self) -> &'static str {
        "ab-optimized"
    }

    fn decide(&self, input: &[u8]) -> bool {
        ab::optimized::decide(input)
    }
}

impl Kernel for Difference {
    fn name(&self) -> &'static str {
        "intersect"
    }

    fn decide(&self, input: &[u8]) -> bool {
        intersect::decide(input)
    }
}

impl Kernel for L1Membership {
    fn name(&self) -> &'static str {
        "intersect-l1"
    }

    fn decide(&self, input: &[u8]) -> bool {
        intersect::restricted::decide(input)
    }
}
