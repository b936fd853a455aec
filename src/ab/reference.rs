//! Reference decision for `{"aaaab"} ∪ a* ∪ b*` built on a general regex engine.

use regex::bytes::Regex;

use crate::input::terminated;
use crate::KernelError;

/// Anchored pattern for "only a's, or only b's". Unicode is off so each
/// byte is one character.
pub const PATTERN: &str = r"(?-u)^(?:a*|b*)$";

/// Accepted without consulting the engine.
pub const LITERAL: &[u8] = b"aaaab";

/// Reference decision, reporting a pattern compile failure as an error.
///
/// The compiled pattern lives only for the duration of the call and is
/// released on every return path. The literal shortcut returns before
/// anything is compiled.
pub fn try_decide(input: &[u8]) -> Result<bool, KernelError> {
    try_decide_with(PATTERN, input)
}

fn try_decide_with(pattern: &str, input: &[u8]) -> Result<bool, KernelError> {
    let input = terminated(input);
    if input == LITERAL {
        return Ok(true);
    }

    let regex = Regex::new(pattern).map_err(KernelError::PatternCompile)?;
    Ok(regex.is_match(input))
}

/// Reference decision. A compile failure counts as no match.
pub fn decide(input: &[u8]) -> bool {
    decide_with(PATTERN, input)
}

fn decide_with(pattern: &str, input: &[u8]) -> bool {
    try_decide_with(pattern, input).unwrap_or(false)
}
