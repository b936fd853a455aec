//! The A/B kernel: membership in `{"aaaab"} ∪ a* ∪ b*`.
//!
//! Two independently written forms share only their contract:
//!
//! - `reference`: literal shortcut plus the anchored regex `^(a*|b*)$`
//! - `optimized`: three single-pass scanners joined by short-circuit OR
//!
//! The forms agree on every non-empty input. On the empty string the
//! reference form accepts and the optimized form rejects; that
//! disagreement is kept on purpose so a differential harness can find it.

pub mod optimized;
pub mod reference;
