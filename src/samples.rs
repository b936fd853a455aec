//! Hand-picked inputs for each kernel, with the expected outcome.

#[derive(Debug)]
pub struct KernelSample {
    pub note: &'static str,
    pub matches: &'static [&'static str],
    pub nomatches: &'static [&'static str],
}

/// Cases on which both A/B forms must agree. The empty string is left out.
pub static AB_SAMPLES: &[KernelSample] = &[
    KernelSample {
        note: "literal",
        matches: &["aaaab"],
        nomatches: &["aaab", "aaaaab", "aaaabb", "aaaaba", "baaaa"],
    },
    KernelSample {
        note: "only a's",
        matches: &["a", "aa", "aaaa", "aaaaaaaaaaaaaaaaaaaa"],
        nomatches: &["ab", "aab", "aaaaaaaaaaaaaaaaaaab"],
    },
    KernelSample {
        note: "only b's",
        matches: &["b", "bb", "bbbbb"],
        nomatches: &["ba", "bbba", "abbbb"],
    },
    KernelSample {
        note: "outside the alphabet",
        matches: &[],
        nomatches: &["c", "A", "a b", "aaa\n", "1"],
    },
];

/// Cases for the `L1 ∖ L2` decision.
pub static INTERSECT_SAMPLES: &[KernelSample] = &[
    KernelSample {
        note: "leading c",
        matches: &["c", "cab", "cabc", "cccc", "cbacba"],
        nomatches: &["cx", "cabd", "c b"],
    },
    KernelSample {
        note: "leading a or b",
        matches: &[],
        nomatches: &["abc", "abcabc", "bcabc", "a", "b"],
    },
    KernelSample {
        note: "not in L1",
        matches: &[],
        nomatches: &["", "xyz", "d", "xabc"],
    },
];

/// Cases for `L1` membership alone.
pub static L1_SAMPLES: &[KernelSample] = &[
    KernelSample {
        note: "over {a, b, c}",
        matches: &["abc", "cba", "aaa", "a", "abcabc", "bcabc"],
        nomatches: &[],
    },
    KernelSample {
        note: "empty or foreign bytes",
        matches: &[],
        nomatches: &["", "xabc", "ab1c", "abc ", "ABC"],
    },
];
