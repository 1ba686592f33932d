//! Answer checking.

use serde::{Deserialize, Serialize};

/// Result of judging a single reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    /// Judge `given` against the stored `expected` answer.
    pub fn judge(given: &str, expected: &str) -> Self {
        if answers_match(given, expected) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

/// Compares answers after trimming and Unicode lowercasing both sides.
///
/// This is lowercasing, not full case folding: "STRASSE" does not match
/// "straße". Inner whitespace and spelling must match exactly.
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize(given) == normalize(expected)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
