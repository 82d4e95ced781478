//! Feedback rule sets
//!
//! Controls how repeated letters inside one guess are treated, both when
//! feedback is computed against an answer and when it is folded into a
//! `ConstraintState`.

use std::fmt;

/// Which duplicate-letter rules the solver plays by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rules {
    /// Per-position classification with an unconditional gray purge.
    ///
    /// A gray letter is removed from every position even when the same
    /// letter is green or yellow elsewhere in the guess. With feedback from
    /// a real game this can eliminate the true answer when a guess repeats
    /// a letter; with literally computed feedback it cannot.
    #[default]
    Literal,
    /// Game-style duplicate counting; a gray letter that is also green or
    /// yellow in the same guess is only ruled out at its own position, and
    /// positions already pinned to the letter are never purged.
    DuplicateAware,
}

impl Rules {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::DuplicateAware => "duplicate-aware",
        }
    }
}

impl std::str::FromStr for Rules {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "literal" => Ok(Self::Literal),
            "duplicate-aware" | "aware" | "standard" => Ok(Self::DuplicateAware),
            other => Err(format!(
                "unknown rules '{other}' (expected 'literal' or 'duplicate-aware')"
            )),
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
