//! Sets of lowercase ASCII letters
//!
//! A `LetterSet` packs the 26 letters into the low bits of a `u32`, so copying
//! a whole constraint state is a handful of integer copies.

use std::fmt;

const FULL_MASK: u32 = (1 << 26) - 1;

/// A set of letters `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// All 26 letters
    pub const ALL: Self = Self(FULL_MASK);

    /// A set holding exactly one letter
    ///
    /// # Panics
    /// Panics in debug mode if `letter` is not lowercase ASCII
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(bit(letter))
    }

    /// Build a set from every letter of a byte slice
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        letters.iter().fold(Self::EMPTY, |set, &l| set.with(l))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    /// Copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | bit(letter))
    }

    /// Copy of this set with `letter` removed
    #[inline]
    #[must_use]
    pub const fn without(self, letter: u8) -> Self {
        Self(self.0 & !bit(letter))
    }

    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= bit(letter);
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when this set is exactly `{letter}`
    #[inline]
    #[must_use]
    pub const fn is_only(self, letter: u8) -> bool {
        self.0 == bit(letter)
    }

    /// True when every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

#[inline]
const fn bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a..=z");
    1 << (letter - b'a')
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            return write!(f, "*");
        }
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
