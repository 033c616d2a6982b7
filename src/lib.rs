//! Classification and conversion of identifier-like strings by case convention.
//!
//! Every character of a word is mapped to a [`CharFlags`] category. A [`StringCase`] stores the
//! union of those categories, along with the categories of the first, second and last
//! characters, and answers questions about the word's convention using only those sets:
//!
//! ```
//! use string_case::StringCase;
//!
//! assert!(StringCase::new("foo_bar").is_snake_case());
//! assert!(StringCase::new("fooBar").is_camel_case());
//! assert!(!StringCase::new("fooBar").is_snake_case());
//! ```
//!
//! Conversions scan the word once, inserting separators at lowercase to uppercase boundaries and
//! rewriting existing separators:
//!
//! ```
//! use string_case::StringCase;
//!
//! assert_eq!(StringCase::new("AbcDef").make_screaming_snake_case(), "ABC_DEF");
//! assert_eq!(StringCase::new("ABC_DEF").make_camel_case(), "abcDef");
//! ```
//!
//! Which characters count as separators in the input is configurable, either directly through
//! [`StringCase::of`] or through a reusable [`StringCaseBuilder`].

#![no_std]

extern crate alloc;

mod builder;
mod case;
mod classify;
mod convert;
mod convertible;
mod flags;
mod predicates;
mod separators;

pub use builder::StringCaseBuilder;
pub use case::Case;
pub use classify::{
    ascii_flags, char_flags, is_digit, is_lower_case, is_separator_char, is_upper_case, Classify,
};
pub use flags::{all_flags, is_flags, none_flags, only_flags, some_flags, CharFlags};
pub use separators::{IntoSeparators, SeparatorError};

/// A classified view over a word.
///
/// All flags are computed at construction. The view never changes afterwards, and every
/// conversion returns a new `String`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StringCase<'a> {
    word: &'a str,
    separators: CharFlags,
    word_flags: CharFlags,
    first_flags: CharFlags,
    second_flags: CharFlags,
    last_flags: CharFlags,
}

impl<'a> StringCase<'a> {
    /// Classify `word` using the default separators `_`, `.`, `-` and `/`.
    #[inline]
    #[must_use]
    pub fn new(word: &'a str) -> Self {
        Self::with_separators(word, CharFlags::SEPARATOR)
    }

    /// Classify `word`, treating the given separators as word boundaries during conversion.
    ///
    /// Separators that cannot be coerced into a mask are replaced by the default set.
    ///
    /// # Example
    /// ```
    /// use string_case::{CharFlags, StringCase};
    ///
    /// assert_eq!(StringCase::of("a-b", '_').separators(), CharFlags::UNDER);
    /// assert_eq!(StringCase::of("a-b", "nope").separators(), CharFlags::SEPARATOR);
    /// ```
    #[must_use]
    pub fn of<S>(word: &'a str, separators: S) -> Self
    where
        S: IntoSeparators,
    {
        Self::with_separators(word, separators.into_separators_or_default())
    }

    /// Classify `word`, failing if `separators` cannot be coerced into a mask.
    pub fn try_of<S>(word: &'a str, separators: S) -> Result<Self, SeparatorError>
    where
        S: IntoSeparators,
    {
        Ok(Self::with_separators(word, separators.into_separators()?))
    }

    pub(crate) fn with_separators(word: &'a str, separators: CharFlags) -> Self {
        let mut chars = word.chars();
        let first_flags = chars.next().map_or(CharFlags::EMPTY, |c| c.classify());
        let second_flags = chars.next().map_or(CharFlags::EMPTY, |c| c.classify());
        let last_flags = word
            .chars()
            .next_back()
            .map_or(CharFlags::EMPTY, |c| c.classify());

        Self {
            word,
            separators,
            word_flags: word.classify(),
            first_flags,
            second_flags,
            last_flags,
        }
    }

    /// The classified word.
    #[inline]
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// The separators recognized in the word during conversion.
    #[inline]
    pub fn separators(&self) -> CharFlags {
        self.separators
    }

    /// Union of the categories of every character, or `EMPTY`.
    #[inline]
    pub fn word_flags(&self) -> CharFlags {
        self.word_flags
    }

    #[inline]
    pub fn first_flags(&self) -> CharFlags {
        self.first_flags
    }

    #[inline]
    pub fn second_flags(&self) -> CharFlags {
        self.second_flags
    }

    #[inline]
    pub fn last_flags(&self) -> CharFlags {
        self.last_flags
    }

    /// Returns whether any character is in `flags`.
    #[inline]
    pub fn some(&self, flags: CharFlags) -> bool {
        some_flags(self.word_flags, flags)
    }

    /// Returns whether no character is in `flags`.
    #[inline]
    pub fn none(&self, flags: CharFlags) -> bool {
        none_flags(self.word_flags, flags)
    }

    /// Returns whether every character is in `flags`.
    #[inline]
    pub fn only(&self, flags: CharFlags) -> bool {
        only_flags(self.word_flags, flags)
    }

    /// Returns whether the word's categories are exactly `flags`.
    #[inline]
    pub fn is(&self, flags: CharFlags) -> bool {
        is_flags(self.word_flags, flags)
    }

    /// Returns whether every category in `flags` appears in the word.
    #[inline]
    pub fn all(&self, flags: CharFlags) -> bool {
        all_flags(self.word_flags, flags)
    }

    /// Returns whether the first character is in `flags`.
    #[inline]
    pub fn first(&self, flags: CharFlags) -> bool {
        only_flags(self.first_flags, flags)
    }

    /// Returns whether the second character is in `flags`.
    #[inline]
    pub fn second(&self, flags: CharFlags) -> bool {
        only_flags(self.second_flags, flags)
    }

    /// Returns whether the last character is in `flags`.
    #[inline]
    pub fn last(&self, flags: CharFlags) -> bool {
        only_flags(self.last_flags, flags)
    }
}
