//! Character category bitflags and the flag algebra used by every predicate.
//!
//! Each character maps to exactly one category. A whole word maps to the union of the categories
//! of its characters, which is what makes the predicates expressible as simple set tests: "only
//! these categories appear", "all of these categories appear", and so on.

use bitflags::bitflags;

bitflags! {
    /// Categories a character, or a whole word, can belong to.
    ///
    /// The numeric values are stable and may be relied upon when passing a raw separator mask
    /// as a `u32`.
    pub struct CharFlags: u32 {
        /// The word is empty. Never produced for a single character.
        const EMPTY = 0x0001;
        /// `U+0000`.
        const NUL = 0x0002;
        /// ASCII control characters `U+0001` through `U+001F`.
        const CTRL = 0x0004;
        /// ASCII space.
        const SPACE = 0x0008;
        /// `_`.
        const UNDER = 0x0010;
        /// `.`.
        const DOT = 0x0020;
        /// `-`.
        const DASH = 0x0040;
        /// `/`.
        const SLASH = 0x0080;
        /// ASCII digits.
        const DIGITS = 0x0100;
        /// Lowercase letters, and uncased characters outside of Latin-1.
        const LOWER = 0x0200;
        /// Uppercase letters.
        const UPPER = 0x0400;
        /// ASCII punctuation that is not a separator.
        const SYMBOLS = 0x0800;
        /// Anything else that is a valid character.
        const OTHER = 0x1000;
        /// Code points that are not Unicode scalar values.
        const NOT_DEFINED = 0x2000;

        /// Hint for custom converters: a lowercase to uppercase transition.
        ///
        /// None of the transition hints are ever produced by classification.
        const LOWER_TO_UPPER = 0x0001_0000;
        /// Hint for custom converters: a separator followed by an uppercase letter.
        const SEPARATOR_TO_UPPER = 0x0002_0000;
        /// Hint for custom converters: an uppercase to lowercase transition.
        const UPPER_TO_LOWER = 0x0004_0000;

        const LETTER = Self::LOWER.bits() | Self::UPPER.bits();
        const ALPHANUMERIC = Self::LETTER.bits() | Self::DIGITS.bits();
        /// Every separator kind. This is the default separator set.
        const SEPARATOR = Self::UNDER.bits() | Self::DOT.bits() | Self::DASH.bits() | Self::SLASH.bits();
    }
}

impl Default for CharFlags {
    fn default() -> Self {
        CharFlags::SEPARATOR
    }
}

/// Returns whether `flags` and `mask` share any category.
#[inline]
pub fn some_flags(flags: CharFlags, mask: CharFlags) -> bool {
    flags.intersects(mask)
}

/// Returns whether `flags` and `mask` share no category.
#[inline]
pub fn none_flags(flags: CharFlags, mask: CharFlags) -> bool {
    !flags.intersects(mask)
}

/// Returns whether `flags` shares a category with `mask` and has nothing outside of it.
///
/// An empty `flags` is never "only" anything.
#[inline]
pub fn only_flags(flags: CharFlags, mask: CharFlags) -> bool {
    some_flags(flags, mask) && mask.contains(flags)
}

/// Returns whether `flags` is exactly `mask`.
#[inline]
pub fn is_flags(flags: CharFlags, mask: CharFlags) -> bool {
    flags == mask
}

/// Returns whether every category of `mask` is present in `flags`.
#[inline]
pub fn all_flags(flags: CharFlags, mask: CharFlags) -> bool {
    flags.contains(mask)
}
