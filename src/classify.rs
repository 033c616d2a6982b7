//! Mapping of characters and words to [`CharFlags`].
//!
//! Code points in the Latin-1 range are looked up in a table that is computed at compile time.
//! Everything above that range is classified on demand by comparing the character against its
//! own case mappings.

use crate::flags::{some_flags, CharFlags};
use alloc::string::String;
use const_fn_assert::cfn_assert_eq;
use core::iter;

/// Category of a single byte-sized code point.
const fn classify_byte(byte: u8) -> CharFlags {
    match byte {
        0x00 => CharFlags::NUL,
        0x01..=0x1F => CharFlags::CTRL,
        b' ' => CharFlags::SPACE,
        b'_' => CharFlags::UNDER,
        b'.' => CharFlags::DOT,
        b'-' => CharFlags::DASH,
        b'/' => CharFlags::SLASH,
        b'0'..=b'9' => CharFlags::DIGITS,
        b'A'..=b'Z' => CharFlags::UPPER,
        b'a'..=b'z' => CharFlags::LOWER,
        0x21..=0x7F => CharFlags::SYMBOLS,
        // Multiplication and division signs sit inside the Latin-1 letter blocks.
        0xD7 | 0xF7 => CharFlags::OTHER,
        0xAA | 0xB5 | 0xBA | 0xDF..=0xFF => CharFlags::LOWER,
        0xC0..=0xDE => CharFlags::UPPER,
        _ => CharFlags::OTHER,
    }
}

const fn build_table() -> [CharFlags; 256] {
    let mut table = [CharFlags::empty(); 256];
    let mut i = 0;
    while i < 256 {
        let flags = classify_byte(i as u8);
        // Every table entry must be exactly one category.
        cfn_assert_eq!(flags.bits().count_ones(), 1);
        table[i] = flags;
        i += 1;
    }
    table
}

static ASCII_FLAGS: [CharFlags; 256] = build_table();

/// Category of a character outside of the table.
fn classify_scalar(c: char) -> CharFlags {
    if c.to_lowercase().eq(iter::once(c)) {
        CharFlags::LOWER
    } else if c.to_uppercase().eq(iter::once(c)) {
        CharFlags::UPPER
    } else {
        CharFlags::OTHER
    }
}

/// Returns the category of the given code point.
///
/// Code points up to `0xFF` are classified by table. Above that, a character that is unchanged
/// by lowercasing is `LOWER`, one unchanged by uppercasing is `UPPER`, and anything else (such as
/// titlecase letters) is `OTHER`. Uncased characters like CJK ideographs are unchanged by
/// lowercasing and therefore classify as `LOWER`.
///
/// Code points that are not Unicode scalar values are `NOT_DEFINED`.
///
/// # Example
/// ```
/// use string_case::{char_flags, CharFlags};
///
/// assert_eq!(char_flags('a' as u32), CharFlags::LOWER);
/// assert_eq!(char_flags(0xD800), CharFlags::NOT_DEFINED);
/// ```
pub fn char_flags(code_point: u32) -> CharFlags {
    if code_point < 256 {
        return ASCII_FLAGS[code_point as usize];
    }
    match char::from_u32(code_point) {
        Some(c) => classify_scalar(c),
        None => CharFlags::NOT_DEFINED,
    }
}

/// Values that can be mapped to [`CharFlags`].
///
/// Single characters and code points map to their own category. Strings map to the union of the
/// categories of their characters, or to `EMPTY` if they have none.
pub trait Classify {
    fn classify(&self) -> CharFlags;
}

impl Classify for char {
    #[inline]
    fn classify(&self) -> CharFlags {
        char_flags(*self as u32)
    }
}

impl Classify for u32 {
    #[inline]
    fn classify(&self) -> CharFlags {
        char_flags(*self)
    }
}

impl Classify for str {
    fn classify(&self) -> CharFlags {
        if self.is_empty() {
            CharFlags::EMPTY
        } else {
            self.chars()
                .fold(CharFlags::empty(), |flags, c| flags | c.classify())
        }
    }
}

impl Classify for String {
    #[inline]
    fn classify(&self) -> CharFlags {
        self.as_str().classify()
    }
}

impl<T> Classify for &T
where
    T: Classify + ?Sized,
{
    #[inline]
    fn classify(&self) -> CharFlags {
        (**self).classify()
    }
}

/// Returns the flags of a character, code point, or whole string.
///
/// # Example
/// ```
/// use string_case::{ascii_flags, CharFlags};
///
/// assert_eq!(ascii_flags("foo_1"), CharFlags::LOWER | CharFlags::UNDER | CharFlags::DIGITS);
/// assert_eq!(ascii_flags(""), CharFlags::EMPTY);
/// assert_eq!(ascii_flags(&'-'), CharFlags::DASH);
/// ```
#[inline]
pub fn ascii_flags<T>(value: &T) -> CharFlags
where
    T: Classify + ?Sized,
{
    value.classify()
}

/// Returns whether `c` is one of `_`, `.`, `-` or `/`.
#[inline]
pub fn is_separator_char(c: char) -> bool {
    some_flags(c.classify(), CharFlags::SEPARATOR)
}

/// Returns whether `value` contains an uppercase character.
#[inline]
pub fn is_upper_case<T>(value: &T) -> bool
where
    T: Classify + ?Sized,
{
    some_flags(value.classify(), CharFlags::UPPER)
}

/// Returns whether `value` contains a lowercase character.
#[inline]
pub fn is_lower_case<T>(value: &T) -> bool
where
    T: Classify + ?Sized,
{
    some_flags(value.classify(), CharFlags::LOWER)
}

/// Returns whether `value` contains an ASCII digit.
#[inline]
pub fn is_digit<T>(value: &T) -> bool
where
    T: Classify + ?Sized,
{
    some_flags(value.classify(), CharFlags::DIGITS)
}
