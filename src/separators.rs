//! Coercion of caller-supplied separator arguments into a [`CharFlags`] mask.
//!
//! A separator set may be given as a mask, as raw bits, as a single character, or as a string
//! holding either one character or a decimal mask. A character names its own category, so `'_'`
//! selects `UNDER` and `'x'` selects `LOWER`. Raw bits outside every defined category are
//! dropped. The fallible conversion is exposed through [`IntoSeparators`]; infallible entry
//! points fall back to [`CharFlags::SEPARATOR`].

use crate::{classify::Classify, flags::CharFlags};
use alloc::string::{String, ToString};
use thiserror::Error;

/// Reasons a separator argument could not be coerced into a mask.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SeparatorError {
    /// The string is neither a single character nor a decimal mask.
    #[error("separator {0:?} must be a single character or a numeric mask")]
    Malformed(String),
}

/// Values that can name a set of separators.
pub trait IntoSeparators {
    /// Converts `self` into a separator mask.
    fn into_separators(self) -> Result<CharFlags, SeparatorError>;

    /// Converts `self` into a separator mask, falling back to [`CharFlags::SEPARATOR`].
    fn into_separators_or_default(self) -> CharFlags
    where
        Self: Sized,
    {
        self.into_separators().unwrap_or_else(|error| {
            log::debug!("{}, using the default separators", error);
            CharFlags::default()
        })
    }
}

impl IntoSeparators for CharFlags {
    #[inline]
    fn into_separators(self) -> Result<CharFlags, SeparatorError> {
        Ok(self)
    }
}

impl IntoSeparators for u32 {
    fn into_separators(self) -> Result<CharFlags, SeparatorError> {
        let flags = CharFlags::from_bits_truncate(self);
        if flags.bits() != self {
            log::debug!(
                "ignoring unknown separator bits {:#x}",
                self & !CharFlags::all().bits()
            );
        }
        Ok(flags)
    }
}

impl IntoSeparators for char {
    #[inline]
    fn into_separators(self) -> Result<CharFlags, SeparatorError> {
        Ok(self.classify())
    }
}

impl IntoSeparators for &str {
    /// A single character is treated as a character, so `"5"` selects `DIGITS` rather than
    /// being read as the mask `5`.
    fn into_separators(self) -> Result<CharFlags, SeparatorError> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.into_separators(),
            _ => self
                .parse::<u32>()
                .map_err(|_| SeparatorError::Malformed(self.to_string()))?
                .into_separators(),
        }
    }
}
