//! Conversion of a word into another case convention.
//!
//! All converters are built on [`StringCase::convert_with_separator`], a single left-to-right
//! scan that rewrites separators and splits words at lowercase to uppercase boundaries. The
//! single-case conventions then fold the result to one case, and the camel case family drops the
//! separator altogether.

use crate::{classify::Classify, flags::some_flags, CharFlags, StringCase};
use alloc::string::String;

/// Replace the first character of `word` with the characters produced by `map`.
fn map_first<I, F>(word: &str, map: F) -> String
where
    I: Iterator<Item = char>,
    F: FnOnce(char) -> I,
{
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.extend(map(first));
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Uppercase the first character of `word` and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

impl StringCase<'_> {
    /// Rewrite the word using `separator` between words.
    ///
    /// Any character in this word's separator set, or of the same kind as `separator`, is
    /// replaced by `separator` and the following character is uppercased. A separator is also
    /// inserted before an uppercase letter that directly follows a lowercase one. If
    /// `proper_caps` is set, any other uppercase letter is lowercased, so runs like `ABC` are
    /// read as a single word.
    ///
    /// An empty `separator` removes separators entirely.
    ///
    /// # Example
    /// ```
    /// use string_case::StringCase;
    ///
    /// let case = StringCase::new("fooBar-baz");
    ///
    /// assert_eq!(case.convert_with_separator("_", false), "foo_Bar_Baz");
    /// assert_eq!(case.convert_with_separator("", true), "fooBarBaz");
    /// ```
    pub fn convert_with_separator(&self, separator: &str, proper_caps: bool) -> String {
        let separators = if separator.is_empty() {
            self.separators
        } else {
            self.separators | separator.classify()
        };

        let mut result = String::with_capacity(self.word.len() + separator.len());
        // An uppercase letter is owed after a consumed separator.
        let mut to_upper = false;
        let mut was_lower = false;

        for c in self.word.chars() {
            let flags = c.classify();
            if some_flags(flags, separators) {
                result.push_str(separator);
                to_upper = true;
                was_lower = false;
            } else if to_upper {
                result.extend(c.to_uppercase());
                to_upper = false;
                was_lower = false;
            } else if some_flags(flags, CharFlags::UPPER) {
                if was_lower {
                    result.push_str(separator);
                    result.push(c);
                } else if proper_caps {
                    result.extend(c.to_lowercase());
                } else {
                    result.push(c);
                }
                was_lower = false;
            } else if some_flags(flags, CharFlags::LOWER) {
                result.push(c);
                was_lower = true;
            } else {
                result.push(c);
                was_lower = false;
            }
        }

        log::trace!(
            "converted {:?} with separator {:?} into {:?}",
            self.word,
            separator,
            result
        );
        result
    }

    pub fn make_mixed_snake_case(&self) -> String {
        self.convert_with_separator("_", false)
    }

    /// # Example
    /// ```
    /// use string_case::StringCase;
    ///
    /// assert_eq!(StringCase::new("ABC_DEF").make_snake_case(), "abc_def");
    /// assert_eq!(StringCase::new("fooBar").make_snake_case(), "foo_bar");
    /// ```
    pub fn make_snake_case(&self) -> String {
        self.convert_with_separator("_", true).to_lowercase()
    }

    pub fn make_screaming_snake_case(&self) -> String {
        self.convert_with_separator("_", true).to_uppercase()
    }

    pub fn make_mixed_dash_case(&self) -> String {
        self.convert_with_separator("-", false)
    }

    pub fn make_dash_case(&self) -> String {
        self.convert_with_separator("-", true).to_lowercase()
    }

    pub fn make_screaming_dash_case(&self) -> String {
        self.convert_with_separator("-", true).to_uppercase()
    }

    pub fn make_mixed_dot_case(&self) -> String {
        self.convert_with_separator(".", false)
    }

    pub fn make_dot_case(&self) -> String {
        self.convert_with_separator(".", true).to_lowercase()
    }

    pub fn make_screaming_dot_case(&self) -> String {
        self.convert_with_separator(".", true).to_uppercase()
    }

    pub fn make_mixed_slash_case(&self) -> String {
        self.convert_with_separator("/", false)
    }

    pub fn make_slash_case(&self) -> String {
        self.convert_with_separator("/", true).to_lowercase()
    }

    pub fn make_screaming_slash_case(&self) -> String {
        self.convert_with_separator("/", true).to_uppercase()
    }

    pub fn make_mixed_space_case(&self) -> String {
        self.convert_with_separator(" ", false)
    }

    pub fn make_space_case(&self) -> String {
        self.convert_with_separator(" ", true).to_lowercase()
    }

    pub fn make_screaming_space_case(&self) -> String {
        self.convert_with_separator(" ", true).to_uppercase()
    }

    /// Space separated words with only the very first letter uppercased.
    pub fn make_capitalized_space_case(&self) -> String {
        capitalize(&self.make_mixed_space_case())
    }

    /// Joins words without a separator, uppercasing the first letter of every word but the
    /// first.
    ///
    /// Only words containing one of the configured separators are split. Uppercase runs inside
    /// them are lowercased, so `ABC_DEF` becomes `abcDef`. A word made only of uppercase letters
    /// and digits keeps its first letter and lowercases the rest, and any other word is already
    /// joined and is returned unchanged. The result is therefore mixed camel case: `AbcDef`
    /// stays as it is.
    ///
    /// # Example
    /// ```
    /// use string_case::StringCase;
    ///
    /// assert_eq!(StringCase::new("abc_def").make_camel_case(), "abcDef");
    /// assert_eq!(StringCase::new("ABC").make_camel_case(), "Abc");
    /// assert_eq!(StringCase::new("AbcDef").make_camel_case(), "AbcDef");
    /// ```
    pub fn make_camel_case(&self) -> String {
        if self.some(self.separators) {
            map_first(&self.convert_with_separator("", true), char::to_lowercase)
        } else if self.only(CharFlags::UPPER | CharFlags::DIGITS) && self.first(CharFlags::UPPER) {
            let mut chars = self.word.chars();
            let mut result = String::with_capacity(self.word.len());
            result.extend(chars.next());
            result.push_str(&chars.as_str().to_lowercase());
            result
        } else {
            String::from(self.word)
        }
    }

    /// [`make_camel_case`](Self::make_camel_case) with the first character lowercased.
    pub fn make_proper_camel_case(&self) -> String {
        map_first(&self.make_camel_case(), char::to_lowercase)
    }

    /// [`make_camel_case`](Self::make_camel_case) with the first character uppercased.
    pub fn make_pascal_case(&self) -> String {
        map_first(&self.make_camel_case(), char::to_uppercase)
    }
}
