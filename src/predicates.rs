//! Case convention predicates.
//!
//! Every predicate has the same shape: the word is drawn only from an allowed set of categories,
//! the categories that define the convention are all present, and the first character belongs to
//! a restricted subset.

use crate::{CharFlags, StringCase};

const UNDER: CharFlags = CharFlags::UNDER;
const DASH: CharFlags = CharFlags::DASH;
const DOT: CharFlags = CharFlags::DOT;
const SLASH: CharFlags = CharFlags::SLASH;
const SPACE: CharFlags = CharFlags::SPACE;
const LOWER: CharFlags = CharFlags::LOWER;
const UPPER: CharFlags = CharFlags::UPPER;
const LETTER: CharFlags = CharFlags::LETTER;
const DIGITS: CharFlags = CharFlags::DIGITS;

impl StringCase<'_> {
    /// Letters, digits and separator `separator`, containing both at least one separator and one
    /// letter, starting with either.
    pub(crate) fn is_mixed_separated(&self, separator: CharFlags) -> bool {
        self.only(separator | LETTER | DIGITS)
            && self.all(separator)
            && self.some(LETTER)
            && self.first(separator | LETTER)
    }

    /// Separator `separator`, digits and letters of a single case `letter`, starting with either
    /// the separator or the letter case.
    pub(crate) fn is_single_case_separated(&self, separator: CharFlags, letter: CharFlags) -> bool {
        self.only(separator | letter | DIGITS)
            && self.all(separator | letter)
            && self.first(separator | letter)
    }

    /// Returns whether the word is a valid identifier: letters, digits and underscores, not
    /// starting with a digit.
    pub fn identifier(&self) -> bool {
        self.only(LETTER | DIGITS | UNDER) && self.first(LETTER | UNDER)
    }

    /// `fooBar` or `FooBar`: letters and digits only, with both cases present, starting with a
    /// letter.
    pub fn is_mixed_camel_case(&self) -> bool {
        self.only(LETTER | DIGITS) && self.all(LETTER) && self.first(LETTER)
    }

    /// Returns whether the word is `camelCase`.
    ///
    /// # Example
    /// ```
    /// use string_case::StringCase;
    ///
    /// assert!(StringCase::new("aA").is_camel_case());
    /// assert!(!StringCase::new("Aa").is_camel_case());
    /// ```
    pub fn is_camel_case(&self) -> bool {
        self.is_mixed_camel_case() && self.first(LOWER)
    }

    /// Returns whether the word is `PascalCase`.
    ///
    /// The second character must be lowercase, so `ABc` is not considered `PascalCase`.
    pub fn is_pascal_case(&self) -> bool {
        self.is_mixed_camel_case() && self.first(UPPER) && self.second(LOWER)
    }

    /// `foo_Bar`, `Foo_bar` or `foo_bar`.
    pub fn is_mixed_snake_case(&self) -> bool {
        self.is_mixed_separated(UNDER)
    }

    /// `foo_bar`.
    pub fn is_snake_case(&self) -> bool {
        self.is_single_case_separated(UNDER, LOWER)
    }

    /// `FOO_BAR`.
    pub fn is_screaming_snake_case(&self) -> bool {
        self.is_single_case_separated(UNDER, UPPER)
    }

    /// `foo-Bar`, `Foo-bar` or `foo-bar`.
    pub fn is_mixed_dash_case(&self) -> bool {
        self.is_mixed_separated(DASH)
    }

    /// `foo-bar`.
    pub fn is_dash_case(&self) -> bool {
        self.is_single_case_separated(DASH, LOWER)
    }

    /// `FOO-BAR`.
    pub fn is_screaming_dash_case(&self) -> bool {
        self.is_single_case_separated(DASH, UPPER)
    }

    /// `foo.Bar`, `Foo.bar` or `foo.bar`.
    pub fn is_mixed_dot_case(&self) -> bool {
        self.is_mixed_separated(DOT)
    }

    /// `foo.bar`.
    pub fn is_dot_case(&self) -> bool {
        self.is_single_case_separated(DOT, LOWER)
    }

    /// `FOO.BAR`.
    pub fn is_screaming_dot_case(&self) -> bool {
        self.is_single_case_separated(DOT, UPPER)
    }

    /// `foo/Bar`, `Foo/bar` or `foo/bar`.
    pub fn is_mixed_slash_case(&self) -> bool {
        self.is_mixed_separated(SLASH)
    }

    /// `foo/bar`.
    pub fn is_slash_case(&self) -> bool {
        self.is_single_case_separated(SLASH, LOWER)
    }

    /// `FOO/BAR`.
    pub fn is_screaming_slash_case(&self) -> bool {
        self.is_single_case_separated(SLASH, UPPER)
    }

    /// `foo Bar`, `Foo bar` or `foo bar`.
    ///
    /// Unlike the other separators, a leading space is not allowed.
    pub fn is_mixed_space_case(&self) -> bool {
        self.only(SPACE | LETTER | DIGITS)
            && self.all(SPACE)
            && self.some(LETTER)
            && self.first(LETTER)
    }

    /// `Foo bar` or `Foo Bar`.
    pub fn is_capitalized_space_case(&self) -> bool {
        self.is_mixed_space_case() && self.first(UPPER)
    }

    /// `foo bar`.
    pub fn is_space_case(&self) -> bool {
        self.only(SPACE | LOWER | DIGITS) && self.all(SPACE | LOWER) && self.first(LOWER)
    }

    /// `FOO BAR`.
    pub fn is_screaming_space_case(&self) -> bool {
        self.only(SPACE | UPPER | DIGITS) && self.all(SPACE | UPPER) && self.first(UPPER)
    }

    /// Returns whether every character is uppercase.
    ///
    /// Digits, separators, or any other category make this `false`, as does an empty word.
    pub fn is_upper_case(&self) -> bool {
        self.is(UPPER)
    }

    /// Returns whether every character is lowercase.
    pub fn is_lower_case(&self) -> bool {
        self.is(LOWER)
    }

    /// Returns whether any character is uppercase.
    pub fn has_upper_case(&self) -> bool {
        self.some(UPPER)
    }

    /// Returns whether any character is lowercase.
    pub fn has_lower_case(&self) -> bool {
        self.some(LOWER)
    }

    pub fn has_letters(&self) -> bool {
        self.some(LETTER)
    }

    /// Returns whether the word is non-empty and has no uppercase letters.
    pub fn has_no_upper_case(&self) -> bool {
        self.none(UPPER | CharFlags::EMPTY)
    }

    /// Returns whether the word is non-empty and has no lowercase letters.
    pub fn has_no_lower_case(&self) -> bool {
        self.none(LOWER | CharFlags::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use crate::StringCase;

    #[test]
    fn identifier() {
        assert!(StringCase::new("foo").identifier());
        assert!(StringCase::new("_foo1").identifier());
        assert!(StringCase::new("FooBar").identifier());
        assert!(!StringCase::new("1foo").identifier());
        assert!(!StringCase::new("foo-bar").identifier());
        assert!(!StringCase::new("").identifier());
    }

    #[test]
    fn mixed_camel_case() {
        assert!(StringCase::new("aA").is_mixed_camel_case());
        assert!(StringCase::new("Aa").is_mixed_camel_case());
        assert!(StringCase::new("fooBar2").is_mixed_camel_case());
        assert!(!StringCase::new("foo").is_mixed_camel_case());
        assert!(!StringCase::new("FOO").is_mixed_camel_case());
        assert!(!StringCase::new("1aA").is_mixed_camel_case());
    }

    #[test]
    fn pascal_case_second_character() {
        assert!(StringCase::new("FooBar").is_pascal_case());
        assert!(!StringCase::new("FOoBar").is_pascal_case());
        assert!(!StringCase::new("F1oo").is_pascal_case());
    }

    #[test]
    fn mixed_snake_case() {
        assert!(StringCase::new("Foo_bar").is_mixed_snake_case());
        assert!(StringCase::new("foo_bar").is_mixed_snake_case());
        assert!(StringCase::new("_A").is_mixed_snake_case());
        assert!(!StringCase::new("fooBar").is_mixed_snake_case());
        assert!(!StringCase::new("_1").is_mixed_snake_case());
        assert!(!StringCase::new("1_a").is_mixed_snake_case());
    }

    #[test]
    fn snake_case() {
        assert!(StringCase::new("foo_bar_2").is_snake_case());
        assert!(StringCase::new("_a").is_snake_case());
        assert!(!StringCase::new("_A").is_snake_case());
        assert!(!StringCase::new("foo").is_snake_case());
        assert!(!StringCase::new("1_a").is_snake_case());
    }

    #[test]
    fn screaming_snake_case() {
        assert!(StringCase::new("FOO_BAR").is_screaming_snake_case());
        assert!(StringCase::new("_123A").is_screaming_snake_case());
        assert!(!StringCase::new("_a").is_screaming_snake_case());
        assert!(!StringCase::new("_123").is_screaming_snake_case());
    }

    #[test]
    fn dash_case() {
        assert!(StringCase::new("foo-bar").is_dash_case());
        assert!(StringCase::new("FOO-BAR").is_screaming_dash_case());
        assert!(StringCase::new("Foo-bar").is_mixed_dash_case());
        assert!(!StringCase::new("foo_bar").is_dash_case());
        assert!(!StringCase::new("foo-Bar").is_dash_case());
    }

    #[test]
    fn dot_case() {
        assert!(StringCase::new("foo.bar").is_dot_case());
        assert!(StringCase::new("FOO.BAR").is_screaming_dot_case());
        assert!(StringCase::new("foo.Bar").is_mixed_dot_case());
        assert!(!StringCase::new("foo-bar").is_dot_case());
    }

    #[test]
    fn slash_case() {
        assert!(StringCase::new("foo/bar").is_slash_case());
        assert!(StringCase::new("FOO/BAR").is_screaming_slash_case());
        assert!(StringCase::new("Foo/Bar").is_mixed_slash_case());
        assert!(!StringCase::new("foo.bar").is_slash_case());
    }

    #[test]
    fn separators_do_not_mix() {
        assert!(!StringCase::new("foo_bar-baz").is_mixed_snake_case());
        assert!(!StringCase::new("foo_bar-baz").is_mixed_dash_case());
    }

    #[test]
    fn space_case() {
        assert!(StringCase::new("foo bar").is_space_case());
        assert!(StringCase::new("FOO BAR").is_screaming_space_case());
        assert!(StringCase::new("Foo bar").is_capitalized_space_case());
        assert!(StringCase::new("foo Bar").is_mixed_space_case());
        assert!(!StringCase::new("foo Bar").is_capitalized_space_case());
        assert!(!StringCase::new(" foo").is_space_case());
        assert!(!StringCase::new(" foo").is_mixed_space_case());
        assert!(!StringCase::new("foo").is_space_case());
    }

    #[test]
    fn whole_word_case() {
        assert!(StringCase::new("ABC").is_upper_case());
        assert!(!StringCase::new("ABC1").is_upper_case());
        assert!(StringCase::new("abc").is_lower_case());
        assert!(!StringCase::new("").is_lower_case());
        assert!(!StringCase::new("").is_upper_case());
        assert!(!StringCase::new("_-").is_upper_case());
    }

    #[test]
    fn has_case() {
        assert!(StringCase::new("a1").has_lower_case());
        assert!(StringCase::new("A1").has_upper_case());
        assert!(StringCase::new("_a").has_letters());
        assert!(!StringCase::new("_1").has_letters());
        assert!(StringCase::new("abc").has_no_upper_case());
        assert!(!StringCase::new("").has_no_upper_case());
        assert!(StringCase::new("ABC").has_no_lower_case());
        assert!(!StringCase::new("").has_no_lower_case());
    }

    #[test]
    fn empty_and_whitespace_are_nothing() {
        for word in &["", " ", "   "] {
            let case = StringCase::new(word);
            assert!(!case.identifier());
            assert!(!case.is_mixed_camel_case());
            assert!(!case.is_snake_case());
            assert!(!case.is_mixed_snake_case());
            assert!(!case.is_space_case());
            assert!(!case.is_mixed_space_case());
            assert!(!case.is_screaming_space_case());
        }
    }
}
