//! Checks for whether a word can be converted into a convention.
//!
//! A word can be converted if it is made of characters the converter knows how to repair, if the
//! conversion actually changes it, and if the converted word satisfies the convention's
//! predicate. A word that is already in the target convention therefore can not "be" converted
//! into it.

use crate::{CharFlags, StringCase};
use alloc::string::String;

const LETTER: CharFlags = CharFlags::LETTER;
const DIGITS: CharFlags = CharFlags::DIGITS;

impl<'a> StringCase<'a> {
    fn can_become<M, P>(&self, target: CharFlags, first: CharFlags, make: M, is: P) -> bool
    where
        M: Fn(&Self) -> String,
        P: Fn(&StringCase<'_>) -> bool,
    {
        if !(self.only(self.separators | target | LETTER | DIGITS)
            && self.some(LETTER)
            && self.first(first))
        {
            return false;
        }
        let word = make(self);
        word != self.word && is(&StringCase::with_separators(&word, self.separators))
    }

    fn can_become_separated<M, P>(&self, separator: CharFlags, make: M, is: P) -> bool
    where
        M: Fn(&Self) -> String,
        P: Fn(&StringCase<'_>) -> bool,
    {
        self.can_become(separator, separator | LETTER, make, is)
    }

    fn can_become_spaced<M, P>(&self, make: M, is: P) -> bool
    where
        M: Fn(&Self) -> String,
        P: Fn(&StringCase<'_>) -> bool,
    {
        self.can_become(CharFlags::SPACE, LETTER, make, is)
    }

    fn can_become_joined<M, P>(&self, make: M, is: P) -> bool
    where
        M: Fn(&Self) -> String,
        P: Fn(&StringCase<'_>) -> bool,
    {
        self.can_become(CharFlags::empty(), self.separators | LETTER, make, is)
    }

    pub fn can_be_mixed_snake_case(&self) -> bool {
        self.can_become_separated(CharFlags::UNDER, Self::make_mixed_snake_case, |case| {
            case.is_mixed_snake_case()
        })
    }

    /// # Example
    /// ```
    /// use string_case::StringCase;
    ///
    /// assert!(StringCase::new("fooBar").can_be_snake_case());
    /// // Already snake case.
    /// assert!(!StringCase::new("foo_bar").can_be_snake_case());
    /// ```
    pub fn can_be_snake_case(&self) -> bool {
        self.can_become_separated(CharFlags::UNDER, Self::make_snake_case, |case| {
            case.is_snake_case()
        })
    }

    pub fn can_be_screaming_snake_case(&self) -> bool {
        self.can_become_separated(CharFlags::UNDER, Self::make_screaming_snake_case, |case| {
            case.is_screaming_snake_case()
        })
    }

    pub fn can_be_mixed_dash_case(&self) -> bool {
        self.can_become_separated(CharFlags::DASH, Self::make_mixed_dash_case, |case| {
            case.is_mixed_dash_case()
        })
    }

    pub fn can_be_dash_case(&self) -> bool {
        self.can_become_separated(CharFlags::DASH, Self::make_dash_case, |case| {
            case.is_dash_case()
        })
    }

    pub fn can_be_screaming_dash_case(&self) -> bool {
        self.can_become_separated(CharFlags::DASH, Self::make_screaming_dash_case, |case| {
            case.is_screaming_dash_case()
        })
    }

    pub fn can_be_mixed_dot_case(&self) -> bool {
        self.can_become_separated(CharFlags::DOT, Self::make_mixed_dot_case, |case| {
            case.is_mixed_dot_case()
        })
    }

    pub fn can_be_dot_case(&self) -> bool {
        self.can_become_separated(CharFlags::DOT, Self::make_dot_case, |case| case.is_dot_case())
    }

    pub fn can_be_screaming_dot_case(&self) -> bool {
        self.can_become_separated(CharFlags::DOT, Self::make_screaming_dot_case, |case| {
            case.is_screaming_dot_case()
        })
    }

    pub fn can_be_mixed_slash_case(&self) -> bool {
        self.can_become_separated(CharFlags::SLASH, Self::make_mixed_slash_case, |case| {
            case.is_mixed_slash_case()
        })
    }

    pub fn can_be_slash_case(&self) -> bool {
        self.can_become_separated(CharFlags::SLASH, Self::make_slash_case, |case| {
            case.is_slash_case()
        })
    }

    pub fn can_be_screaming_slash_case(&self) -> bool {
        self.can_become_separated(CharFlags::SLASH, Self::make_screaming_slash_case, |case| {
            case.is_screaming_slash_case()
        })
    }

    pub fn can_be_mixed_space_case(&self) -> bool {
        self.can_become_spaced(Self::make_mixed_space_case, |case| {
            case.is_mixed_space_case()
        })
    }

    pub fn can_be_space_case(&self) -> bool {
        self.can_become_spaced(Self::make_space_case, |case| case.is_space_case())
    }

    pub fn can_be_screaming_space_case(&self) -> bool {
        self.can_become_spaced(Self::make_screaming_space_case, |case| {
            case.is_screaming_space_case()
        })
    }

    pub fn can_be_capitalized_space_case(&self) -> bool {
        self.can_become_spaced(Self::make_capitalized_space_case, |case| {
            case.is_capitalized_space_case()
        })
    }

    /// Returns whether the word can be joined into mixed camel case.
    ///
    /// # Example
    /// ```
    /// use string_case::StringCase;
    ///
    /// assert!(StringCase::new("ABC").can_be_camel_case());
    /// assert!(StringCase::new("Foo_bar").can_be_camel_case());
    /// assert!(!StringCase::new("fooBar").can_be_camel_case());
    /// ```
    pub fn can_be_camel_case(&self) -> bool {
        self.can_become_joined(Self::make_camel_case, |case| case.is_mixed_camel_case())
    }

    pub fn can_be_proper_camel_case(&self) -> bool {
        self.can_become_joined(Self::make_proper_camel_case, |case| case.is_camel_case())
    }

    pub fn can_be_pascal_case(&self) -> bool {
        self.can_become_joined(Self::make_pascal_case, |case| case.is_pascal_case())
    }
}

#[cfg(test)]
mod tests {
    use crate::StringCase;

    fn under(word: &str) -> StringCase<'_> {
        StringCase::of(word, '_')
    }

    #[test]
    fn screaming_snake_case() {
        assert!(under("a_").can_be_screaming_snake_case());
        assert!(under("_a").can_be_screaming_snake_case());
        assert!(under("aB").can_be_screaming_snake_case());
        assert!(under("BaA").can_be_screaming_snake_case());
        assert!(!under("Ba").can_be_screaming_snake_case());
        assert!(!under("a").can_be_screaming_snake_case());
        assert!(!under("A_").can_be_screaming_snake_case());
        assert!(!under("123_").can_be_screaming_snake_case());
        assert!(!under("123").can_be_screaming_snake_case());
    }

    #[test]
    fn snake_case() {
        assert!(under("aB").can_be_snake_case());
        assert!(under("BaA").can_be_snake_case());
        assert!(under("A_").can_be_snake_case());
        assert!(!under("a_").can_be_snake_case());
        assert!(!under("_a").can_be_snake_case());
        assert!(!under("Ba").can_be_snake_case());
        assert!(!under("123").can_be_snake_case());
    }

    #[test]
    fn mixed_snake_case() {
        assert!(under("fooBar").can_be_mixed_snake_case());
        assert!(!under("foo_Bar").can_be_mixed_snake_case());
        assert!(!under("foo").can_be_mixed_snake_case());
    }

    #[test]
    fn camel_case() {
        assert!(under("a_a").can_be_camel_case());
        assert!(under("a_A").can_be_camel_case());
        assert!(under("A_a").can_be_camel_case());
        assert!(under("A_A").can_be_camel_case());
        assert!(!under("Abc").can_be_camel_case());
        assert!(!under("A_").can_be_camel_case());
        assert!(!under("_A").can_be_camel_case());
        assert!(!under("aB").can_be_camel_case());
        assert!(!under("Ba").can_be_camel_case());
        assert!(!under("a_").can_be_camel_case());
        assert!(!under("123_").can_be_camel_case());
        assert!(under("ABC").can_be_camel_case());
        assert!(under("A1B").can_be_camel_case());
    }

    #[test]
    fn proper_camel_case() {
        assert!(under("a_a").can_be_proper_camel_case());
        assert!(under("A_A").can_be_proper_camel_case());
        assert!(under("AbcDef").can_be_proper_camel_case());
        assert!(!under("Abc").can_be_proper_camel_case());
        assert!(!under("ABC").can_be_proper_camel_case());
        assert!(!under("aB").can_be_proper_camel_case());
        assert!(!under("Ba").can_be_proper_camel_case());
        assert!(!under("A").can_be_proper_camel_case());
    }

    #[test]
    fn pascal_case() {
        assert!(under("aa_a").can_be_pascal_case());
        assert!(under("AA_AA").can_be_pascal_case());
        assert!(under("aa_aA").can_be_pascal_case());
        assert!(!under("a_aa").can_be_pascal_case());
        assert!(!under("A_AA").can_be_pascal_case());
        assert!(!under("aBc").can_be_pascal_case());
        assert!(!under("Ba").can_be_pascal_case());
        assert!(!under("a_a").can_be_pascal_case());
    }

    #[test]
    fn dash_dot_slash() {
        let case = StringCase::new("fooBar");

        assert!(case.can_be_dash_case());
        assert!(case.can_be_mixed_dash_case());
        assert!(case.can_be_screaming_dash_case());
        assert!(case.can_be_dot_case());
        assert!(case.can_be_mixed_dot_case());
        assert!(case.can_be_screaming_dot_case());
        assert!(case.can_be_slash_case());
        assert!(case.can_be_mixed_slash_case());
        assert!(case.can_be_screaming_slash_case());
        assert!(!StringCase::new("foo-bar").can_be_dash_case());
        assert!(StringCase::new("foo-bar").can_be_dot_case());
    }

    #[test]
    fn space_case() {
        let case = StringCase::new("foo_bar");

        assert!(case.can_be_space_case());
        assert!(case.can_be_mixed_space_case());
        assert!(case.can_be_screaming_space_case());
        assert!(case.can_be_capitalized_space_case());
        assert!(!StringCase::new("foo bar").can_be_space_case());
        assert!(StringCase::new("foo bar").can_be_capitalized_space_case());
        // Leading separators become leading spaces.
        assert!(!StringCase::new("_foo").can_be_space_case());
    }

    #[test]
    fn foreign_characters_are_rejected() {
        assert!(!StringCase::new("foo$bar").can_be_snake_case());
        assert!(!StringCase::new("foo bar").can_be_snake_case());
        assert!(!StringCase::new("").can_be_snake_case());
        assert!(!StringCase::new("").can_be_camel_case());
    }

    #[test]
    fn converted_word_satisfies_predicate() {
        let case = StringCase::new("someValue_2");

        assert!(case.can_be_screaming_snake_case());
        assert!(StringCase::new(&case.make_screaming_snake_case()).is_screaming_snake_case());
    }
}
