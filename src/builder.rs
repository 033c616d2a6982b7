use crate::{CharFlags, IntoSeparators, StringCase};

/// Reusable separator configuration for classifying many words.
///
/// Starts out with the default separators `_`, `.`, `-` and `/`.
///
/// # Example
/// ```
/// use string_case::StringCaseBuilder;
///
/// let mut builder = StringCaseBuilder::new();
/// builder.separators('_').separator(' ');
///
/// assert_eq!(builder.build("foo bar").make_snake_case(), "foo_bar");
/// assert_eq!(builder.build("foo-bar").make_snake_case(), "foo-bar");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StringCaseBuilder {
    separators: CharFlags,
}

impl StringCaseBuilder {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            separators: CharFlags::SEPARATOR,
        }
    }

    /// Replace the separator set.
    ///
    /// Separators that cannot be coerced into a mask reset the set to the default.
    #[inline]
    pub fn separators<S>(&mut self, separators: S) -> &mut Self
    where
        S: IntoSeparators,
    {
        self.separators = separators.into_separators_or_default();
        self
    }

    /// Add a separator to the set.
    ///
    /// Separator strings that cannot be coerced into a mask are ignored.
    pub fn separator<S>(&mut self, separator: S) -> &mut Self
    where
        S: IntoSeparators,
    {
        match separator.into_separators() {
            Ok(flags) => self.separators |= flags,
            Err(error) => log::debug!("ignoring separator: {}", error),
        }
        self
    }

    /// Remove every separator, so conversions only split at case boundaries.
    #[inline]
    pub fn no_separators(&mut self) -> &mut Self {
        self.separators = CharFlags::empty();
        self
    }

    #[inline]
    pub fn current_separators(&self) -> CharFlags {
        self.separators
    }

    /// Classify `word` with the configured separators.
    #[inline]
    #[must_use]
    pub fn build<'a>(&self, word: &'a str) -> StringCase<'a> {
        StringCase::with_separators(word, self.separators)
    }
}

impl Default for StringCaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{CharFlags, StringCaseBuilder};

    #[test]
    fn default_separators() {
        assert_eq!(
            StringCaseBuilder::new().current_separators(),
            CharFlags::SEPARATOR
        );
        assert_eq!(StringCaseBuilder::default(), StringCaseBuilder::new());
    }

    #[test]
    fn replace_separators() {
        let mut builder = StringCaseBuilder::new();
        builder.separators(CharFlags::DOT);

        assert_eq!(builder.current_separators(), CharFlags::DOT);
        assert_eq!(builder.build("a.b-c").make_snake_case(), "a_b-c");
    }

    #[test]
    fn malformed_separators_reset_to_default() {
        let mut builder = StringCaseBuilder::new();
        builder.separators(CharFlags::DOT).separators("garbage");

        assert_eq!(builder.current_separators(), CharFlags::SEPARATOR);
    }

    #[test]
    fn add_separator() {
        let mut builder = StringCaseBuilder::new();
        builder.separator(' ').separator("x y");

        assert_eq!(
            builder.current_separators(),
            CharFlags::SEPARATOR | CharFlags::SPACE
        );
    }

    #[test]
    fn letter_separator() {
        let mut builder = StringCaseBuilder::new();
        builder.separators('x');

        assert_eq!(builder.current_separators(), CharFlags::LOWER);
        assert_eq!(builder.build("aXb").make_mixed_snake_case(), "_X_");
    }

    #[test]
    fn no_separators() {
        let mut builder = StringCaseBuilder::new();
        builder.no_separators();

        assert_eq!(builder.build("foo.barBaz").make_mixed_dash_case(), "foo.bar-Baz");
    }

    #[test]
    fn built_cases_share_configuration() {
        let mut builder = StringCaseBuilder::new();
        builder.separators(' ');

        let first = builder.build("foo bar");
        let second = builder.build("baz qux");

        assert_eq!(first.separators(), second.separators());
        assert!(first.can_be_camel_case());
        assert_eq!(second.make_camel_case(), "bazQux");
    }
}
