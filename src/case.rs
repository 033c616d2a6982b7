//! Enumeration of the supported case conventions.
//!
//! [`Case`] allows choosing a convention at runtime and dispatching to the matching predicate,
//! converter, or convertibility check on [`StringCase`].

use crate::StringCase;
use alloc::string::String;
use core::fmt::{self, Display, Formatter};

/// A case convention.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Case {
    /// `fooBar`.
    Camel,
    /// `FooBar`.
    Pascal,
    /// `fooBar` or `FooBar`.
    MixedCamel,
    /// `foo_bar`.
    Snake,
    /// `FOO_BAR`.
    ScreamingSnake,
    /// `foo_Bar`.
    MixedSnake,
    /// `foo-bar`.
    Dash,
    /// `FOO-BAR`.
    ScreamingDash,
    /// `foo-Bar`.
    MixedDash,
    /// `foo.bar`.
    Dot,
    /// `FOO.BAR`.
    ScreamingDot,
    /// `foo.Bar`.
    MixedDot,
    /// `foo/bar`.
    Slash,
    /// `FOO/BAR`.
    ScreamingSlash,
    /// `foo/Bar`.
    MixedSlash,
    /// `foo bar`.
    Space,
    /// `FOO BAR`.
    ScreamingSpace,
    /// `Foo bar`.
    CapitalizedSpace,
    /// `foo Bar`.
    MixedSpace,
}

impl Case {
    /// Every convention.
    ///
    /// Stricter conventions come before the mixed conventions that contain them, which is the
    /// order [`StringCase::detect`] checks them in.
    pub const ALL: [Case; 19] = [
        Case::Camel,
        Case::Pascal,
        Case::MixedCamel,
        Case::Snake,
        Case::ScreamingSnake,
        Case::MixedSnake,
        Case::Dash,
        Case::ScreamingDash,
        Case::MixedDash,
        Case::Dot,
        Case::ScreamingDot,
        Case::MixedDot,
        Case::Slash,
        Case::ScreamingSlash,
        Case::MixedSlash,
        Case::Space,
        Case::ScreamingSpace,
        Case::CapitalizedSpace,
        Case::MixedSpace,
    ];
}

impl Display for Case {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Case::Camel => "camelCase",
            Case::Pascal => "PascalCase",
            Case::MixedCamel => "mixedCamelCase",
            Case::Snake => "snake_case",
            Case::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Case::MixedSnake => "mixed_Snake_Case",
            Case::Dash => "dash-case",
            Case::ScreamingDash => "SCREAMING-DASH-CASE",
            Case::MixedDash => "mixed-Dash-Case",
            Case::Dot => "dot.case",
            Case::ScreamingDot => "SCREAMING.DOT.CASE",
            Case::MixedDot => "mixed.Dot.Case",
            Case::Slash => "slash/case",
            Case::ScreamingSlash => "SCREAMING/SLASH/CASE",
            Case::MixedSlash => "mixed/Slash/Case",
            Case::Space => "space case",
            Case::ScreamingSpace => "SCREAMING SPACE CASE",
            Case::CapitalizedSpace => "Capitalized space case",
            Case::MixedSpace => "mixed Space Case",
        })
    }
}

impl StringCase<'_> {
    /// Returns whether the word is in the convention `case`.
    pub fn is_case(&self, case: Case) -> bool {
        match case {
            Case::Camel => self.is_camel_case(),
            Case::Pascal => self.is_pascal_case(),
            Case::MixedCamel => self.is_mixed_camel_case(),
            Case::Snake => self.is_snake_case(),
            Case::ScreamingSnake => self.is_screaming_snake_case(),
            Case::MixedSnake => self.is_mixed_snake_case(),
            Case::Dash => self.is_dash_case(),
            Case::ScreamingDash => self.is_screaming_dash_case(),
            Case::MixedDash => self.is_mixed_dash_case(),
            Case::Dot => self.is_dot_case(),
            Case::ScreamingDot => self.is_screaming_dot_case(),
            Case::MixedDot => self.is_mixed_dot_case(),
            Case::Slash => self.is_slash_case(),
            Case::ScreamingSlash => self.is_screaming_slash_case(),
            Case::MixedSlash => self.is_mixed_slash_case(),
            Case::Space => self.is_space_case(),
            Case::ScreamingSpace => self.is_screaming_space_case(),
            Case::CapitalizedSpace => self.is_capitalized_space_case(),
            Case::MixedSpace => self.is_mixed_space_case(),
        }
    }

    /// Converts the word into the convention `case`.
    ///
    /// # Example
    /// ```
    /// use string_case::{Case, StringCase};
    ///
    /// assert_eq!(StringCase::new("fooBar").convert_to(Case::ScreamingDash), "FOO-BAR");
    /// ```
    pub fn convert_to(&self, case: Case) -> String {
        match case {
            Case::Camel => self.make_proper_camel_case(),
            Case::Pascal => self.make_pascal_case(),
            Case::MixedCamel => self.make_camel_case(),
            Case::Snake => self.make_snake_case(),
            Case::ScreamingSnake => self.make_screaming_snake_case(),
            Case::MixedSnake => self.make_mixed_snake_case(),
            Case::Dash => self.make_dash_case(),
            Case::ScreamingDash => self.make_screaming_dash_case(),
            Case::MixedDash => self.make_mixed_dash_case(),
            Case::Dot => self.make_dot_case(),
            Case::ScreamingDot => self.make_screaming_dot_case(),
            Case::MixedDot => self.make_mixed_dot_case(),
            Case::Slash => self.make_slash_case(),
            Case::ScreamingSlash => self.make_screaming_slash_case(),
            Case::MixedSlash => self.make_mixed_slash_case(),
            Case::Space => self.make_space_case(),
            Case::ScreamingSpace => self.make_screaming_space_case(),
            Case::CapitalizedSpace => self.make_capitalized_space_case(),
            Case::MixedSpace => self.make_mixed_space_case(),
        }
    }

    /// Returns whether the word can be converted into the convention `case`.
    pub fn can_be_case(&self, case: Case) -> bool {
        match case {
            Case::Camel => self.can_be_proper_camel_case(),
            Case::Pascal => self.can_be_pascal_case(),
            Case::MixedCamel => self.can_be_camel_case(),
            Case::Snake => self.can_be_snake_case(),
            Case::ScreamingSnake => self.can_be_screaming_snake_case(),
            Case::MixedSnake => self.can_be_mixed_snake_case(),
            Case::Dash => self.can_be_dash_case(),
            Case::ScreamingDash => self.can_be_screaming_dash_case(),
            Case::MixedDash => self.can_be_mixed_dash_case(),
            Case::Dot => self.can_be_dot_case(),
            Case::ScreamingDot => self.can_be_screaming_dot_case(),
            Case::MixedDot => self.can_be_mixed_dot_case(),
            Case::Slash => self.can_be_slash_case(),
            Case::ScreamingSlash => self.can_be_screaming_slash_case(),
            Case::MixedSlash => self.can_be_mixed_slash_case(),
            Case::Space => self.can_be_space_case(),
            Case::ScreamingSpace => self.can_be_screaming_space_case(),
            Case::CapitalizedSpace => self.can_be_capitalized_space_case(),
            Case::MixedSpace => self.can_be_mixed_space_case(),
        }
    }

    /// Returns the first convention in [`Case::ALL`] the word is in, if any.
    ///
    /// # Example
    /// ```
    /// use string_case::{Case, StringCase};
    ///
    /// assert_eq!(StringCase::new("foo_bar").detect(), Some(Case::Snake));
    /// assert_eq!(StringCase::new("Foo_bar").detect(), Some(Case::MixedSnake));
    /// assert_eq!(StringCase::new("foo").detect(), None);
    /// ```
    pub fn detect(&self) -> Option<Case> {
        Case::ALL.iter().copied().find(|&case| self.is_case(case))
    }
}
