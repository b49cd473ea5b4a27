//! Syntax categories and their precedence.
//!
//! This module provides the [`Category`] enum. Declaration order is priority
//! order: the derived [`Ord`] puts [`Category::Comment`] first, and a
//! category that sorts earlier always wins an overlap against one that sorts
//! later.

use strum::{Display, EnumString, IntoStaticStr};

/// A syntax class a span of text can be tagged with.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use tinct_syntax::Category;
///
/// assert!(Category::Comment < Category::Number);
/// assert_eq!(Category::from_str("Keyword").ok(), Some(Category::Keyword));
/// assert_eq!(Category::Function.to_string(), "function");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    /// Line and block comments.
    Comment,
    /// Quoted literals.
    String,
    /// Reserved words from the fixed vocabulary.
    Keyword,
    /// Identifiers immediately followed by an opening parenthesis.
    Function,
    /// Runs of decimal digits.
    Number,
}

impl Category {
    /// Every category, highest priority first.
    pub const ALL: [Self; 5] = [
        Self::Comment,
        Self::String,
        Self::Keyword,
        Self::Function,
        Self::Number,
    ];

    /// Returns the snake_case name of the category.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns whether this category is evaluated before `other`.
    #[must_use]
    pub fn outranks(self, other: Self) -> bool {
        self < other
    }
}
