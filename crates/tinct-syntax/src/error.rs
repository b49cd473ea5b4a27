//! Error types for catalog construction.
//!
//! Highlighting itself never fails: every string, including the empty one,
//! produces a well-defined output. The only failures are defects in matcher
//! definitions, which surface when a [`crate::Pattern`] or
//! [`crate::PatternCatalog`] is built.

use thiserror::Error;

use crate::category::Category;

/// Errors from building patterns and catalogs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// The regular expression for a category failed to compile.
    #[error("invalid pattern for {category}: {message}")]
    PatternCompile {
        /// The category the pattern was compiled for.
        category: Category,
        /// Description of the compilation failure.
        message: String,
    },

    /// The token group does not exist in the compiled expression.
    #[error("pattern for {category} has no capture group {group} (it has {available})")]
    MissingTokenGroup {
        /// The category the pattern was compiled for.
        category: Category,
        /// The requested token group.
        group: usize,
        /// Number of groups the expression defines, including group 0.
        available: usize,
    },

    /// Catalog entries are not in strictly ascending priority order.
    #[error("catalog entry {found} cannot follow {previous}")]
    CatalogOrder {
        /// Category of the preceding entry.
        previous: Category,
        /// Category of the offending entry.
        found: Category,
    },
}

impl SyntaxError {
    /// Creates a pattern compilation error.
    #[must_use]
    pub fn pattern_compile(category: Category, message: impl Into<String>) -> Self {
        Self::PatternCompile {
            category,
            message: message.into(),
        }
    }

    /// Creates a missing token group error.
    #[must_use]
    pub const fn missing_token_group(category: Category, group: usize, available: usize) -> Self {
        Self::MissingTokenGroup {
            category,
            group,
            available,
        }
    }

    /// Creates a catalog ordering error.
    #[must_use]
    pub const fn catalog_order(previous: Category, found: Category) -> Self {
        Self::CatalogOrder { previous, found }
    }
}
