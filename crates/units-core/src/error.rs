use thiserror::Error;

use crate::Category;

/// A token that names no unit of the category being converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit '{0}'")]
pub struct UnknownUnit(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Either side of the pair is not a unit of `category`. The message does
    /// not say which one.
    #[error("invalid {} unit '{}' or '{}'", .category.noun(), .from, .to)]
    InvalidUnit { category: Category, from: String, to: String },

    #[error("could not determine conversion type for units '{from}' and '{to}'")]
    UnrecognizedCategory { from: String, to: String },
}

impl ConversionError {
    pub(crate) fn invalid(category: Category, from: &str, to: &str) -> Self {
        ConversionError::InvalidUnit { category, from: from.to_owned(), to: to.to_owned() }
    }
}
