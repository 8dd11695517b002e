//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., a page size taken from the
//! fixed set offered by the search page) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided page size is not one of the offered choices.
    #[error("unsupported page size: {0}")]
    UnsupportedPageSize(usize),
    /// Provided value could not be parsed as a number.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Number of assets requested per page of search results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// Every page size offered by the page size selector, in display order.
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    /// Returns the number of rows per page.
    pub const fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(TypeConstraintError::UnsupportedPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl FromStr for PageSize {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let value = trimmed
            .parse::<usize>()
            .map_err(|_| TypeConstraintError::InvalidValue(trimmed.to_string()))?;
        PageSize::try_from(value)
    }
}
