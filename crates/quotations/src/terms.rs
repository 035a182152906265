//! Value objects describing the commercial terms of a quotation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quotealloc_core::{DomainError, DomainResult};

/// Unit price of a quotation, in the smallest currency unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Inclusive date range during which a quotation may be used.
///
/// Not deserializable: windows enter the domain through
/// [`ValidityWindow::new`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidityWindow {
    from: NaiveDate,
    to: NaiveDate,
}

impl ValidityWindow {
    /// Build a window, rejecting `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> DomainResult<Self> {
        if from > to {
            return Err(DomainError::validation(format!(
                "validity window starts after it ends ({from} > {to})"
            )));
        }
        Ok(Self { from, to })
    }

    /// Build a window without checking its bounds.
    ///
    /// An inverted window contains no date, so a quotation carrying one is
    /// simply never matched.
    pub fn unchecked(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn valid_from(&self) -> NaiveDate {
        self.from
    }

    pub fn valid_to(&self) -> NaiveDate {
        self.to
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}
