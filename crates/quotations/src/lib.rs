//! Quotations domain module.
//!
//! A quotation is a supplier offer for one product at a fixed price within a
//! validity window. Normal quotations have unlimited supply; special
//! quotations are capped and time-limited, and must be used first.

pub mod quotation;
pub mod terms;

pub use quotation::{Capacity, Quotation, QuotationKind};
pub use terms::{Price, ValidityWindow};
