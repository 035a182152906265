//! Purchasing domain module (purchase lines awaiting quotations).
//!
//! This crate contains the purchase-line entity, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod purchase;

pub use purchase::{MAX_QUANTITY, Purchase};
