//! Allocation of purchase lines to quotations.
//!
//! The [`Allocator`] walks the purchase lines in input order and prices each
//! one against the best applicable quotation (special before normal, soonest
//! expiry first), splitting a line across quotations when special stock runs
//! out. Lines that nothing can serve produce a negative shortfall record.

pub mod allocator;
pub mod record;
pub mod validate;

pub use allocator::{AllocationRun, Allocator, allocate};
pub use record::AllocationRecord;
pub use validate::validate;
