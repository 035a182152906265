//! `quotealloc-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the quotation,
//! purchasing and allocation crates (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AllocationRunId, ProductId, PurchaseId, QuotationId};
