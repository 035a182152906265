//! Eager input checks for callers that want to fail fast.
//!
//! The allocator itself tolerates any input; these checks catch data that
//! would make its records ambiguous.

use std::collections::HashSet;

use quotealloc_core::{DomainError, DomainResult, Entity};
use quotealloc_purchasing::Purchase;
use quotealloc_quotations::Quotation;

/// Reject duplicate purchase ids and duplicate quotation ids.
pub fn validate(purchases: &[Purchase], quotations: &[Quotation]) -> DomainResult<()> {
    ensure_unique_ids(purchases, "purchase")?;
    ensure_unique_ids(quotations, "quotation")?;
    Ok(())
}

fn ensure_unique_ids<E>(entities: &[E], label: &str) -> DomainResult<()>
where
    E: Entity,
    E::Id: core::fmt::Display,
{
    let mut seen = HashSet::with_capacity(entities.len());
    for entity in entities {
        let id = entity.id();
        if !seen.insert(id) {
            return Err(DomainError::validation(format!("duplicate {label} id {id}")));
        }
    }
    Ok(())
}
