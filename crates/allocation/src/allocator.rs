use tracing::{debug, info, info_span, warn};

use quotealloc_core::{AllocationRunId, DomainError, DomainResult, PurchaseId};
use quotealloc_purchasing::Purchase;
use quotealloc_quotations::Quotation;

use crate::record::AllocationRecord;
use crate::validate::validate;

/// Records produced by one allocator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRun {
    run_id: AllocationRunId,
    records: Vec<AllocationRecord>,
}

impl AllocationRun {
    pub fn run_id(&self) -> AllocationRunId {
        self.run_id
    }

    /// Records in the order they were produced.
    pub fn records(&self) -> &[AllocationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AllocationRecord> {
        self.records
    }

    pub fn records_for(&self, purchase_id: PurchaseId) -> impl Iterator<Item = &AllocationRecord> {
        self.records
            .iter()
            .filter(move |r| r.purchase_id == purchase_id)
    }

    /// Units priced by a quotation.
    pub fn allocated_total(&self) -> u64 {
        self.records
            .iter()
            .filter(|r| !r.is_shortfall())
            .map(AllocationRecord::units)
            .sum()
    }

    /// Units nothing could price.
    pub fn shortfall_total(&self) -> u64 {
        self.records
            .iter()
            .filter(|r| r.is_shortfall())
            .map(AllocationRecord::units)
            .sum()
    }
}

/// Prices purchase lines against quotations.
///
/// Purchases are resolved in input order: after every step the scan restarts
/// from the first open line, so an earlier line drains special stock before a
/// later one sees it. A step either prices part of a line with the best
/// applicable quotation or, when none applies, closes the line with a
/// shortfall record.
///
/// Quotation precedence: special before normal, then earliest `valid_to`, then
/// lowest quotation id, then input position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator;

impl Allocator {
    pub fn new() -> Self {
        Self
    }

    /// Run the allocation over both collections, mutating them in place.
    ///
    /// Unmet demand is reported as shortfall records, never as an error. An
    /// error means an internal invariant broke (no partial result is
    /// returned, but the collections may have been partially consumed).
    pub fn allocate(
        &self,
        purchases: &mut [Purchase],
        quotations: &mut [Quotation],
    ) -> DomainResult<AllocationRun> {
        let run_id = AllocationRunId::new();
        let span = info_span!("allocation_run", %run_id);
        let _guard = span.enter();

        let mut records = Vec::new();
        let mut steps = 0usize;

        while let Some(p_idx) = purchases.iter().position(Purchase::is_open) {
            let purchase = &mut purchases[p_idx];
            steps += 1;

            let Some(q_idx) = best_quotation(quotations, purchase) else {
                warn!(
                    purchase_id = %purchase.id_typed(),
                    product_id = %purchase.product_id(),
                    shipping_date = %purchase.shipping_date(),
                    outstanding = purchase.quantity(),
                    "no applicable quotation, recording shortfall"
                );
                records.push(AllocationRecord::shortfall(purchase)?);
                purchase.mark_done();
                continue;
            };

            let quotation = &mut quotations[q_idx];
            let granted = quotation.take(purchase.quantity());
            if granted == 0 {
                return Err(DomainError::invariant(format!(
                    "quotation {} granted nothing to purchase {}",
                    quotation.id_typed(),
                    purchase.id_typed()
                )));
            }
            purchase.consume(granted)?;

            debug!(
                purchase_id = %purchase.id_typed(),
                quotation_id = %quotation.id_typed(),
                kind = ?quotation.kind(),
                granted,
                outstanding = purchase.quantity(),
                quotation_remaining = ?quotation.remaining(),
                "allocated from quotation"
            );
            records.push(AllocationRecord::consumed(purchase, quotation, granted)?);
        }

        let run = AllocationRun { run_id, records };
        info!(
            steps,
            records = run.records.len(),
            allocated = run.allocated_total(),
            shortfall = run.shortfall_total(),
            "allocation run finished"
        );
        Ok(run)
    }

    /// Reject inconsistent input (duplicate ids) before allocating.
    pub fn allocate_validated(
        &self,
        purchases: &mut [Purchase],
        quotations: &mut [Quotation],
    ) -> DomainResult<AllocationRun> {
        validate(purchases, quotations)?;
        self.allocate(purchases, quotations)
    }
}

/// Allocate with a default [`Allocator`] and return the records only.
pub fn allocate(
    purchases: &mut [Purchase],
    quotations: &mut [Quotation],
) -> DomainResult<Vec<AllocationRecord>> {
    Allocator::new()
        .allocate(purchases, quotations)
        .map(AllocationRun::into_records)
}

fn best_quotation(quotations: &[Quotation], purchase: &Purchase) -> Option<usize> {
    quotations
        .iter()
        .enumerate()
        .filter(|(_, q)| q.applies_to(purchase.product_id(), purchase.shipping_date()))
        .min_by_key(|(idx, q)| (q.kind().rank(), q.window().valid_to(), q.id_typed(), *idx))
        .map(|(idx, _)| idx)
}
