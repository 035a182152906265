use chrono::NaiveDate;
use serde::Serialize;

use quotealloc_core::{DomainError, DomainResult, Entity, ProductId, PurchaseId};

/// Largest quantity a purchase line may carry: allocation records report
/// quantities as signed values, shortfalls being negative.
pub const MAX_QUANTITY: u64 = i64::MAX as u64;

/// Entity: a purchase line that must be priced against quotations.
///
/// `quantity` is the part still waiting for a quotation. It only ever
/// decreases; `original_quantity` keeps the requested amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Purchase {
    id: PurchaseId,
    product_id: ProductId,
    original_quantity: u64,
    quantity: u64,
    shipping_date: NaiveDate,
    done: bool,
}

impl Purchase {
    /// A zero-quantity line has nothing to price and starts out done.
    /// Quantities above [`MAX_QUANTITY`] are rejected.
    pub fn new(
        id: PurchaseId,
        product_id: ProductId,
        quantity: u64,
        shipping_date: NaiveDate,
    ) -> DomainResult<Self> {
        if quantity > MAX_QUANTITY {
            return Err(DomainError::validation(format!(
                "purchase {id} quantity {quantity} exceeds {MAX_QUANTITY}"
            )));
        }

        Ok(Self {
            id,
            product_id,
            original_quantity: quantity,
            quantity,
            shipping_date,
            done: quantity == 0,
        })
    }

    pub fn id_typed(&self) -> PurchaseId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn original_quantity(&self) -> u64 {
        self.original_quantity
    }

    pub fn shipping_date(&self) -> NaiveDate {
        self.shipping_date
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Still waiting for a quotation.
    pub fn is_open(&self) -> bool {
        !self.done && self.quantity > 0
    }

    /// Remove `units` from the outstanding quantity.
    ///
    /// Reaching zero marks the line done.
    pub fn consume(&mut self, units: u64) -> DomainResult<()> {
        if self.done {
            return Err(DomainError::invariant(format!(
                "purchase {} is already done",
                self.id
            )));
        }
        if units > self.quantity {
            return Err(DomainError::invariant(format!(
                "cannot consume {units} units from purchase {} with {} outstanding",
                self.id, self.quantity
            )));
        }

        self.quantity -= units;
        if self.quantity == 0 {
            self.done = true;
        }
        Ok(())
    }

    /// Stop considering this line, whatever is still outstanding.
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

impl Entity for Purchase {
    type Id = PurchaseId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
