use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quotealloc_core::{Entity, ProductId, QuotationId};

use crate::terms::{Price, ValidityWindow};

/// Quotation kind.
///
/// Special quotations are cheaper, capped and time-limited; they take
/// precedence over normal (year-round, uncapped) quotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationKind {
    Normal,
    Special,
}

impl QuotationKind {
    /// Selection rank: lower ranks are preferred.
    pub fn rank(self) -> u8 {
        match self {
            QuotationKind::Special => 0,
            QuotationKind::Normal => 1,
        }
    }
}

/// Remaining supply of a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "state")]
pub enum Capacity {
    /// No cap; consumption never decrements it. `available` is fixed when the
    /// quotation is built from its recorded quantity.
    Unlimited { available: bool },
    /// Capped supply with the given number of units left.
    Limited(u64),
}

impl Capacity {
    pub fn is_available(&self) -> bool {
        match self {
            Capacity::Unlimited { available } => *available,
            Capacity::Limited(remaining) => *remaining > 0,
        }
    }

    pub fn remaining(&self) -> Option<u64> {
        match self {
            Capacity::Unlimited { .. } => None,
            Capacity::Limited(remaining) => Some(*remaining),
        }
    }
}

/// Entity: Quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quotation {
    id: QuotationId,
    kind: QuotationKind,
    product_id: ProductId,
    capacity: Capacity,
    price: Price,
    window: ValidityWindow,
}

impl Quotation {
    /// A normal quotation: uncapped supply.
    ///
    /// `recorded_qty` is never decremented; it only decides availability, and
    /// a normal quotation recorded with zero units is never selected.
    pub fn normal(
        id: QuotationId,
        product_id: ProductId,
        recorded_qty: u64,
        price: Price,
        window: ValidityWindow,
    ) -> Self {
        Self {
            id,
            kind: QuotationKind::Normal,
            product_id,
            capacity: Capacity::Unlimited {
                available: recorded_qty > 0,
            },
            price,
            window,
        }
    }

    /// A special quotation with `remaining` units of supply.
    pub fn special(
        id: QuotationId,
        product_id: ProductId,
        remaining: u64,
        price: Price,
        window: ValidityWindow,
    ) -> Self {
        Self {
            id,
            kind: QuotationKind::Special,
            product_id,
            capacity: Capacity::Limited(remaining),
            price,
            window,
        }
    }

    pub fn id_typed(&self) -> QuotationId {
        self.id
    }

    pub fn kind(&self) -> QuotationKind {
        self.kind
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn remaining(&self) -> Option<u64> {
        self.capacity.remaining()
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn window(&self) -> ValidityWindow {
        self.window
    }

    pub fn is_available(&self) -> bool {
        self.capacity.is_available()
    }

    /// Whether this quotation can serve `product_id` shipping on `date`.
    pub fn applies_to(&self, product_id: ProductId, date: NaiveDate) -> bool {
        self.is_available() && self.product_id == product_id && self.window.contains(date)
    }

    /// Consume up to `requested` units and return how many were granted.
    ///
    /// Available unlimited capacity grants everything and is left untouched;
    /// limited capacity grants at most what remains and never drops below
    /// zero. Unavailable capacity grants nothing.
    pub fn take(&mut self, requested: u64) -> u64 {
        match &mut self.capacity {
            Capacity::Unlimited { available: true } => requested,
            Capacity::Unlimited { available: false } => 0,
            Capacity::Limited(remaining) => {
                let granted = requested.min(*remaining);
                *remaining -= granted;
                granted
            }
        }
    }
}

impl Entity for Quotation {
    type Id = QuotationId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
