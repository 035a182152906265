//! Input document shapes and their conversion into domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quotealloc_core::{DomainError, DomainResult, ProductId, PurchaseId, QuotationId};
use quotealloc_purchasing::Purchase;
use quotealloc_quotations::{Price, Quotation, QuotationKind, ValidityWindow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationInput {
    pub purchases: Vec<PurchaseInput>,
    pub quotations: Vec<QuotationInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseInput {
    pub id: PurchaseId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub shipping_date: NaiveDate,
}

/// `remaining_qty` is required for special quotations. Normal quotations
/// have unlimited supply and use it only as an availability marker: zero or
/// missing means the quotation is never selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationInput {
    pub id: QuotationId,
    pub kind: QuotationKind,
    pub product_id: ProductId,
    #[serde(default)]
    pub remaining_qty: Option<i64>,
    pub price: i64,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
}

impl AllocationInput {
    pub fn into_domain(self) -> DomainResult<(Vec<Purchase>, Vec<Quotation>)> {
        let purchases = self
            .purchases
            .into_iter()
            .map(Purchase::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        let quotations = self
            .quotations
            .into_iter()
            .map(Quotation::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((purchases, quotations))
    }
}

impl TryFrom<PurchaseInput> for Purchase {
    type Error = DomainError;

    fn try_from(input: PurchaseInput) -> Result<Self, Self::Error> {
        let quantity = u64::try_from(input.quantity).map_err(|_| {
            DomainError::validation(format!(
                "purchase {} has negative quantity {}",
                input.id, input.quantity
            ))
        })?;
        Purchase::new(input.id, input.product_id, quantity, input.shipping_date)
    }
}

impl TryFrom<QuotationInput> for Quotation {
    type Error = DomainError;

    fn try_from(input: QuotationInput) -> Result<Self, Self::Error> {
        let window = ValidityWindow::new(input.valid_from, input.valid_to)
            .map_err(|e| DomainError::validation(format!("quotation {}: {e}", input.id)))?;
        let price = Price::new(input.price);
        let recorded = recorded_qty(&input)?;

        match input.kind {
            // A missing quantity counts as zero: the quotation is never selected.
            QuotationKind::Normal => Ok(Quotation::normal(
                input.id,
                input.product_id,
                recorded.unwrap_or(0),
                price,
                window,
            )),
            QuotationKind::Special => {
                let remaining = recorded.ok_or_else(|| {
                    DomainError::validation(format!(
                        "special quotation {} needs remaining_qty",
                        input.id
                    ))
                })?;
                Ok(Quotation::special(
                    input.id,
                    input.product_id,
                    remaining,
                    price,
                    window,
                ))
            }
        }
    }
}

fn recorded_qty(input: &QuotationInput) -> DomainResult<Option<u64>> {
    input
        .remaining_qty
        .map(|qty| {
            u64::try_from(qty).map_err(|_| {
                DomainError::validation(format!(
                    "quotation {} has negative remaining_qty {qty}",
                    input.id
                ))
            })
        })
        .transpose()
}
