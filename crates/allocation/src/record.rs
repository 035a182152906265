use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quotealloc_core::{DomainError, DomainResult, ProductId, PurchaseId, QuotationId};
use quotealloc_purchasing::Purchase;
use quotealloc_quotations::{Price, Quotation, QuotationKind};

/// One allocation outcome: part of a purchase line priced by a quotation, or
/// the part nothing could price (a shortfall, with a negative quantity and no
/// quotation fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub purchase_id: PurchaseId,
    pub quotation_id: Option<QuotationId>,
    pub kind: Option<QuotationKind>,
    pub product_id: ProductId,
    pub allocated_qty: i64,
    pub price: Option<Price>,
    pub shipping_date: NaiveDate,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
}

impl AllocationRecord {
    /// `units` of `purchase` priced by `quotation`.
    pub fn consumed(purchase: &Purchase, quotation: &Quotation, units: u64) -> DomainResult<Self> {
        let window = quotation.window();
        Ok(Self {
            purchase_id: purchase.id_typed(),
            quotation_id: Some(quotation.id_typed()),
            kind: Some(quotation.kind()),
            product_id: quotation.product_id(),
            allocated_qty: to_signed(units)?,
            price: Some(quotation.price()),
            shipping_date: purchase.shipping_date(),
            valid_from: Some(window.valid_from()),
            valid_to: Some(window.valid_to()),
        })
    }

    /// Everything still outstanding on `purchase`, recorded as unmet demand.
    pub fn shortfall(purchase: &Purchase) -> DomainResult<Self> {
        Ok(Self {
            purchase_id: purchase.id_typed(),
            quotation_id: None,
            kind: None,
            product_id: purchase.product_id(),
            allocated_qty: -to_signed(purchase.quantity())?,
            price: None,
            shipping_date: purchase.shipping_date(),
            valid_from: None,
            valid_to: None,
        })
    }

    pub fn is_shortfall(&self) -> bool {
        self.quotation_id.is_none()
    }

    /// Units this record accounts for, regardless of sign.
    pub fn units(&self) -> u64 {
        self.allocated_qty.unsigned_abs()
    }
}

fn to_signed(units: u64) -> DomainResult<i64> {
    i64::try_from(units)
        .map_err(|_| DomainError::invariant(format!("quantity {units} does not fit a record")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotealloc_purchasing::MAX_QUANTITY;
    use quotealloc_quotations::ValidityWindow;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn purchase() -> Purchase {
        Purchase::new(PurchaseId::new(3), ProductId::new(9), 60, date(2022, 6, 20)).unwrap()
    }

    #[test]
    fn consumed_copies_quotation_terms() {
        let q = Quotation::special(
            QuotationId::new(4),
            ProductId::new(9),
            20,
            Price::new(40),
            ValidityWindow::new(date(2022, 6, 15), date(2022, 7, 31)).unwrap(),
        );

        let record = AllocationRecord::consumed(&purchase(), &q, 20).unwrap();

        assert_eq!(record.purchase_id, PurchaseId::new(3));
        assert_eq!(record.quotation_id, Some(QuotationId::new(4)));
        assert_eq!(record.kind, Some(QuotationKind::Special));
        assert_eq!(record.allocated_qty, 20);
        assert_eq!(record.price, Some(Price::new(40)));
        assert_eq!(record.shipping_date, date(2022, 6, 20));
        assert_eq!(record.valid_from, Some(date(2022, 6, 15)));
        assert_eq!(record.valid_to, Some(date(2022, 7, 31)));
        assert!(!record.is_shortfall());
    }

    #[test]
    fn shortfall_is_negative_and_unquoted() {
        let record = AllocationRecord::shortfall(&purchase()).unwrap();

        assert_eq!(record.allocated_qty, -60);
        assert_eq!(record.units(), 60);
        assert_eq!(record.product_id, ProductId::new(9));
        assert!(record.is_shortfall());
        assert!(record.kind.is_none());
        assert!(record.price.is_none());
        assert!(record.valid_from.is_none() && record.valid_to.is_none());
    }

    #[test]
    fn shortfall_serializes_nulls() {
        let json = serde_json::to_value(AllocationRecord::shortfall(&purchase()).unwrap()).unwrap();
        assert!(json["quotation_id"].is_null());
        assert!(json["price"].is_null());
        assert_eq!(json["allocated_qty"], -60);
        assert_eq!(json["shipping_date"], "2022-06-20");
    }

    #[test]
    fn largest_purchase_shortfall_keeps_every_unit() {
        let p = Purchase::new(PurchaseId::new(1), ProductId::new(1), MAX_QUANTITY, date(2022, 6, 20))
            .unwrap();

        let record = AllocationRecord::shortfall(&p).unwrap();

        assert_eq!(record.allocated_qty, -i64::MAX);
        assert_eq!(record.units(), p.original_quantity());
    }

    #[test]
    fn oversized_consumption_is_an_invariant_error() {
        let q = Quotation::special(
            QuotationId::new(4),
            ProductId::new(9),
            u64::MAX,
            Price::new(40),
            ValidityWindow::new(date(2022, 6, 1), date(2022, 6, 30)).unwrap(),
        );

        let err = AllocationRecord::consumed(&purchase(), &q, u64::MAX).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }
}
