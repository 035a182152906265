//! Built-in data set used when no input file is configured.
//!
//! Three purchase lines shipping in June 2022 against one normal and two
//! special quotations for product 1 and a normal quotation for product 2.
//! Product 3 has no quotation at all.

use chrono::NaiveDate;

use quotealloc_core::{ProductId, PurchaseId, QuotationId};
use quotealloc_quotations::QuotationKind;

use crate::dto::{AllocationInput, PurchaseInput, QuotationInput};

/// Evaluated in const context only, so a bad literal fails the build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

const JUNE_1: NaiveDate = ymd(2022, 6, 1);
const JUNE_15: NaiveDate = ymd(2022, 6, 15);
const JUNE_20: NaiveDate = ymd(2022, 6, 20);
const JUNE_30: NaiveDate = ymd(2022, 6, 30);
const JULY_31: NaiveDate = ymd(2022, 7, 31);
const YEAR_END: NaiveDate = ymd(2022, 12, 31);

pub fn reference_input() -> AllocationInput {
    let purchases = vec![
        PurchaseInput {
            id: PurchaseId::new(1),
            product_id: ProductId::new(1),
            quantity: 100,
            shipping_date: JUNE_20,
        },
        PurchaseInput {
            id: PurchaseId::new(2),
            product_id: ProductId::new(2),
            quantity: 50,
            shipping_date: JUNE_15,
        },
        PurchaseInput {
            id: PurchaseId::new(3),
            product_id: ProductId::new(3),
            quantity: 60,
            shipping_date: JUNE_20,
        },
    ];

    let quotations = vec![
        QuotationInput {
            id: QuotationId::new(1),
            kind: QuotationKind::Normal,
            product_id: ProductId::new(1),
            remaining_qty: Some(20),
            price: 80,
            valid_from: JUNE_1,
            valid_to: YEAR_END,
        },
        QuotationInput {
            id: QuotationId::new(2),
            kind: QuotationKind::Normal,
            product_id: ProductId::new(2),
            remaining_qty: Some(20),
            price: 50,
            valid_from: JUNE_1,
            valid_to: YEAR_END,
        },
        QuotationInput {
            id: QuotationId::new(3),
            kind: QuotationKind::Special,
            product_id: ProductId::new(1),
            remaining_qty: Some(20),
            price: 60,
            valid_from: JUNE_1,
            valid_to: JUNE_30,
        },
        QuotationInput {
            id: QuotationId::new(4),
            kind: QuotationKind::Special,
            product_id: ProductId::new(1),
            remaining_qty: Some(20),
            price: 40,
            valid_from: JUNE_15,
            valid_to: JULY_31,
        },
    ];

    AllocationInput {
        purchases,
        quotations,
    }
}
