use chrono::{DateTime, TimeZone, Utc};

use crate::footprint::{estimate, Location, ProductCategory};
use crate::session::ledger::{PurchaseLedger, PurchaseRecord};
use crate::session::service::PurchaseRequest;

pub(super) fn recorded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn record(
    product: ProductCategory,
    price: f64,
    buyer: Location,
    shipper: Location,
) -> PurchaseRecord {
    let estimate = estimate(&product, price, buyer, shipper).expect("valid estimate");
    PurchaseRecord::new(estimate, product, price, recorded_at())
}

/// Domestic groceries: eco, cheap, short haul (75 points).
pub(super) fn local_groceries() -> PurchaseRecord {
    record(
        ProductCategory::Groceries,
        100.0,
        Location::India,
        Location::India,
    )
}

/// Imported electronics: not eco, expensive, long haul (40 points).
pub(super) fn imported_laptop() -> PurchaseRecord {
    record(
        ProductCategory::Electronics,
        2500.0,
        Location::India,
        Location::UnitedStates,
    )
}

/// Shoes shipped across Europe: not eco, cheap, short haul (50 points).
pub(super) fn regional_shoes() -> PurchaseRecord {
    record(
        ProductCategory::Shoes,
        300.0,
        Location::France,
        Location::Germany,
    )
}

pub(super) fn ledger_of(records: Vec<PurchaseRecord>) -> PurchaseLedger {
    let mut ledger = PurchaseLedger::new();
    for record in records {
        ledger.append(record);
    }
    ledger
}

pub(super) fn request(product: &str, price: f64, buyer: &str, shipper: &str) -> PurchaseRequest {
    PurchaseRequest {
        product: product.to_string(),
        price,
        buyer: buyer.to_string(),
        shipper: shipper.to_string(),
    }
}
