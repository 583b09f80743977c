use super::common::*;
use crate::session::ledger::PurchaseLedger;

#[test]
fn ledger_preserves_insertion_order() {
    let ledger = ledger_of(vec![local_groceries(), imported_laptop(), regional_shoes()]);

    let products: Vec<&str> = ledger
        .records()
        .iter()
        .map(|record| record.product().label())
        .collect();
    assert_eq!(products, vec!["Groceries", "Electronics", "Shoes"]);
    assert_eq!(
        ledger.latest().map(|record| record.product().label()),
        Some("Shoes")
    );
}

#[test]
fn clear_empties_the_ledger() {
    let mut ledger = ledger_of(vec![local_groceries(), imported_laptop()]);
    ledger.clear();

    assert!(ledger.is_empty());
    assert!(ledger.latest().is_none());
    assert_eq!(ledger.eco_count(), 0);
}

#[test]
fn summary_totals_impact_and_distance() {
    let ledger = ledger_of(vec![local_groceries(), regional_shoes()]);
    let summary = ledger.summary();

    assert_eq!(summary.purchases, 2);
    assert_eq!(summary.eco_purchases, 1);
    assert_eq!(summary.total_impact_kg, 330.07);
    assert_eq!(summary.total_distance_km, 804.96);
}

#[test]
fn empty_summary_is_zeroed() {
    let summary = PurchaseLedger::new().summary();
    assert_eq!(summary.purchases, 0);
    assert_eq!(summary.total_impact_kg, 0.0);
}

#[test]
fn records_keep_their_creation_values() {
    let record = imported_laptop();
    let copy = record.clone();
    let ledger = ledger_of(vec![record]);

    assert_eq!(ledger.records()[0], copy);
    assert_eq!(copy.recorded_at(), recorded_at());
    assert_eq!(copy.eco_label(), "No");
    assert_eq!(local_groceries().eco_label(), "Yes");
}

#[test]
fn breakdown_uses_stored_distance() {
    let record = regional_shoes();
    let breakdown = record.breakdown();

    assert_eq!(breakdown.distance_km, record.distance_km());
    assert_eq!(breakdown.material_impact_kg, 285.0);
    assert_eq!(breakdown.transport_impact_kg, 12.07);
    assert_eq!(breakdown.total_impact_kg, record.impact_kg());
}
