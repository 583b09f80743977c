use super::common::*;
use crate::footprint::{Location, ProductCategory};
use crate::session::suggestions::{suggestions_for, Suggestion};

#[test]
fn eco_purchase_gets_positive_reinforcement_only() {
    assert_eq!(suggestions_for(&local_groceries()), vec![Suggestion::KeepItUp]);
}

#[test]
fn heavy_purchase_collects_every_corrective_hint() {
    assert_eq!(
        suggestions_for(&imported_laptop()),
        vec![
            Suggestion::ChooseLowerImpact,
            Suggestion::ShipFromCloser,
            Suggestion::PreferLowerPriced,
        ]
    );
}

#[test]
fn distance_hint_starts_above_three_thousand_km() {
    // India to China is 2845.38 km, China to Japan 3046.76 km.
    let near = record(
        ProductCategory::Accessories,
        10.0,
        Location::India,
        Location::China,
    );
    let far = record(
        ProductCategory::Accessories,
        10.0,
        Location::China,
        Location::Japan,
    );

    assert!(!suggestions_for(&near).contains(&Suggestion::ShipFromCloser));
    assert!(suggestions_for(&far).contains(&Suggestion::ShipFromCloser));
}

#[test]
fn messages_are_user_facing_sentences() {
    for suggestion in [
        Suggestion::ChooseLowerImpact,
        Suggestion::ShipFromCloser,
        Suggestion::PreferLowerPriced,
        Suggestion::KeepItUp,
    ] {
        assert!(suggestion.message().ends_with('.'));
    }
}
