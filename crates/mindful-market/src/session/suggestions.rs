use serde::{Deserialize, Serialize};

use super::ledger::PurchaseRecord;
use super::score::{LOW_PRICE_LIMIT, SHORT_HAUL_LIMIT_KM};

/// Shown instead of suggestions until the first purchase is recorded.
pub const EMPTY_HISTORY_HINT: &str = "Add purchases to receive personalized suggestions.";

/// Advisory feedback about the most recent purchase. Never affects the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    ChooseLowerImpact,
    ShipFromCloser,
    PreferLowerPriced,
    KeepItUp,
}

impl Suggestion {
    pub const fn message(self) -> &'static str {
        match self {
            Suggestion::ChooseLowerImpact => "Choose products with lower environmental impact.",
            Suggestion::ShipFromCloser => {
                "Buy from closer locations to reduce transport emissions."
            }
            Suggestion::PreferLowerPriced => {
                "Lower-priced essentials often have smaller footprints."
            }
            Suggestion::KeepItUp => "Great choice. Keep it up.",
        }
    }
}

/// Every suggestion that applies to `record`, in display order.
pub fn suggestions_for(record: &PurchaseRecord) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !record.eco_friendly() {
        suggestions.push(Suggestion::ChooseLowerImpact);
    }
    if record.distance_km() > SHORT_HAUL_LIMIT_KM {
        suggestions.push(Suggestion::ShipFromCloser);
    }
    if record.price() > LOW_PRICE_LIMIT {
        suggestions.push(Suggestion::PreferLowerPriced);
    }
    if record.eco_friendly() {
        suggestions.push(Suggestion::KeepItUp);
    }

    suggestions
}
