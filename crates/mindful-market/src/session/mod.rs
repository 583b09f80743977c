//! Per-session purchase history, eco-score aggregation, and feedback.

pub mod import;
pub mod ledger;
pub mod score;
pub mod service;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use import::{PurchaseImportError, PurchaseImporter};
pub use ledger::{LedgerSummary, PurchaseLedger, PurchaseRecord};
pub use score::{
    badges_for, record_points, Badge, EcoStanding, MascotMood, ScoreAggregator,
    EMPTY_HISTORY_SCORE, LOW_PRICE_LIMIT, SHORT_HAUL_LIMIT_KM,
};
pub use service::{EcoSession, PurchaseRequest};
pub use suggestions::{suggestions_for, Suggestion, EMPTY_HISTORY_HINT};
