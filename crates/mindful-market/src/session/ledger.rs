use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::footprint::estimator::{is_eco_friendly, round_to_cents};
use crate::footprint::{EstimateResult, ImpactBreakdown, ProductCategory};

/// Immutable record of one purchase and the footprint computed when it was submitted.
///
/// Only serialized. Records are built inside the crate so the eco flag always
/// matches the stored impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseRecord {
    product: ProductCategory,
    price: f64,
    impact_kg: f64,
    distance_km: f64,
    eco_friendly: bool,
    recorded_at: DateTime<Utc>,
}

impl PurchaseRecord {
    pub(crate) fn new(
        estimate: EstimateResult,
        product: ProductCategory,
        price: f64,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product,
            price,
            impact_kg: estimate.impact_kg,
            distance_km: estimate.distance_km,
            eco_friendly: is_eco_friendly(estimate.impact_kg),
            recorded_at,
        }
    }

    pub fn product(&self) -> &ProductCategory {
        &self.product
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn impact_kg(&self) -> f64 {
        self.impact_kg
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn eco_friendly(&self) -> bool {
        self.eco_friendly
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn eco_label(&self) -> &'static str {
        if self.eco_friendly {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn breakdown(&self) -> ImpactBreakdown {
        ImpactBreakdown::from_parts(&self.product, self.price, self.distance_km, self.impact_kg)
    }
}

/// Insertion-ordered purchase history for a single session.
#[derive(Debug, Default, Clone)]
pub struct PurchaseLedger {
    records: Vec<PurchaseRecord>,
}

impl PurchaseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PurchaseRecord) -> &PurchaseRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&PurchaseRecord> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn eco_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.eco_friendly)
            .count()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            purchases: self.len(),
            eco_purchases: self.eco_count(),
            total_impact_kg: round_to_cents(self.records.iter().map(|r| r.impact_kg).sum()),
            total_distance_km: round_to_cents(self.records.iter().map(|r| r.distance_km).sum()),
        }
    }
}

/// Totals across the current history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub purchases: usize,
    pub eco_purchases: usize,
    pub total_impact_kg: f64,
    pub total_distance_km: f64,
}
