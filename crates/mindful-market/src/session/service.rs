use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ledger::{LedgerSummary, PurchaseLedger, PurchaseRecord};
use super::score::{EcoStanding, ScoreAggregator};
use super::suggestions::{self, Suggestion};
use crate::footprint::estimator::{validate_estimate, validate_price};
use crate::footprint::{
    self, EstimateError, EstimateResult, ImpactBreakdown, Location, ProductCategory,
};

/// Raw purchase inputs as collected by a shell (form, CSV row, JSON body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub product: String,
    pub price: f64,
    pub buyer: String,
    pub shipper: String,
}

/// Per-session context exposing every engine operation.
///
/// Owns the purchase history exclusively; create one per user session and
/// drop it when the session ends.
#[derive(Debug, Default)]
pub struct EcoSession {
    ledger: PurchaseLedger,
    aggregator: ScoreAggregator,
}

impl EcoSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_locations(&self) -> Vec<Location> {
        footprint::list_locations()
    }

    pub fn list_sub_locations(&self, location: Location) -> &'static [&'static str] {
        footprint::list_sub_locations(location)
    }

    pub fn list_product_categories(&self) -> Vec<ProductCategory> {
        footprint::list_product_categories()
    }

    /// Estimate a purchase without recording it.
    pub fn estimate(
        &self,
        product: &str,
        price: f64,
        buyer: &str,
        shipper: &str,
    ) -> Result<EstimateResult, EstimateError> {
        footprint::estimate_by_name(product, price, buyer, shipper)
    }

    /// Append an estimated purchase to the history, stamped with the current time.
    pub fn record_purchase(
        &mut self,
        estimate: EstimateResult,
        product: ProductCategory,
        price: f64,
    ) -> Result<PurchaseRecord, EstimateError> {
        self.record_purchase_at(estimate, product, price, Utc::now())
    }

    /// Append a purchase stamped with `recorded_at`.
    ///
    /// Rejects non-positive prices and estimates with negative or non-finite
    /// figures. The stored eco flag is derived from the impact, not taken from
    /// the caller.
    pub fn record_purchase_at(
        &mut self,
        estimate: EstimateResult,
        product: ProductCategory,
        price: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<PurchaseRecord, EstimateError> {
        let price = validate_price(price)?;
        let estimate = validate_estimate(estimate)?;
        let record = PurchaseRecord::new(estimate, product, price, recorded_at);
        let stored = self.ledger.append(record).clone();

        debug!(
            product = %stored.product(),
            impact_kg = stored.impact_kg(),
            eco = stored.eco_friendly(),
            purchases = self.ledger.len(),
            "purchase recorded"
        );

        Ok(stored)
    }

    /// Estimate and record in one step.
    pub fn submit_purchase(
        &mut self,
        request: &PurchaseRequest,
    ) -> Result<PurchaseRecord, EstimateError> {
        let estimate = self.estimate(
            &request.product,
            request.price,
            &request.buyer,
            &request.shipper,
        )?;
        self.record_purchase(
            estimate,
            ProductCategory::from_name(&request.product),
            request.price,
        )
    }

    pub fn list_history(&self) -> &[PurchaseRecord] {
        self.ledger.records()
    }

    pub fn clear_history(&mut self) {
        let dropped = self.ledger.len();
        self.ledger.clear();
        info!(dropped, "purchase history cleared");
    }

    pub fn current_score_and_badges(&self) -> EcoStanding {
        self.aggregator.standing(&self.ledger)
    }

    pub fn suggestions_for(&self, record: &PurchaseRecord) -> Vec<Suggestion> {
        suggestions::suggestions_for(record)
    }

    /// Suggestions for the most recent purchase; empty when nothing was bought yet.
    pub fn latest_suggestions(&self) -> Vec<Suggestion> {
        self.ledger
            .latest()
            .map(suggestions::suggestions_for)
            .unwrap_or_default()
    }

    pub fn latest_purchase(&self) -> Option<&PurchaseRecord> {
        self.ledger.latest()
    }

    pub fn explain(&self, record: &PurchaseRecord) -> ImpactBreakdown {
        record.breakdown()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }
}
