use serde::{Deserialize, Serialize};

use super::ledger::{PurchaseLedger, PurchaseRecord};

/// Score reported while the history is empty.
pub const EMPTY_HISTORY_SCORE: f64 = 100.0;

const BASELINE_POINTS: i32 = 50;
const ECO_BONUS: i32 = 15;
const NON_ECO_PENALTY: i32 = -10;
const LOW_PRICE_BONUS: i32 = 5;
const SHORT_HAUL_BONUS: i32 = 5;

/// Prices at or below this amount earn the low-price bonus.
pub const LOW_PRICE_LIMIT: f64 = 2000.0;
/// Distances at or below this many kilometers earn the short-haul bonus.
pub const SHORT_HAUL_LIMIT_KM: f64 = 3000.0;

const DISCOURAGED_BELOW: f64 = 35.0;
const CELEBRATORY_FROM: f64 = 70.0;

/// Cumulative achievements unlocked by eco-friendly purchase counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    EcoStarter,
    ConsciousBuyer,
    ClimateHero,
}

impl Badge {
    pub const fn ordered() -> [Badge; 3] {
        [Badge::EcoStarter, Badge::ConsciousBuyer, Badge::ClimateHero]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Badge::EcoStarter => "Eco Starter",
            Badge::ConsciousBuyer => "Conscious Buyer",
            Badge::ClimateHero => "Climate Hero",
        }
    }

    /// Eco-friendly purchases needed to earn the badge.
    pub const fn threshold(self) -> usize {
        match self {
            Badge::EcoStarter => 1,
            Badge::ConsciousBuyer => 5,
            Badge::ClimateHero => 10,
        }
    }
}

/// Mascot reaction to the current score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MascotMood {
    Discouraged,
    Neutral,
    Celebratory,
}

impl MascotMood {
    pub fn for_score(score: f64) -> Self {
        if score < DISCOURAGED_BELOW {
            MascotMood::Discouraged
        } else if score < CELEBRATORY_FROM {
            MascotMood::Neutral
        } else {
            MascotMood::Celebratory
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            MascotMood::Discouraged => "Your impact is high. Try local and lower-cost items.",
            MascotMood::Neutral => "You are doing okay. Small changes can help a lot.",
            MascotMood::Celebratory => "Excellent choices. Keep it up.",
        }
    }

    /// Color for the score gauge.
    pub const fn gauge_tone(self) -> &'static str {
        match self {
            MascotMood::Discouraged => "red",
            MascotMood::Neutral => "orange",
            MascotMood::Celebratory => "green",
        }
    }
}

/// Aggregate view of a session: score, earned badges, and mascot mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcoStanding {
    pub score: f64,
    pub badges: Vec<Badge>,
    pub mascot: MascotMood,
}

/// Derives the eco score and badges from a full ledger.
///
/// Each record starts at 50 points, gains 15 when eco friendly or loses 10
/// otherwise, and earns 5 more for each of a low price and a short haul. The
/// session score is the mean of those points clamped to 0..=100, or 100 when
/// nothing has been purchased yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreAggregator;

impl ScoreAggregator {
    pub fn standing(&self, ledger: &PurchaseLedger) -> EcoStanding {
        let score = self.score(ledger.records());
        EcoStanding {
            score,
            badges: badges_for(ledger.eco_count()),
            mascot: MascotMood::for_score(score),
        }
    }

    pub fn score(&self, records: &[PurchaseRecord]) -> f64 {
        if records.is_empty() {
            return EMPTY_HISTORY_SCORE;
        }

        let total: i32 = records.iter().map(record_points).sum();
        let mean = f64::from(total) / records.len() as f64;
        mean.clamp(0.0, 100.0)
    }
}

pub fn record_points(record: &PurchaseRecord) -> i32 {
    let mut points = BASELINE_POINTS;

    points += if record.eco_friendly() {
        ECO_BONUS
    } else {
        NON_ECO_PENALTY
    };

    if record.price() <= LOW_PRICE_LIMIT {
        points += LOW_PRICE_BONUS;
    }
    if record.distance_km() <= SHORT_HAUL_LIMIT_KM {
        points += SHORT_HAUL_BONUS;
    }

    points
}

/// Badges earned with `eco_count` eco-friendly purchases, lowest threshold first.
pub fn badges_for(eco_count: usize) -> Vec<Badge> {
    Badge::ordered()
        .into_iter()
        .filter(|badge| eco_count >= badge.threshold())
        .collect()
}
