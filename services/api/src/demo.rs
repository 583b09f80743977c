use chrono::Local;
use clap::Args;
use mindful_market::error::AppError;
use mindful_market::footprint::{
    list_locations, list_product_categories, EstimateError, ImpactBreakdown, Location,
    ProductCategory,
};
use mindful_market::session::{EcoSession, PurchaseImporter, PurchaseRequest, EMPTY_HISTORY_HINT};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct LocationsArgs {
    /// Show the sub-locations of this country instead of the country list
    #[arg(long)]
    pub(crate) location: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Product category (unknown categories use the default factor)
    #[arg(long)]
    pub(crate) product: String,
    /// Declared purchase price
    #[arg(long)]
    pub(crate) price: f64,
    /// Buyer country
    #[arg(long)]
    pub(crate) buyer: String,
    /// Shipper country
    #[arg(long)]
    pub(crate) shipper: String,
}

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
    /// CSV file with `product,price,buyer,shipper` columns
    #[arg(long)]
    pub(crate) purchases: PathBuf,
}

pub(crate) fn run_locations(args: LocationsArgs) -> Result<(), AppError> {
    match args.location {
        Some(name) => {
            let location: Location = name.parse().map_err(EstimateError::from)?;
            println!("Sub-locations of {location}");
            for sub_location in location.sub_locations() {
                println!("- {sub_location}");
            }
        }
        None => {
            println!("Locations");
            for location in list_locations() {
                let coordinate = location.coordinate();
                println!(
                    "- {} ({:.4}, {:.4})",
                    location, coordinate.latitude, coordinate.longitude
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn run_products() {
    println!("Product categories");
    for category in list_product_categories() {
        println!(
            "- {}: {} kg CO2 per unit price",
            category,
            category.emission_factor()
        );
    }
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        product,
        price,
        buyer,
        shipper,
    } = args;

    let session = EcoSession::new();
    let estimate = session.estimate(&product, price, &buyer, &shipper)?;
    let category = ProductCategory::from_name(&product);

    println!("Estimated CO2 impact: {} kg", estimate.impact_kg);
    println!("Shipping distance: {:.2} km", estimate.distance_km);
    println!(
        "Eco friendly: {}",
        if estimate.eco_friendly { "Yes" } else { "No" }
    );
    if !category.is_cataloged() {
        println!("Note: '{category}' is not cataloged; the default factor was applied.");
    }

    let breakdown =
        ImpactBreakdown::from_parts(&category, price, estimate.distance_km, estimate.impact_kg);
    println!("\nHow this CO2 impact was calculated");
    println!("{}", breakdown.describe());
    Ok(())
}

pub(crate) fn run_replay(args: ReplayArgs) -> Result<(), AppError> {
    let session = PurchaseImporter::from_path(&args.purchases)?;
    println!("Replayed {}", args.purchases.display());
    render_session(&session);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let mut session = EcoSession::new();

    println!("Mindful Market demo");
    for request in demo_purchases() {
        let record = session.submit_purchase(&request)?;
        println!(
            "Added {} bought in {} from {}: {} kg CO2",
            record.product(),
            request.buyer,
            request.shipper,
            record.impact_kg()
        );
    }

    if let Some(last) = session.latest_purchase() {
        println!("\nHow the last CO2 impact was calculated");
        println!("{}", session.explain(last).describe());
    }

    render_session(&session);
    Ok(())
}

fn demo_purchases() -> Vec<PurchaseRequest> {
    [
        ("Groceries", 120.0, "India", "India"),
        ("Clothing", 45.0, "Germany", "France"),
        ("Electronics", 1800.0, "United Kingdom", "China"),
        ("Accessories", 30.0, "Japan", "Japan"),
        ("Shoes", 2400.0, "Australia", "United States"),
    ]
    .into_iter()
    .map(|(product, price, buyer, shipper)| PurchaseRequest {
        product: product.to_string(),
        price,
        buyer: buyer.to_string(),
        shipper: shipper.to_string(),
    })
    .collect()
}

fn render_session(session: &EcoSession) {
    let history = session.list_history();

    if history.is_empty() {
        println!("\nPurchase history: none");
    } else {
        println!("\nPurchase history");
        for record in history {
            println!(
                "- {} | price {} | {} kg CO2 | {:.2} km | eco {} | {}",
                record.product(),
                record.price(),
                record.impact_kg(),
                record.distance_km(),
                record.eco_label(),
                record
                    .recorded_at()
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
            );
        }

        let summary = session.summary();
        println!(
            "Totals: {} purchases, {} eco friendly, {} kg CO2 over {} km",
            summary.purchases,
            summary.eco_purchases,
            summary.total_impact_kg,
            summary.total_distance_km
        );
    }

    let standing = session.current_score_and_badges();
    println!(
        "\nEco score: {:.1}% ({})",
        standing.score,
        standing.mascot.gauge_tone()
    );
    println!("Mascot: {}", standing.mascot.message());

    if standing.badges.is_empty() {
        println!("Badges earned: none");
    } else {
        println!("Badges earned");
        for badge in &standing.badges {
            println!("- {}", badge.label());
        }
    }

    println!("\nSuggestions");
    if history.is_empty() {
        println!("- {EMPTY_HISTORY_HINT}");
    } else {
        for suggestion in session.latest_suggestions() {
            println!("- {}", suggestion.message());
        }
    }
}
