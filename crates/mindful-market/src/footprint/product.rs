use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Emission factor applied to products outside the known catalog.
pub const DEFAULT_EMISSION_FACTOR: f64 = 0.5;

/// Product categories with a known emission factor (kg CO2e per unit of price).
///
/// Names that do not match the catalog land in [`ProductCategory::Other`] and
/// use [`DEFAULT_EMISSION_FACTOR`] rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Clothing,
    Shoes,
    Electronics,
    Groceries,
    Accessories,
    Other(String),
}

impl ProductCategory {
    /// Known categories in catalog order. `Other` is never listed.
    pub fn ordered() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Clothing,
            ProductCategory::Shoes,
            ProductCategory::Electronics,
            ProductCategory::Groceries,
            ProductCategory::Accessories,
        ]
    }

    /// Resolve a category by name. Unknown names are kept verbatim (trimmed).
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| ProductCategory::Other(trimmed.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Shoes => "Shoes",
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Groceries => "Groceries",
            ProductCategory::Accessories => "Accessories",
            ProductCategory::Other(name) => name.as_str(),
        }
    }

    pub fn emission_factor(&self) -> f64 {
        match self {
            ProductCategory::Clothing => 0.62,
            ProductCategory::Shoes => 0.95,
            ProductCategory::Electronics => 2.8,
            ProductCategory::Groceries => 0.33,
            ProductCategory::Accessories => 0.48,
            ProductCategory::Other(_) => DEFAULT_EMISSION_FACTOR,
        }
    }

    pub fn is_cataloged(&self) -> bool {
        !matches!(self, ProductCategory::Other(_))
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductCategory {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(value))
    }
}

impl Serialize for ProductCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ProductCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_name(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_factors_match_reference_table() {
        let factors: Vec<(String, f64)> = ProductCategory::ordered()
            .iter()
            .map(|category| (category.label().to_string(), category.emission_factor()))
            .collect();

        assert_eq!(
            factors,
            vec![
                ("Clothing".to_string(), 0.62),
                ("Shoes".to_string(), 0.95),
                ("Electronics".to_string(), 2.8),
                ("Groceries".to_string(), 0.33),
                ("Accessories".to_string(), 0.48),
            ]
        );
    }

    #[test]
    fn unknown_names_fall_back_to_default_factor() {
        let category = ProductCategory::from_name(" Xyz ");
        assert_eq!(category, ProductCategory::Other("Xyz".to_string()));
        assert_eq!(category.emission_factor(), DEFAULT_EMISSION_FACTOR);
        assert!(!category.is_cataloged());
    }

    #[test]
    fn known_names_are_case_insensitive() {
        assert_eq!(
            ProductCategory::from_name("electronics"),
            ProductCategory::Electronics
        );
    }

    #[test]
    fn serializes_as_plain_label() {
        let json = serde_json::to_string(&ProductCategory::Groceries).expect("serializes");
        assert_eq!(json, "\"Groceries\"");
        let parsed: ProductCategory = serde_json::from_str("\"Furniture\"").expect("parses");
        assert_eq!(parsed, ProductCategory::Other("Furniture".to_string()));
    }
}
