// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the pages and the product collection.

use serde::{Deserialize, Serialize};

/// A product record - the only domain entity.
///
/// Quantity and price are kept as the raw text typed into the form; they
/// are only parsed at display time (stock banding, price rendering). The
/// form performs no validation, so these strings may be empty or
/// non-numeric.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub price: String,
}

impl Product {
    /// Low-stock band for this product under the given thresholds.
    pub fn band(&self, thresholds: &AlertThresholds) -> StockBand {
        StockBand::for_quantity(&self.quantity, thresholds)
    }

    /// The form draft corresponding to this record (id dropped).
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
        }
    }
}

/// The form's in-progress, uncommitted product record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub price: String,
}

impl ProductDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.quantity.is_empty()
            && self.price.is_empty()
    }

    /// Attach an id, producing a full record.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Quantity cutoffs for the low-stock bands.
///
/// Defaults reproduce the historical hardcoded cutoffs (5/20); the demo
/// settings tab edits these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertThresholds {
    pub critical: i64,
    pub warning: i64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        AlertThresholds {
            critical: 5,
            warning: 20,
        }
    }
}

/// Three-tier low-stock classification derived from quantity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockBand {
    Critical,
    Warning,
    #[default]
    Normal,
}

impl StockBand {
    /// Classify a raw quantity string.
    ///
    /// Unparsable text (including the empty string) falls through to
    /// Normal: a failed parse never trips an alert. The band tests
    /// document this as a known gap rather than a feature.
    pub fn for_quantity(quantity: &str, thresholds: &AlertThresholds) -> StockBand {
        match quantity.trim().parse::<f64>() {
            Ok(q) if q <= thresholds.critical as f64 => StockBand::Critical,
            Ok(q) if q <= thresholds.warning as f64 => StockBand::Warning,
            Ok(_) => StockBand::Normal,
            Err(_) => StockBand::Normal,
        }
    }
}

impl std::fmt::Display for StockBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockBand::Critical => write!(f, "Stock critique"),
            StockBand::Warning => write!(f, "Stock faible"),
            StockBand::Normal => write!(f, "En stock"),
        }
    }
}

/// Tab navigation for the demo page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveTab {
    #[default]
    Products,
    Settings,
}

impl std::fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveTab::Products => write!(f, "Produits"),
            ActiveTab::Settings => write!(f, "Paramètres"),
        }
    }
}

/// Fixed currency suffix used everywhere a price is rendered.
pub const CURRENCY_SUFFIX: &str = "DT";

/// Format a raw price string for display.
pub fn format_price(price: &str) -> String {
    format!("{} {}", price, CURRENCY_SUFFIX)
}
