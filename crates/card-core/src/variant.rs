//! Display variant classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::policy::BadgePolicy;

/// Display variant of a product card.
///
/// Exactly one variant holds per render. Variants are derived from the
/// card's inputs at an evaluation instant and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    /// Released within the recency window.
    NewRelease,
    /// Has a sale price.
    OnSale,
    /// Neither on sale nor recently released.
    #[default]
    Default,
}

impl CardVariant {
    /// Classify a card's inputs into a variant.
    ///
    /// Precedence: a present sale price wins over a recent release; the
    /// sale price's value is irrelevant (a sale price of zero still counts
    /// as on sale).
    pub fn classify(
        sale_price: Option<&Money>,
        released_at: DateTime<Utc>,
        now: DateTime<Utc>,
        policy: &BadgePolicy,
    ) -> Self {
        if sale_price.is_some() {
            CardVariant::OnSale
        } else if policy.is_recent_release(released_at, now) {
            CardVariant::NewRelease
        } else {
            CardVariant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::NewRelease => "new-release",
            CardVariant::OnSale => "on-sale",
            CardVariant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new-release" => Some(CardVariant::NewRelease),
            "on-sale" => Some(CardVariant::OnSale),
            "default" => Some(CardVariant::Default),
            _ => None,
        }
    }

    /// Overlay badge text for this variant, if any.
    pub fn badge_text(&self) -> Option<&'static str> {
        match self {
            CardVariant::NewRelease => Some("Just released!"),
            CardVariant::OnSale => Some("Sale"),
            CardVariant::Default => None,
        }
    }

    /// Check if this variant marks the card as on sale.
    pub fn is_on_sale(&self) -> bool {
        matches!(self, CardVariant::OnSale)
    }
}
