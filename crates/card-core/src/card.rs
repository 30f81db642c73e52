//! The product card input record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::policy::BadgePolicy;
use crate::variant::CardVariant;

/// Image reference for a card.
///
/// Loading and sizing are external concerns; the card only carries the
/// reference and its alt text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardImage {
    /// URL to the image.
    pub url: String,
    /// Alt text for accessibility.
    pub alt: String,
}

impl CardImage {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}

/// Everything a product card is rendered from.
///
/// Supplied by upstream catalog/fetch layers, immutable per render. The
/// display variant is derived from this record and an evaluation instant,
/// never stored on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCard {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug, used for the card link.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Card image.
    pub image: CardImage,
    /// Regular price.
    pub price: Money,
    /// Sale price. Presence, not value, marks the card as on sale.
    #[serde(default)]
    pub sale_price: Option<Money>,
    /// Release date.
    pub released_at: DateTime<Utc>,
    /// Number of colorways available.
    #[serde(default)]
    pub color_count: u32,
}

impl ProductCard {
    /// Create a card with no sale price and no colorways.
    pub fn new(
        id: ProductId,
        slug: impl Into<String>,
        name: impl Into<String>,
        image: CardImage,
        price: Money,
        released_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            image,
            price,
            sale_price: None,
            released_at,
            color_count: 0,
        }
    }

    /// Set the sale price.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Set the colorway count.
    pub fn with_color_count(mut self, color_count: u32) -> Self {
        self.color_count = color_count;
        self
    }

    /// Check if the card is on sale (has a sale price, of any value).
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Derive the display variant at the given instant.
    pub fn variant_at(&self, now: DateTime<Utc>, policy: &BadgePolicy) -> CardVariant {
        CardVariant::classify(self.sale_price.as_ref(), self.released_at, now, policy)
    }

    /// Savings against the regular price, when the sale price is actually
    /// below it in the same currency.
    pub fn savings(&self) -> Option<Money> {
        let sale = self.sale_price.as_ref()?;
        let diff = self.price.try_sub(sale)?;
        if diff.minor_units > 0 {
            Some(diff)
        } else {
            None
        }
    }

    /// Discount as a percentage of the regular price, when on sale below
    /// the regular price.
    pub fn discount_percentage(&self) -> Option<f64> {
        let savings = self.savings()?;
        if self.price.minor_units <= 0 {
            return None;
        }
        Some((savings.minor_units as f64 / self.price.minor_units as f64) * 100.0)
    }

    /// Defensive validation for callers that want to fail fast.
    ///
    /// Checks the conventions upstream data is assumed to satisfy:
    /// non-negative amounts, matching currencies, and a sale price
    /// strictly below the regular price. Classification does not call
    /// this; a card that fails validation still classifies.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.price.is_negative() {
            return Err(CardError::NegativeAmount {
                field: "price",
                minor_units: self.price.minor_units,
            });
        }
        if let Some(sale) = &self.sale_price {
            if sale.is_negative() {
                return Err(CardError::NegativeAmount {
                    field: "sale_price",
                    minor_units: sale.minor_units,
                });
            }
            if sale.currency != self.price.currency {
                return Err(CardError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: sale.currency.code().to_string(),
                });
            }
            if sale.minor_units >= self.price.minor_units {
                return Err(CardError::SalePriceNotBelowPrice {
                    price: self.price.display(),
                    sale: sale.display(),
                });
            }
        }
        Ok(())
    }
}
