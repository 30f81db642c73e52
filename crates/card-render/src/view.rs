//! Card view model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use card_core::{pluralize, BadgePolicy, CardVariant, ProductCard};

/// Image slot of the card view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageView {
    /// Image source URL.
    pub src: String,
    /// Alt text.
    pub alt: String,
}

/// Overlay badge shown on top of the card image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeView {
    /// Badge text (e.g., "Sale").
    pub text: String,
    /// CSS class hook derived from the variant.
    pub class: String,
}

/// A formatted price line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceView {
    /// Formatted amount (e.g., "$100.00").
    pub display: String,
    /// Whether the line renders struck through.
    pub struck_through: bool,
}

/// The render tree for one product card.
///
/// This is the full DOM description the card logic owns: external
/// rendering collaborators map it to their own node types or consume the
/// serialized form directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardView {
    /// Link target for the whole card.
    pub href: String,
    /// Card image.
    pub image: ImageView,
    /// Overlay badge, present for new-release and on-sale cards.
    pub badge: Option<BadgeView>,
    /// Product name.
    pub name: String,
    /// Primary price line; struck through exactly when on sale.
    pub price: PriceView,
    /// Secondary sale-price line, present only when on sale.
    pub sale_price: Option<PriceView>,
    /// Pluralized colorway count (e.g., "3 Colors").
    pub color_text: String,
    /// The derived variant, for class hooks and diagnostics.
    pub variant: CardVariant,
}

impl CardView {
    /// Compose the view for a card at the given instant.
    pub fn from_card(card: &ProductCard, now: DateTime<Utc>, policy: &BadgePolicy) -> Self {
        let variant = card.variant_at(now, policy);
        tracing::debug!(
            product = %card.id,
            variant = variant.as_str(),
            "composed card view"
        );

        let on_sale = variant.is_on_sale();
        let badge = variant.badge_text().map(|text| BadgeView {
            text: text.to_string(),
            class: format!("card-badge card-badge--{}", variant.as_str()),
        });

        Self {
            href: format!("/product/{}", card.slug),
            image: ImageView {
                src: card.image.url.clone(),
                alt: card.image.alt.clone(),
            },
            badge,
            name: card.name.clone(),
            price: PriceView {
                display: card.price.display(),
                struck_through: on_sale,
            },
            sale_price: card.sale_price.as_ref().filter(|_| on_sale).map(|sale| {
                PriceView {
                    display: sale.display(),
                    struck_through: false,
                }
            }),
            color_text: pluralize("Color", card.color_count),
            variant,
        }
    }
}
