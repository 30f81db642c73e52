//! Product card domain types and display logic.
//!
//! This crate provides the decision layer behind a storefront product card:
//!
//! - **Money**: minor-unit prices with precise display formatting
//! - **Variant**: on-sale / new-release / default classification
//! - **Card**: the input record a card is rendered from
//! - **Policy**: configurable recency window for the new-release badge
//!
//! Classification is a pure function of the card and an explicitly passed
//! evaluation instant, so results are deterministic under test.
//!
//! # Example
//!
//! ```rust,ignore
//! use card_core::prelude::*;
//!
//! let card = ProductCard::new(
//!     ProductId::new("prod-1"),
//!     "trail-runner",
//!     "Trail Runner",
//!     CardImage::new("/img/trail-runner.jpg", "Trail Runner shoe"),
//!     Money::new(10000, Currency::USD),
//!     released_at,
//! )
//! .with_sale_price(Money::new(5000, Currency::USD))
//! .with_color_count(3);
//!
//! let variant = card.variant_at(now, &BadgePolicy::default());
//! assert_eq!(variant, CardVariant::OnSale);
//! ```

pub mod card;
pub mod error;
pub mod ids;
pub mod money;
pub mod policy;
pub mod text;
pub mod variant;

pub use card::{CardImage, ProductCard};
pub use error::CardError;
pub use ids::*;
pub use money::{Currency, Money};
pub use policy::BadgePolicy;
pub use text::pluralize;
pub use variant::CardVariant;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{CardImage, ProductCard};
    pub use crate::error::CardError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::policy::BadgePolicy;
    pub use crate::text::pluralize;
    pub use crate::variant::CardVariant;
}
