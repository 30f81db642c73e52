//! End-to-end card composition tests.

use card_core::{BadgePolicy, CardImage, CardVariant, Currency, Money, ProductCard, ProductId};
use card_render::{render_card, CardView};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn base_card(released_at: DateTime<Utc>) -> ProductCard {
    ProductCard::new(
        ProductId::new("prod-42"),
        "court-classic",
        "Court Classic",
        CardImage::new("/img/court-classic.jpg", "Court Classic shoe"),
        Money::new(10000, Currency::USD),
        released_at,
    )
}

#[test]
fn sale_dominates_even_for_a_decade_old_release() {
    let card = base_card(now() - Duration::days(3650))
        .with_sale_price(Money::new(5000, Currency::USD))
        .with_color_count(3);

    let view = CardView::from_card(&card, now(), &BadgePolicy::default());

    assert_eq!(view.variant, CardVariant::OnSale);
    assert_eq!(view.price.display, "$100.00");
    assert!(view.price.struck_through);
    assert_eq!(view.sale_price.as_ref().unwrap().display, "$50.00");
    assert_eq!(view.color_text, "3 Colors");
    assert_eq!(view.badge.as_ref().unwrap().text, "Sale");
}

#[test]
fn recent_release_without_sale_is_badged_just_released() {
    let mut card = base_card(now() - Duration::days(5)).with_color_count(1);
    card.price = Money::new(8000, Currency::USD);

    let view = CardView::from_card(&card, now(), &BadgePolicy::default());

    assert_eq!(view.variant, CardVariant::NewRelease);
    assert_eq!(view.badge.as_ref().unwrap().text, "Just released!");
    assert_eq!(view.price.display, "$80.00");
    assert!(!view.price.struck_through);
    assert!(view.sale_price.is_none());
    assert_eq!(view.color_text, "1 Color");
}

#[test]
fn old_release_without_sale_renders_plain() {
    let card = base_card(now() - Duration::days(90)).with_color_count(0);

    let view = CardView::from_card(&card, now(), &BadgePolicy::default());

    assert_eq!(view.variant, CardVariant::Default);
    assert!(view.badge.is_none());
    assert!(view.sale_price.is_none());
    assert_eq!(view.color_text, "0 Colors");

    let html = render_card(&view);
    assert!(html.contains("product-card--default"));
    assert!(!html.contains("card-badge"));
}

#[test]
fn zero_sale_price_still_counts_as_on_sale() {
    let card = base_card(now() - Duration::days(5))
        .with_sale_price(Money::zero(Currency::USD));

    let view = CardView::from_card(&card, now(), &BadgePolicy::default());

    assert_eq!(view.variant, CardVariant::OnSale);
    assert_eq!(view.sale_price.as_ref().unwrap().display, "$0.00");
}

#[test]
fn classification_is_deterministic_for_a_fixed_instant() {
    let card = base_card(now() - Duration::days(29));
    let policy = BadgePolicy::default();

    let first = CardView::from_card(&card, now(), &policy);
    let second = CardView::from_card(&card, now(), &policy);
    assert_eq!(first, second);

    // One day later the window has closed.
    let later = CardView::from_card(&card, now() + Duration::days(1), &policy);
    assert_eq!(later.variant, CardVariant::Default);
}

#[test]
fn view_serializes_as_a_render_tree() {
    let card = base_card(now() - Duration::days(5)).with_color_count(2);
    let view = CardView::from_card(&card, now(), &BadgePolicy::default());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["variant"], "new-release");
    assert_eq!(json["badge"]["text"], "Just released!");
    assert_eq!(json["price"]["display"], "$100.00");
    assert_eq!(json["price"]["struck_through"], false);
    assert_eq!(json["sale_price"], serde_json::Value::Null);
    assert_eq!(json["href"], "/product/court-classic");
    assert_eq!(json["color_text"], "2 Colors");
}
