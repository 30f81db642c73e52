//! HTML section rendering for card views.

use crate::view::CardView;

/// Render one card view as an HTML article.
pub fn render_card(view: &CardView) -> String {
    let badge_html = match &view.badge {
        Some(badge) => format!(
            r#"<span class="{}">{}</span>"#,
            escape_html(&badge.class),
            escape_html(&badge.text)
        ),
        None => String::new(),
    };

    let price_class = if view.price.struck_through {
        "product-price product-price--struck"
    } else {
        "product-price"
    };

    let sale_price_html = match &view.sale_price {
        Some(sale) => format!(
            r#"<span class="product-sale-price">{}</span>"#,
            escape_html(&sale.display)
        ),
        None => String::new(),
    };

    format!(
        r#"<article class="product-card product-card--{variant}">
    <a href="{href}" class="product-link">
        <div class="product-image">
            {badge}<img src="{src}" alt="{alt}" loading="lazy">
        </div>
        <div class="product-row">
            <h3 class="product-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="product-row">
            <p class="product-colors">{colors}</p>
            {sale_price}
        </div>
    </a>
</article>"#,
        variant = view.variant.as_str(),
        href = escape_html(&view.href),
        badge = badge_html,
        src = escape_html(&view.image.src),
        alt = escape_html(&view.image.alt),
        name = escape_html(&view.name),
        price_class = price_class,
        price = escape_html(&view.price.display),
        colors = escape_html(&view.color_text),
        sale_price = sale_price_html
    )
}

/// Render a grid of card views.
pub fn render_card_grid(views: &[CardView]) -> String {
    let cards: String = views.iter().map(render_card).collect();

    format!(
        r#"<section class="product-grid" data-section="cards">
    {}
</section>"#,
        cards
    )
}

/// Render a skeleton placeholder while card data loads.
pub fn render_card_skeleton() -> String {
    r#"<article class="product-card skeleton">
    <div class="skeleton-image"></div>
    <div class="skeleton-text"></div>
    <div class="skeleton-text short"></div>
</article>"#
        .to_string()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_core::{BadgePolicy, CardImage, Currency, Money, ProductCard, ProductId};
    use chrono::{DateTime, TimeZone, Utc};

    fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn view_for(card: &ProductCard) -> CardView {
        CardView::from_card(card, instant(2024, 6, 15), &BadgePolicy::default())
    }

    fn card() -> ProductCard {
        ProductCard::new(
            ProductId::new("prod-1"),
            "trail-runner",
            "Trail Runner",
            CardImage::new("/img/trail-runner.jpg", "Trail Runner shoe"),
            Money::new(10000, Currency::USD),
            instant(2024, 1, 1),
        )
        .with_color_count(2)
    }

    #[test]
    fn test_render_default_card() {
        let html = render_card(&view_for(&card()));
        assert!(html.contains(r#"class="product-card product-card--default""#));
        assert!(html.contains(r#"href="/product/trail-runner""#));
        assert!(html.contains("$100.00"));
        assert!(html.contains("2 Colors"));
        assert!(!html.contains("card-badge"));
        assert!(!html.contains("product-price--struck"));
        assert!(!html.contains("product-sale-price"));
    }

    #[test]
    fn test_render_sale_card() {
        let c = card().with_sale_price(Money::new(5000, Currency::USD));
        let html = render_card(&view_for(&c));
        assert!(html.contains(r#"class="product-card product-card--on-sale""#));
        assert!(html.contains(r#"card-badge card-badge--on-sale">Sale</span>"#));
        assert!(html.contains("product-price--struck"));
        assert!(html.contains(r#"<span class="product-sale-price">$50.00</span>"#));
    }

    #[test]
    fn test_render_escapes_text() {
        let mut c = card();
        c.name = r#"Trail "Runner" <XL> & Co"#.to_string();
        let html = render_card(&view_for(&c));
        assert!(html.contains("Trail &quot;Runner&quot; &lt;XL&gt; &amp; Co"));
        assert!(!html.contains("<XL>"));
    }

    #[test]
    fn test_render_grid() {
        let views = vec![view_for(&card()), view_for(&card())];
        let html = render_card_grid(&views);
        assert!(html.contains(r#"<section class="product-grid""#));
        assert_eq!(html.matches("<article").count(), 2);
    }

    #[test]
    fn test_render_skeleton() {
        let html = render_card_skeleton();
        assert!(html.contains("skeleton-image"));
    }
}
