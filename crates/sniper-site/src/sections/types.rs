//! Trading types page sections.

use super::{html_escape, render_page_hero};
use crate::data::{TradingType, TypesContent};

pub fn render_types_hero(content: &TypesContent) -> String {
    render_page_hero("types-hero", "Trading Types", &content.intro)
}

pub fn render_what_is_trading(content: &TypesContent) -> String {
    let paragraphs = content
        .what_is_trading
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section class="what-is-trading" data-section="what-is-trading">
    <div class="container prose">
        <h2>What is Trading?</h2>
        {}
    </div>
</section>"#,
        paragraphs
    )
}

fn render_type_card(trading_type: &TradingType) -> String {
    let features = trading_type
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", html_escape(f)))
        .collect::<String>();

    format!(
        r#"<article class="type-card">
            <div class="type-card-header">
                <span class="feature-icon">{}</span>
                <span class="difficulty {}">{}</span>
            </div>
            <h3>{}</h3>
            <p class="timeframe">{}</p>
            <p>{}</p>
            <ul class="type-features">{}</ul>
        </article>"#,
        html_escape(&trading_type.icon),
        trading_type.difficulty.css_class(),
        trading_type.difficulty.label(),
        html_escape(&trading_type.title),
        html_escape(&trading_type.timeframe),
        html_escape(&trading_type.description),
        features
    )
}

/// Grid of trading style cards.
pub fn render_type_grid(content: &TypesContent) -> String {
    let cards = content
        .types
        .iter()
        .map(render_type_card)
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section class="trading-types" data-section="trading-types">
    <div class="features-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

pub fn render_recommendations(content: &TypesContent) -> String {
    let items = content
        .recommendations
        .iter()
        .map(|r| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
                html_escape(&r.title),
                html_escape(&r.body)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section class="recommendations" data-section="recommendations">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="container grid-3">
        {}
    </div>
    <div class="cta-inline">
        <a href="/contact" class="btn-primary">Get Personalized Guidance</a>
    </div>
</section>"#,
        html_escape(&content.recommendation_title),
        html_escape(&content.recommendation_body),
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_grid_has_difficulty_badges() {
        let html = render_type_grid(&TypesContent::default());
        assert_eq!(html.matches(r#"class="type-card""#).count(), 6);
        assert_eq!(html.matches("difficulty-expert").count(), 3);
        assert_eq!(html.matches("difficulty-beginner").count(), 2);
        assert_eq!(html.matches("difficulty-intermediate").count(), 1);
        assert!(html.contains("Seconds to Minutes"));
    }

    #[test]
    fn test_what_is_trading_paragraphs() {
        let html = render_what_is_trading(&TypesContent::default());
        assert_eq!(html.matches("<p>").count(), 3);
    }

    #[test]
    fn test_recommendations() {
        let html = render_recommendations(&TypesContent::default());
        assert!(html.contains("New to Trading?"));
        assert!(html.contains("Full-Time Trader?"));
    }
}
