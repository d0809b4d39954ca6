//! Home page sections.

use super::html_escape;
use crate::data::{AboutPreview, CtaContent, Feature, FeaturesContent, HeroContent, WhatsAppInvite};

/// Render the hero banner.
pub fn render_hero(content: &HeroContent) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-content">
        <h1 class="hero-headline">{} <span class="text-gold">{}</span><br>{}</h1>
        <p class="hero-subheadline">{}</p>
        <div class="hero-actions">
            <a href="{}" class="btn-primary">{}</a>
            <a href="{}" class="btn-outline">{}</a>
        </div>
    </div>
</section>"#,
        html_escape(&content.headline),
        html_escape(&content.highlight),
        html_escape(&content.tagline),
        html_escape(&content.subheadline),
        html_escape(&content.primary_cta_url),
        html_escape(&content.primary_cta_text),
        html_escape(&content.secondary_cta_url),
        html_escape(&content.secondary_cta_text)
    )
}

/// Render one icon card. Shared with the about page values grid.
pub fn render_feature_card(feature: &Feature) -> String {
    format!(
        r#"<div class="feature-card">
            <div class="feature-icon">{}</div>
            <h3 class="feature-title">{}</h3>
            <p class="feature-description">{}</p>
        </div>"#,
        html_escape(&feature.icon),
        html_escape(&feature.title),
        html_escape(&feature.description)
    )
}

/// Render the features grid.
pub fn render_features(content: &FeaturesContent) -> String {
    let cards = content
        .features
        .iter()
        .map(render_feature_card)
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section class="features" data-section="features">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="features-grid">
        {}
    </div>
</section>"#,
        html_escape(&content.section_title),
        html_escape(&content.section_subtitle),
        cards
    )
}

/// Render the about teaser.
pub fn render_about_preview(content: &AboutPreview) -> String {
    let highlights = content
        .highlights
        .iter()
        .map(|h| format!(r#"<li><span class="check">✓</span> {}</li>"#, html_escape(h)))
        .collect::<String>();

    format!(
        r#"<section class="about-preview" data-section="about-preview">
    <div class="container split">
        <div>
            <h2>{}</h2>
            <p>{}</p>
            <ul class="highlights">{}</ul>
            <a href="{}" class="btn-primary">{}</a>
        </div>
        <div class="chart-card" role="img" aria-label="{}">
            <div class="chart-bars"><span></span><span></span><span></span><span></span><span></span></div>
        </div>
    </div>
</section>"#,
        html_escape(&content.title),
        html_escape(&content.body),
        highlights,
        html_escape(&content.cta_url),
        html_escape(&content.cta_text),
        html_escape(&content.image_alt)
    )
}

/// Render the WhatsApp channel invitation.
pub fn render_whatsapp(content: &WhatsAppInvite) -> String {
    format!(
        r#"<section class="whatsapp" data-section="whatsapp">
    <div class="container">
        <h2>{}</h2>
        <p>{}</p>
        <a href="{}" class="btn-whatsapp" target="_blank" rel="noopener noreferrer">{}</a>
    </div>
</section>"#,
        html_escape(&content.title),
        html_escape(&content.body),
        html_escape(&content.url),
        html_escape(&content.link_text)
    )
}

/// Render the closing call to action.
pub fn render_cta(content: &CtaContent) -> String {
    format!(
        r#"<section class="cta" data-section="cta">
    <div class="cta-content">
        <h2>{}</h2>
        <p>{}</p>
        <a href="{}" class="btn-primary btn-large">{}</a>
    </div>
</section>"#,
        html_escape(&content.headline),
        html_escape(&content.subheadline),
        html_escape(&content.cta_url),
        html_escape(&content.cta_text)
    )
}
