//! About page sections.

use super::home::render_feature_card;
use super::{html_escape, render_page_hero};
use crate::data::{AboutContent, Paragraph};

pub fn render_about_hero(content: &AboutContent) -> String {
    render_page_hero("about-hero", "About SniperTrader", &content.intro)
}

fn render_paragraph_card(class: &str, paragraph: &Paragraph) -> String {
    format!(
        r#"<div class="{}">
            <h3>{}</h3>
            <p>{}</p>
        </div>"#,
        class,
        html_escape(&paragraph.title),
        html_escape(&paragraph.body)
    )
}

/// Vision and mission side by side.
pub fn render_vision_mission(content: &AboutContent) -> String {
    format!(
        r#"<section class="vision-mission" data-section="vision-mission">
    <div class="container grid-2">
        {}
        {}
    </div>
</section>"#,
        render_paragraph_card("card", &content.vision),
        render_paragraph_card("card", &content.mission)
    )
}

pub fn render_values(content: &AboutContent) -> String {
    let cards = content
        .values
        .iter()
        .map(render_feature_card)
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section class="values" data-section="values">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="features-grid grid-4">
        {}
    </div>
</section>"#,
        html_escape(&content.values_title),
        html_escape(&content.values_subtitle),
        cards
    )
}

/// Experience paragraph with headline stats.
pub fn render_experience(content: &AboutContent) -> String {
    let stats = content
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat"><span class="stat-value">{}</span><span class="stat-label">{}</span></div>"#,
                html_escape(&stat.value),
                html_escape(&stat.label)
            )
        })
        .collect::<String>();

    format!(
        r#"<section class="experience" data-section="experience">
    <div class="container">
        <h2>{}</h2>
        <p>{}</p>
        <div class="stats">{}</div>
    </div>
</section>"#,
        html_escape(&content.experience.title),
        html_escape(&content.experience.body),
        stats
    )
}

pub fn render_expertise(content: &AboutContent) -> String {
    let blocks = content
        .expertise
        .iter()
        .map(|p| render_paragraph_card("expertise-block", p))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section class="expertise" data-section="expertise">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="container grid-2">
        {}
    </div>
</section>"#,
        html_escape(&content.expertise_title),
        html_escape(&content.expertise_subtitle),
        blocks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_stats() {
        let html = render_experience(&AboutContent::default());
        assert_eq!(html.matches(r#"class="stat""#).count(), 3);
        assert!(html.contains("1000+"));
        assert!(html.contains("Students Mentored"));
    }

    #[test]
    fn test_values_and_expertise() {
        let content = AboutContent::default();
        assert_eq!(render_values(&content).matches("feature-card").count(), 4);
        let expertise = render_expertise(&content);
        assert_eq!(expertise.matches("expertise-block").count(), 4);
        assert!(expertise.contains("Continuous Learning Approach"));
    }

    #[test]
    fn test_vision_mission_escapes_apostrophe() {
        let html = render_vision_mission(&AboutContent::default());
        assert!(html.contains("world&#x27;s leading platform"));
    }
}
