//! Home page content.

use serde::{Deserialize, Serialize};

/// Hero banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub highlight: String,
    pub tagline: String,
    pub subheadline: String,
    pub primary_cta_text: String,
    pub primary_cta_url: String,
    pub secondary_cta_text: String,
    pub secondary_cta_url: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Master".to_string(),
            highlight: "Gold Trading".to_string(),
            tagline: "with Expert Guidance".to_string(),
            subheadline: "Professional mentorship program with 10+ years of market experience. \
                Get precise signals and learn when gold will move up or down."
                .to_string(),
            primary_cta_text: "Start Your Journey".to_string(),
            primary_cta_url: "/contact".to_string(),
            secondary_cta_text: "View Our Results".to_string(),
            secondary_cta_url: "/about".to_string(),
        }
    }
}

/// An icon, title, and description card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// "Why choose us" grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub features: Vec<Feature>,
}

impl Default for FeaturesContent {
    fn default() -> Self {
        Self {
            section_title: "Why Choose SniperTrader?".to_string(),
            section_subtitle: "We provide comprehensive trading education and real-time signals \
                to help you succeed in gold trading."
                .to_string(),
            features: vec![
                Feature::new(
                    "🎯",
                    "Precision Signals",
                    "Get exact entry and exit points for gold trading with our proven signal system.",
                ),
                Feature::new(
                    "🏆",
                    "10+ Years Experience",
                    "Benefit from over a decade of professional trading expertise and market knowledge.",
                ),
                Feature::new(
                    "👥",
                    "Personal Mentorship",
                    "One-on-one guidance to help you master the art of profitable gold trading.",
                ),
                Feature::new(
                    "📊",
                    "Market Analysis",
                    "Deep market insights and analysis to understand gold price movements.",
                ),
                Feature::new(
                    "🛡",
                    "Risk Management",
                    "Learn professional risk management techniques to protect your capital.",
                ),
                Feature::new(
                    "📈",
                    "Proven Results",
                    "Track record of successful trades and satisfied mentorship students.",
                ),
            ],
        }
    }
}

/// Short about teaser with bullet highlights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutPreview {
    pub title: String,
    pub body: String,
    pub highlights: Vec<String>,
    pub cta_text: String,
    pub cta_url: String,
    pub image_alt: String,
}

impl Default for AboutPreview {
    fn default() -> Self {
        Self {
            title: "Deep Market Understanding".to_string(),
            body: "With over 10 years of professional trading experience, SniperTrader provides \
                unparalleled insights into gold market movements. Our proven track record \
                speaks for itself."
                .to_string(),
            highlights: vec![
                "Real-time gold trading signals".to_string(),
                "Professional mentorship program".to_string(),
                "Comprehensive market analysis".to_string(),
            ],
            cta_text: "Learn More About Us".to_string(),
            cta_url: "/about".to_string(),
            image_alt: "Gold Trading Analysis".to_string(),
        }
    }
}

/// Invitation to the free WhatsApp channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppInvite {
    pub title: String,
    pub body: String,
    pub link_text: String,
    pub url: String,
}

impl Default for WhatsAppInvite {
    fn default() -> Self {
        Self {
            title: "Join Our Free WhatsApp Channel".to_string(),
            body: "Get free signals, analysis, and mentorship tips directly on WhatsApp. \
                Start improving your gold trading today with expert guidance at no cost."
                .to_string(),
            link_text: "Join Free WhatsApp".to_string(),
            url: "https://whatsapp.com/channel/0029Vb6JvgCLY6d8HWBjWp44".to_string(),
        }
    }
}

/// Closing call to action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_url: String,
}

impl Default for CtaContent {
    fn default() -> Self {
        Self {
            headline: "Ready to Transform Your Trading?".to_string(),
            subheadline: "Join our mentorship program and start receiving professional gold \
                trading signals today."
                .to_string(),
            cta_text: "Get Started Now".to_string(),
            cta_url: "/contact".to_string(),
        }
    }
}

/// Everything on the home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeContent {
    pub hero: HeroContent,
    pub features: FeaturesContent,
    pub about: AboutPreview,
    pub whatsapp: WhatsAppInvite,
    pub cta: CtaContent,
}
