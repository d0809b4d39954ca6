//! About page content.

use serde::{Deserialize, Serialize};

use super::home::Feature;

/// A headline number, e.g. "500+ Students Mentored".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A titled paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    pub title: String,
    pub body: String,
}

impl Paragraph {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub intro: String,
    pub vision: Paragraph,
    pub mission: Paragraph,
    pub values_title: String,
    pub values_subtitle: String,
    pub values: Vec<Feature>,
    pub experience: Paragraph,
    pub stats: Vec<Stat>,
    pub expertise_title: String,
    pub expertise_subtitle: String,
    pub expertise: Vec<Paragraph>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            intro: "Founded on the principle of precision trading, SniperTrader has been guiding \
                traders to success in gold markets for over a decade."
                .to_string(),
            vision: Paragraph::new(
                "Our Vision",
                "To become the world's leading platform for gold trading education and mentorship, \
                 empowering traders with the knowledge and tools needed to achieve financial \
                 independence through disciplined and strategic trading approaches.",
            ),
            mission: Paragraph::new(
                "Our Mission",
                "We provide professional trading mentorship, real-time market signals, and \
                 comprehensive education to help both novice and experienced traders master the \
                 art of gold trading. Our mission is to democratize access to professional trading \
                 knowledge and create a community of successful, disciplined traders.",
            ),
            values_title: "Our Core Values".to_string(),
            values_subtitle: "The principles that guide our approach to trading education and \
                mentorship."
                .to_string(),
            values: vec![
                Feature::new(
                    "🎯",
                    "Precision",
                    "We focus on delivering accurate, actionable trading signals with precise entry and exit points.",
                ),
                Feature::new(
                    "👥",
                    "Education",
                    "We believe in empowering traders through comprehensive education and mentorship programs.",
                ),
                Feature::new(
                    "🏆",
                    "Excellence",
                    "Our commitment to excellence drives us to continuously improve our trading strategies.",
                ),
                Feature::new(
                    "📈",
                    "Growth",
                    "We help our students achieve consistent growth through disciplined trading approaches.",
                ),
            ],
            experience: Paragraph::new(
                "10+ Years of Market Experience",
                "Our team has navigated through multiple market cycles, from the 2008 financial \
                 crisis to the recent global economic uncertainties. This extensive experience has \
                 given us deep insights into gold market behavior, risk management, and the \
                 psychology of trading.",
            ),
            stats: vec![
                Stat::new("10+", "Years Experience"),
                Stat::new("1000+", "Successful Trades"),
                Stat::new("500+", "Students Mentored"),
            ],
            expertise_title: "Team Expertise".to_string(),
            expertise_subtitle: "Our dedication to helping traders succeed sets us apart in the \
                industry."
                .to_string(),
            expertise: vec![
                Paragraph::new(
                    "Technical Analysis Mastery",
                    "Our team specializes in advanced technical analysis techniques, including chart \
                     pattern recognition, support and resistance identification, and momentum \
                     indicators specifically tailored for gold trading.",
                ),
                Paragraph::new(
                    "Risk Management Excellence",
                    "We emphasize proper risk management strategies that help preserve capital while \
                     maximizing profit potential. Our students learn to trade with discipline and \
                     emotional control.",
                ),
                Paragraph::new(
                    "Market Psychology Understanding",
                    "Years of experience have taught us the importance of market psychology and \
                     sentiment analysis. We help our students understand the emotional aspects of \
                     trading and develop mental resilience.",
                ),
                Paragraph::new(
                    "Continuous Learning Approach",
                    "Markets evolve, and so do we. Our team continuously studies market trends, \
                     updates strategies, and adapts to changing market conditions to ensure our \
                     students receive the most current and effective trading education.",
                ),
            ],
        }
    }
}
