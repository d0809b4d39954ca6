//! Contact page and footer content.

use serde::{Deserialize, Serialize};

use super::about::Paragraph;

/// A way to reach the business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub icon: String,
    pub title: String,
    pub value: String,
    pub description: String,
}

impl ContactChannel {
    pub fn new(icon: &str, title: &str, value: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            value: value.to_string(),
            description: description.to_string(),
        }
    }
}

/// Business contact details shared by the contact page and the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub hours: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "SniperTrader".to_string(),
            email: "contact@snipertrader.online".to_string(),
            phone: "+92 3350270938".to_string(),
            address: "Bader Commercial, Phase V, DHA, Karachi".to_string(),
            hours: "Mon-Fri 9AM-6PM PST".to_string(),
        }
    }
}

impl BusinessInfo {
    /// Channels listed on the contact page.
    pub fn channels(&self) -> Vec<ContactChannel> {
        vec![
            ContactChannel::new("✉", "Email", &self.email, "Send us an email anytime"),
            ContactChannel::new("☎", "Phone", &self.phone, "Call us during business hours"),
            ContactChannel::new("📍", "Location", &self.address, "Our headquarters"),
            ContactChannel::new("🕘", "Business Hours", &self.hours, "We're here to help"),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPageContent {
    pub intro: String,
    pub form_title: String,
    pub business: BusinessInfo,
    pub response_title: String,
    pub response_body: String,
    pub response_times: Vec<String>,
    pub faq: Vec<Paragraph>,
}

impl Default for ContactPageContent {
    fn default() -> Self {
        Self {
            intro: "Ready to start your trading journey? Have questions about our mentorship \
                program? We're here to help you succeed in gold trading."
                .to_string(),
            form_title: "Send Us a Message".to_string(),
            business: BusinessInfo::default(),
            response_title: "Quick Response Guarantee".to_string(),
            response_body: "We understand that timing is crucial in trading. That's why we \
                guarantee a response to all inquiries within 24 hours during business days."
                .to_string(),
            response_times: vec![
                "General inquiries: Within 4 hours".to_string(),
                "Mentorship questions: Within 2 hours".to_string(),
                "Technical support: Within 1 hour".to_string(),
            ],
            faq: vec![
                Paragraph::new(
                    "Do you offer free consultations?",
                    "Yes, we offer a 30-minute free consultation to discuss your trading goals.",
                ),
                Paragraph::new(
                    "What's included in the mentorship?",
                    "1-on-1 sessions, real-time signals, market analysis, and ongoing support.",
                ),
                Paragraph::new(
                    "How do I get started?",
                    "Simply fill out the form and we'll schedule an introductory call.",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub tagline: String,
    pub services: Vec<String>,
    pub business: BusinessInfo,
    pub copyright: String,
    pub disclaimer: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            tagline: "Professional trading mentorship with 10+ years of market experience. \
                Master gold trading with expert guidance."
                .to_string(),
            services: [
                "Gold Trading Signals",
                "1-on-1 Mentorship",
                "Market Analysis",
                "Risk Management",
                "Trading Education",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            business: BusinessInfo::default(),
            copyright: "© 2024 SniperTrader. All rights reserved.".to_string(),
            disclaimer: "Trading involves risk. Past performance does not guarantee future results."
                .to_string(),
        }
    }
}
