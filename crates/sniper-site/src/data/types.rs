//! Trading types page content.

use serde::{Deserialize, Serialize};

use super::about::Paragraph;

/// How demanding a trading style is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
        }
    }

    /// CSS modifier for the difficulty badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "difficulty-beginner",
            Difficulty::Intermediate => "difficulty-intermediate",
            Difficulty::Expert => "difficulty-expert",
        }
    }
}

/// One trading style card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingType {
    pub icon: String,
    pub title: String,
    pub timeframe: String,
    pub description: String,
    pub features: Vec<String>,
    pub difficulty: Difficulty,
}

impl TradingType {
    pub fn new(
        icon: &str,
        title: &str,
        timeframe: &str,
        description: &str,
        features: [&str; 4],
        difficulty: Difficulty,
    ) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            timeframe: timeframe.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesContent {
    pub intro: String,
    pub what_is_trading: Vec<String>,
    pub types: Vec<TradingType>,
    pub recommendation_title: String,
    pub recommendation_body: String,
    pub recommendations: Vec<Paragraph>,
}

impl Default for TypesContent {
    fn default() -> Self {
        Self {
            intro: "Explore different trading strategies and find the approach that best fits \
                your lifestyle, risk tolerance, and trading goals."
                .to_string(),
            what_is_trading: vec![
                "Trading is the practice of buying and selling financial instruments, such as gold, \
                 currencies, stocks, or commodities, with the goal of generating profit from price \
                 movements. Unlike investing, which typically involves holding assets for extended \
                 periods, trading focuses on shorter-term price fluctuations."
                    .to_string(),
                "In gold trading specifically, traders analyze market conditions, economic factors, \
                 and technical indicators to predict whether gold prices will rise or fall. \
                 Successful trading requires a combination of market knowledge, risk management \
                 skills, emotional discipline, and the right strategy for your circumstances."
                    .to_string(),
                "At SniperTrader, we specialize in gold trading education, providing our students \
                 with the tools, knowledge, and mentorship needed to navigate the gold markets \
                 successfully. Our 10+ years of experience have taught us that different trading \
                 styles suit different personalities and lifestyles."
                    .to_string(),
            ],
            types: vec![
                TradingType::new(
                    "⚡",
                    "Scalping",
                    "Seconds to Minutes",
                    "Quick trades that capitalize on small price movements. Requires intense focus and rapid decision-making.",
                    [
                        "High frequency trades",
                        "Small profit margins",
                        "Requires constant monitoring",
                        "Best for experienced traders",
                    ],
                    Difficulty::Expert,
                ),
                TradingType::new(
                    "⏱",
                    "Day Trading",
                    "Minutes to Hours",
                    "Positions opened and closed within the same trading day. No overnight exposure to market gaps.",
                    [
                        "No overnight risk",
                        "Multiple opportunities daily",
                        "Requires market hours availability",
                        "Good for active traders",
                    ],
                    Difficulty::Intermediate,
                ),
                TradingType::new(
                    "📈",
                    "Swing Trading",
                    "Days to Weeks",
                    "Captures medium-term price swings and trends. Balances time commitment with profit potential.",
                    [
                        "Less time intensive",
                        "Captures larger moves",
                        "Some overnight risk",
                        "Suitable for working professionals",
                    ],
                    Difficulty::Beginner,
                ),
                TradingType::new(
                    "📅",
                    "Position Trading",
                    "Weeks to Months",
                    "Long-term approach focusing on major trends and fundamental analysis. Patience is key.",
                    [
                        "Long-term perspective",
                        "Less frequent trades",
                        "Higher potential returns",
                        "Requires strong fundamentals",
                    ],
                    Difficulty::Beginner,
                ),
                TradingType::new(
                    "🤖",
                    "Algorithmic Trading",
                    "Automated",
                    "Computer programs execute trades based on pre-defined criteria. Removes emotional bias.",
                    [
                        "Emotion-free trading",
                        "24/7 market monitoring",
                        "Backtesting capabilities",
                        "Requires programming knowledge",
                    ],
                    Difficulty::Expert,
                ),
                TradingType::new(
                    "🎯",
                    "Arbitrage Trading",
                    "Instant",
                    "Exploits price differences between markets or instruments. Low risk but requires significant capital.",
                    [
                        "Low risk strategy",
                        "Quick execution required",
                        "High capital requirements",
                        "Narrow profit margins",
                    ],
                    Difficulty::Expert,
                ),
            ],
            recommendation_title: "Which Trading Style is Right for You?".to_string(),
            recommendation_body: "The best trading style depends on your available time, risk \
                tolerance, capital, and personality. At SniperTrader, we help you identify the \
                most suitable approach through our personalized mentorship program."
                .to_string(),
            recommendations: vec![
                Paragraph::new(
                    "New to Trading?",
                    "Start with swing or position trading to learn market dynamics without time pressure.",
                ),
                Paragraph::new(
                    "Working Professional?",
                    "Swing trading offers the best balance between profit potential and time commitment.",
                ),
                Paragraph::new(
                    "Full-Time Trader?",
                    "Day trading and scalping can provide more frequent opportunities and higher returns.",
                ),
            ],
        }
    }
}
