//! Static site content.

mod about;
mod contact;
mod home;
mod types;

pub use about::*;
pub use contact::*;
pub use home::*;
pub use types::*;

use serde::{Deserialize, Serialize};

/// Every piece of copy on the site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContent {
    pub home: HomeContent,
    pub about: AboutContent,
    pub types: TypesContent,
    pub contact: ContactPageContent,
    pub footer: FooterContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_populated() {
        let content = SiteContent::default();
        assert_eq!(content.home.features.features.len(), 6);
        assert_eq!(content.about.values.len(), 4);
        assert_eq!(content.about.stats.len(), 3);
        assert_eq!(content.types.types.len(), 6);
        assert!(content.types.types.iter().all(|t| t.features.len() == 4));
        assert_eq!(content.contact.business.channels().len(), 4);
        assert_eq!(content.footer.services.len(), 5);
    }

    #[test]
    fn test_difficulty_labels() {
        let content = TypesContent::default();
        let swing = content
            .types
            .iter()
            .find(|t| t.title == "Swing Trading")
            .unwrap();
        assert_eq!(swing.difficulty, Difficulty::Beginner);
        assert_eq!(swing.difficulty.css_class(), "difficulty-beginner");
    }

    #[test]
    fn test_content_serializes() {
        let json = serde_json::to_value(SiteContent::default()).unwrap();
        assert_eq!(json["contact"]["business"]["email"], "contact@snipertrader.online");
    }
}
