//! Top-level sections and the literal dashboard content.

use serde::{Deserialize, Serialize};

use crate::i18n::Labels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Dashboard,
    Schemes,
    Loans,
    Subsidies,
    Climate,
    DiseaseDetection,
    Support,
}

impl Section {
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Schemes => "schemes",
            Section::Loans => "loans",
            Section::Subsidies => "subsidies",
            Section::Climate => "climate",
            Section::DiseaseDetection => "disease-detection",
            Section::Support => "support",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Section::all().into_iter().find(|sec| sec.slug() == s)
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::Dashboard,
            Section::Schemes,
            Section::Loans,
            Section::Subsidies,
            Section::Climate,
            Section::DiseaseDetection,
            Section::Support,
        ]
    }

    /// Navigation label. Climate has no translated entry and stays English.
    pub fn label(&self, labels: &Labels) -> &'static str {
        match self {
            Section::Dashboard => labels.dashboard,
            Section::Schemes => labels.schemes,
            Section::Loans => labels.loans,
            Section::Subsidies => labels.subsidies,
            Section::Climate => "Climate",
            Section::DiseaseDetection => labels.disease_detection,
            Section::Support => labels.voice_support,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Section::Dashboard => "Complete Farming Solutions",
            Section::Schemes => "Minimum Support Price (MSP)",
            Section::Loans => "Government Loan Schemes",
            Section::Subsidies => "Agricultural Subsidies",
            Section::Climate => "Climate Support",
            Section::DiseaseDetection => "Plant Disease Detection",
            Section::Support => "Voice Support",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Section::Dashboard => "Everything you need for modern, profitable farming - from government schemes to AI-powered assistance",
            Section::Schemes => "Latest MSP rates for major crops - Central and State government support prices",
            Section::Loans => "Access affordable credit facilities for farming operations and infrastructure development",
            Section::Subsidies => "Access financial assistance for pesticides, fertilizers, seeds, and farming equipment",
            Section::Climate => "Weather-based recommendations and climate predictions for better farming decisions",
            Section::DiseaseDetection => "Upload a photo of your plant to get instant disease diagnosis and treatment recommendations",
            Section::Support => "Get farming advice in your local language through voice interaction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCard {
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub target: Section,
}

pub const CARDS: [DashboardCard; 6] = [
    DashboardCard {
        title: "MSP Schemes",
        description: "Check latest Minimum Support Prices for your crops from central and state governments",
        button_text: "View MSP Rates",
        target: Section::Schemes,
    },
    DashboardCard {
        title: "Government Loans",
        description: "Access affordable credit facilities for farming operations and equipment purchase",
        button_text: "Explore Loans",
        target: Section::Loans,
    },
    DashboardCard {
        title: "Subsidies",
        description: "Get financial assistance for pesticides, fertilizers, seeds, and farming equipment",
        button_text: "View Subsidies",
        target: Section::Subsidies,
    },
    DashboardCard {
        title: "Climate Support",
        description: "Weather predictions and climate-based farming recommendations for better yields",
        button_text: "Get Weather Info",
        target: Section::Climate,
    },
    DashboardCard {
        title: "Disease Detection",
        description: "Upload plant photos for instant AI-powered disease diagnosis and treatment advice",
        button_text: "Scan Plant",
        target: Section::DiseaseDetection,
    },
    DashboardCard {
        title: "Voice Support",
        description: "Get farming advice in Hindi, English, and regional languages through voice interaction",
        button_text: "Start Voice Chat",
        target: Section::Support,
    },
];

pub const HERO_TITLE: &str = "FarmAssist";
pub const HERO_SUBTITLE: &str = "किसान सहायता केंद्र - Your Complete Digital Farming Solution";
pub const HERO_BLURB: &str = "Access government schemes, get instant crop disease diagnosis, receive weather predictions, and interact with AI-powered voice support - all in your local language.";

/// (value, label)
pub const STATS: [(&str, &str); 4] = [
    ("50,000+", "Farmers Served"),
    ("₹2.5Cr", "Subsidies Claimed"),
    ("95%", "Disease Detection Accuracy"),
    ("12", "Languages Supported"),
];

/// (icon, title, description)
pub const FEATURES: [(&str, &str, &str); 3] = [
    ("🌍", "Multi-Language Support", "Available in Hindi, English, Telugu, Tamil, Malayalam, and more regional languages"),
    ("🤖", "AI-Powered Insights", "Advanced machine learning for disease detection and crop recommendations"),
    ("⚡", "Real-time Data", "Live weather updates, MSP rates, and government scheme notifications"),
];

pub const FOOTER: [&str; 2] = [
    "© 2024 FarmAssist - Government of India Initiative",
    "Empowering farmers with technology and government support",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::labels;
    use crate::language::Language;

    #[test]
    fn test_slug_roundtrip() {
        for section in Section::all() {
            assert_eq!(Section::from_slug(section.slug()), Some(section));
        }
        assert_eq!(Section::from_slug("weather"), None);
    }

    #[test]
    fn test_every_card_targets_a_section_other_than_dashboard() {
        for card in CARDS {
            assert_ne!(card.target, Section::Dashboard);
        }
    }

    #[test]
    fn test_labels_follow_language() {
        assert_eq!(Section::Loans.label(labels(Language::Hi)), "ऋण");
        assert_eq!(Section::Support.label(labels(Language::En)), "Voice Support");
    }
}
