//! Subsidy schemes and their deadline arithmetic.

use chrono::NaiveDate;
use serde::Serialize;

use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubsidyCategory {
    Pesticide,
    Fertilizer,
    Seeds,
    Equipment,
    Irrigation,
}

impl SubsidyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubsidyCategory::Pesticide => "pesticide",
            SubsidyCategory::Fertilizer => "fertilizer",
            SubsidyCategory::Seeds => "seeds",
            SubsidyCategory::Equipment => "equipment",
            SubsidyCategory::Irrigation => "irrigation",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SubsidyCategory::Pesticide => "🌿",
            SubsidyCategory::Fertilizer => "🧪",
            SubsidyCategory::Seeds => "🌱",
            SubsidyCategory::Equipment => "🚜",
            SubsidyCategory::Irrigation => "💧",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubsidyStatus {
    Active,
    ClosingSoon,
    Upcoming,
}

impl SubsidyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubsidyStatus::Active => "active",
            SubsidyStatus::ClosingSoon => "closing-soon",
            SubsidyStatus::Upcoming => "upcoming",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubsidyStatus::Active => "active",
            SubsidyStatus::ClosingSoon => "Closing Soon",
            SubsidyStatus::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsidyScheme {
    pub name: &'static str,
    pub description: &'static str,
    pub subsidy_percent: u8,
    pub max_amount: u64,
    pub eligibility: &'static [&'static str],
    pub documents: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<&'static str>,
    pub beneficiaries: u32,
    pub category: SubsidyCategory,
    pub status: SubsidyStatus,
}

/// Criteria shown before collapsing the rest into "+N more criteria".
const ELIGIBILITY_PREVIEW: usize = 2;

impl SubsidyScheme {
    pub fn max_amount_label(&self) -> String {
        format::inr(self.max_amount)
    }

    /// Whole days from `today` until the deadline. A deadline of today is 0.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        let deadline = format::parse_date(self.deadline?)?;
        Some((deadline - today).num_days())
    }

    pub fn deadline_label(&self, today: NaiveDate) -> Option<String> {
        let days = self.days_left(today)?;
        if days > 0 {
            Some(format!("{} days left", days))
        } else {
            Some("Deadline passed".to_string())
        }
    }

    pub fn eligibility_preview(&self) -> (Vec<&'static str>, Option<String>) {
        let shown: Vec<&'static str> = self
            .eligibility
            .iter()
            .take(ELIGIBILITY_PREVIEW)
            .copied()
            .collect();
        let hidden = self.eligibility.len().saturating_sub(ELIGIBILITY_PREVIEW);
        let more = (hidden > 0).then(|| format!("+{} more criteria", hidden));
        (shown, more)
    }

    pub fn can_apply(&self) -> bool {
        self.status != SubsidyStatus::Upcoming
    }

    pub fn action_label(&self) -> &'static str {
        if self.can_apply() {
            "Apply Now"
        } else {
            "Coming Soon"
        }
    }
}

const SCHEMES: [SubsidyScheme; 4] = [
    SubsidyScheme {
        name: "Pesticide Subsidy Scheme",
        description: "Financial assistance for purchasing organic and bio-pesticides to promote sustainable farming",
        subsidy_percent: 50,
        max_amount: 10_000,
        eligibility: &["Small & Marginal farmers", "Certified organic farmers", "FPO members"],
        documents: &["Aadhaar Card", "Land Records", "Bank Details", "Previous purchase bills"],
        deadline: Some("2024-12-31"),
        beneficiaries: 2456,
        category: SubsidyCategory::Pesticide,
        status: SubsidyStatus::Active,
    },
    SubsidyScheme {
        name: "Organic Fertilizer Promotion",
        description: "Subsidy on vermicompost, organic fertilizers, and bio-fertilizers",
        subsidy_percent: 75,
        max_amount: 15_000,
        eligibility: &["All category farmers", "Organic certification holders"],
        documents: &["Farmer ID", "Soil health card", "Purchase receipts"],
        deadline: Some("2025-01-15"),
        beneficiaries: 3241,
        category: SubsidyCategory::Fertilizer,
        status: SubsidyStatus::Active,
    },
    SubsidyScheme {
        name: "Quality Seed Distribution",
        description: "Subsidized high-yielding variety seeds and hybrid seeds for better productivity",
        subsidy_percent: 85,
        max_amount: 5_000,
        eligibility: &["BPL farmers", "Women farmers", "SC/ST farmers"],
        documents: &["BPL Card", "Caste certificate (if applicable)", "Land documents"],
        deadline: None,
        beneficiaries: 5678,
        category: SubsidyCategory::Seeds,
        status: SubsidyStatus::ClosingSoon,
    },
    SubsidyScheme {
        name: "Drip Irrigation Subsidy",
        description: "Financial support for installing micro-irrigation systems to promote water conservation",
        subsidy_percent: 55,
        max_amount: 50_000,
        eligibility: &["Farmers with >1 acre land", "Water availability certificate"],
        documents: &["Land records", "Water source proof", "Technical approval"],
        deadline: Some("2024-11-30"),
        beneficiaries: 1892,
        category: SubsidyCategory::Irrigation,
        status: SubsidyStatus::ClosingSoon,
    },
];

pub fn schemes() -> &'static [SubsidyScheme] {
    &SCHEMES
}

/// Headline figures shown above the scheme list.
pub const SUMMARY: [(&str, &str); 4] = [
    ("Active Schemes", "12"),
    ("Total Beneficiaries", "13.2K"),
    ("Avg Subsidy", "60%"),
    ("Amount Disbursed", "₹2.4Cr"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        format::parse_date(s).unwrap()
    }

    #[test]
    fn test_days_left_counts_whole_days() {
        let pesticide = &schemes()[0];
        assert_eq!(pesticide.days_left(date("2024-12-01")), Some(30));
        assert_eq!(
            pesticide.deadline_label(date("2024-12-30")).as_deref(),
            Some("1 days left")
        );
    }

    #[test]
    fn test_deadline_today_or_past_is_passed() {
        let drip = &schemes()[3];
        assert_eq!(drip.days_left(date("2024-11-30")), Some(0));
        assert_eq!(drip.deadline_label(date("2024-11-30")).as_deref(), Some("Deadline passed"));
        assert_eq!(drip.deadline_label(date("2025-03-01")).as_deref(), Some("Deadline passed"));
    }

    #[test]
    fn test_scheme_without_deadline_has_no_label() {
        let seeds = &schemes()[2];
        assert_eq!(seeds.days_left(date("2024-01-01")), None);
        assert_eq!(seeds.deadline_label(date("2024-01-01")), None);
    }

    #[test]
    fn test_eligibility_preview_collapses_extra_criteria() {
        let (shown, more) = schemes()[0].eligibility_preview();
        assert_eq!(shown, vec!["Small & Marginal farmers", "Certified organic farmers"]);
        assert_eq!(more.as_deref(), Some("+1 more criteria"));

        let (shown, more) = schemes()[1].eligibility_preview();
        assert_eq!(shown.len(), 2);
        assert!(more.is_none());
    }

    #[test]
    fn test_upcoming_scheme_cannot_be_applied_for() {
        let mut scheme = schemes()[0];
        assert_eq!(scheme.action_label(), "Apply Now");
        scheme.status = SubsidyStatus::Upcoming;
        assert!(!scheme.can_apply());
        assert_eq!(scheme.action_label(), "Coming Soon");
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_value(schemes()[2]).unwrap();
        assert_eq!(json["status"], "closing-soon");
        assert_eq!(json["maxAmount"], 5000);
        assert!(json.get("deadline").is_none());
    }
}
