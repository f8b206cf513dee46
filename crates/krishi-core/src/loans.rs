//! Government loan schemes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Available,
    Limited,
    Seasonal,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Available => "available",
            LoanStatus::Limited => "limited",
            LoanStatus::Seasonal => "seasonal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanCategory {
    Crop,
    Equipment,
    Infrastructure,
    Emergency,
}

impl LoanCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanCategory::Crop => "crop",
            LoanCategory::Equipment => "equipment",
            LoanCategory::Infrastructure => "infrastructure",
            LoanCategory::Emergency => "emergency",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "crop" => Some(LoanCategory::Crop),
            "equipment" => Some(LoanCategory::Equipment),
            "infrastructure" => Some(LoanCategory::Infrastructure),
            "emergency" => Some(LoanCategory::Emergency),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanScheme {
    pub name: &'static str,
    pub description: &'static str,
    pub max_amount: &'static str,
    pub interest_rate: &'static str,
    pub tenure: &'static str,
    pub eligibility: &'static [&'static str],
    pub status: LoanStatus,
    pub category: LoanCategory,
}

const SCHEMES: [LoanScheme; 4] = [
    LoanScheme {
        name: "Kisan Credit Card (KCC)",
        description: "Flexible credit facility for crop production and allied activities",
        max_amount: "₹3 Lakh",
        interest_rate: "7% (Subsidized)",
        tenure: "5 Years",
        eligibility: &["Landowner farmers", "Tenant farmers", "Oral lessees"],
        status: LoanStatus::Available,
        category: LoanCategory::Crop,
    },
    LoanScheme {
        name: "PM-KISAN Tractor Loan",
        description: "Subsidized loans for purchasing agricultural machinery and equipment",
        max_amount: "₹10 Lakh",
        interest_rate: "8.5%",
        tenure: "7 Years",
        eligibility: &["Small & Marginal farmers", "Valid land documents required"],
        status: LoanStatus::Available,
        category: LoanCategory::Equipment,
    },
    LoanScheme {
        name: "Crop Insurance Loan",
        description: "Emergency financial support for crop loss due to natural calamities",
        max_amount: "₹5 Lakh",
        interest_rate: "6% (Emergency)",
        tenure: "3 Years",
        eligibility: &["Insured crop farmers", "Documented crop loss"],
        status: LoanStatus::Seasonal,
        category: LoanCategory::Emergency,
    },
    LoanScheme {
        name: "Warehouse Infrastructure Loan",
        description: "Funding for building storage and post-harvest infrastructure",
        max_amount: "₹25 Lakh",
        interest_rate: "9%",
        tenure: "10 Years",
        eligibility: &["FPOs", "Individual farmers with >5 acres"],
        status: LoanStatus::Limited,
        category: LoanCategory::Infrastructure,
    },
];

pub fn schemes() -> &'static [LoanScheme] {
    &SCHEMES
}

pub fn by_category(category: LoanCategory) -> Vec<&'static LoanScheme> {
    SCHEMES.iter().filter(|s| s.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kcc_is_first_and_available() {
        let kcc = &schemes()[0];
        assert_eq!(kcc.name, "Kisan Credit Card (KCC)");
        assert_eq!(kcc.status, LoanStatus::Available);
        assert_eq!(kcc.eligibility.len(), 3);
    }

    #[test]
    fn test_by_category() {
        let emergency = by_category(LoanCategory::Emergency);
        assert_eq!(emergency.len(), 1);
        assert_eq!(emergency[0].name, "Crop Insurance Loan");
        assert_eq!(LoanCategory::from_slug("Infrastructure"), Some(LoanCategory::Infrastructure));
        assert_eq!(LoanCategory::from_slug("housing"), None);
    }
}
