//! Minimum Support Price table.

use serde::Serialize;

use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Stable => "■",
        }
    }
}

/// One crop's support price. Prices are ₹ per quintal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MspRate {
    pub crop: &'static str,
    #[serde(rename = "centralMSP")]
    pub central_msp: u32,
    #[serde(rename = "stateMSP", skip_serializing_if = "Option::is_none")]
    pub state_msp: Option<u32>,
    pub season: &'static str,
    pub last_updated: &'static str,
    pub trend: Trend,
    pub state: &'static str,
}

impl MspRate {
    pub fn central_label(&self) -> String {
        format!("{}/quintal", format::inr(self.central_msp as u64))
    }

    pub fn state_label(&self) -> Option<String> {
        self.state_msp
            .map(|p| format!("{}/quintal", format::inr(p as u64)))
    }

    /// How much the state pays on top of the central price, if it sets its own.
    pub fn state_bonus(&self) -> Option<i64> {
        self.state_msp
            .map(|p| p as i64 - self.central_msp as i64)
    }

    /// Bonus shown next to the state price, e.g. `+₹25 over central`.
    pub fn state_bonus_label(&self) -> Option<String> {
        let bonus = self.state_bonus()?;
        let sign = if bonus < 0 { "-" } else { "+" };
        Some(format!("{}{} over central", sign, format::inr(bonus.unsigned_abs())))
    }

    pub fn updated_label(&self) -> String {
        format!("Updated: {}", format::date_in(self.last_updated))
    }
}

const RATES: [MspRate; 4] = [
    MspRate {
        crop: "Wheat",
        central_msp: 2275,
        state_msp: Some(2300),
        season: "Rabi 2024-25",
        last_updated: "2024-10-15",
        trend: Trend::Up,
        state: "Punjab",
    },
    MspRate {
        crop: "Rice (Common)",
        central_msp: 2300,
        state_msp: Some(2350),
        season: "Kharif 2024",
        last_updated: "2024-09-20",
        trend: Trend::Up,
        state: "Punjab",
    },
    MspRate {
        crop: "Cotton",
        central_msp: 7020,
        state_msp: None,
        season: "Kharif 2024",
        last_updated: "2024-09-15",
        trend: Trend::Stable,
        state: "Gujarat",
    },
    MspRate {
        crop: "Sugarcane",
        central_msp: 340,
        state_msp: Some(380),
        season: "2024-25",
        last_updated: "2024-10-01",
        trend: Trend::Up,
        state: "Uttar Pradesh",
    },
];

pub fn rates() -> &'static [MspRate] {
    &RATES
}

/// Case-insensitive prefix lookup, so "rice" finds "Rice (Common)".
pub fn find(crop: &str) -> Option<&'static MspRate> {
    let needle = crop.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    RATES
        .iter()
        .find(|r| r.crop.to_lowercase().starts_with(&needle))
}
