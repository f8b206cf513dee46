//! Weather snapshot, crop recommendations, and climate alerts.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Stormy => "stormy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀",
            Condition::Cloudy => "☁",
            Condition::Rainy => "🌧",
            Condition::Stormy => "⛈",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    pub current: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rainfall {
    pub today: f64,
    pub forecast: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub location: String,
    pub temperature: Temperature,
    pub humidity: f64,
    pub rainfall: Rainfall,
    pub wind_speed: f64,
    pub condition: Condition,
    pub uv_index: u8,
    pub soil_moisture: u8,
}

impl Default for WeatherData {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            temperature: Temperature {
                current: 28.0,
                min: 22.0,
                max: 35.0,
            },
            humidity: 65.0,
            rainfall: Rainfall {
                today: 2.5,
                forecast: 15.0,
            },
            wind_speed: 12.0,
            condition: Condition::Cloudy,
            uv_index: 6,
            soil_moisture: 45,
        }
    }
}

pub const DEFAULT_LOCATION: &str = "Punjab, India";

const HUMIDITY_FLOOR: f64 = 20.0;
const HUMIDITY_CEILING: f64 = 90.0;

impl WeatherData {
    /// Simulated live update: temperature moves up to ±1°C, humidity up to ±2.5
    /// and stays within [20, 90].
    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let t: f64 = rng.gen();
        let h: f64 = rng.gen();
        self.temperature.current += (t - 0.5) * 2.0;
        self.humidity = (self.humidity + (h - 0.5) * 5.0).clamp(HUMIDITY_FLOOR, HUMIDITY_CEILING);
    }
}

pub fn soil_advice(moisture: u8) -> &'static str {
    if moisture > 60 {
        "Optimal for most crops"
    } else if moisture > 30 {
        "Moderate - consider irrigation"
    } else {
        "Low - irrigation recommended"
    }
}

/// One forecast column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub condition: Condition,
    pub high: i32,
    pub low: i32,
}

impl ForecastDay {
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

/// Seven days starting today.
pub fn forecast(today: NaiveDate) -> Vec<ForecastDay> {
    today
        .iter_days()
        .take(7)
        .map(|date| ForecastDay {
            date,
            condition: Condition::Sunny,
            high: 32,
            low: 24,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl Suitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suitability::Excellent => "excellent",
            Suitability::Good => "good",
            Suitability::Moderate => "moderate",
            Suitability::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub crop: &'static str,
    pub suitability: Suitability,
    pub reason: &'static str,
    pub best_practices: &'static [&'static str],
    pub expected_yield: &'static str,
}

const RECOMMENDATIONS: [CropRecommendation; 3] = [
    CropRecommendation {
        crop: "Wheat",
        suitability: Suitability::Excellent,
        reason: "Optimal temperature and soil conditions for winter wheat",
        best_practices: &["Sow by November 15", "Use drought-resistant varieties", "Apply phosphorus fertilizer"],
        expected_yield: "40-45 quintals/hectare",
    },
    CropRecommendation {
        crop: "Mustard",
        suitability: Suitability::Good,
        reason: "Suitable for current climate with moderate water requirements",
        best_practices: &["Plant in well-drained soil", "Monitor for aphid infestation", "Harvest timely to avoid shattering"],
        expected_yield: "12-15 quintals/hectare",
    },
    CropRecommendation {
        crop: "Rice",
        suitability: Suitability::Poor,
        reason: "Not suitable for current season and water availability",
        best_practices: &["Consider for next kharif season", "Prepare fields early", "Arrange adequate water supply"],
        expected_yield: "Not recommended",
    },
];

pub fn recommendations() -> &'static [CropRecommendation] {
    &RECOMMENDATIONS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Weather,
    Pest,
    Disease,
    Irrigation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateAlert {
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub severity: crate::disease::Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub valid_until: &'static str,
}

const ALERTS: [ClimateAlert; 2] = [
    ClimateAlert {
        kind: AlertType::Weather,
        severity: crate::disease::Severity::Medium,
        title: "Heavy Rainfall Expected",
        description: "Moderate to heavy rainfall predicted in next 3 days (15-25mm)",
        action: "Ensure proper drainage in fields, postpone spraying activities",
        valid_until: "2024-10-18",
    },
    ClimateAlert {
        kind: AlertType::Pest,
        severity: crate::disease::Severity::High,
        title: "Aphid Alert",
        description: "High humidity favorable for aphid multiplication in mustard crops",
        action: "Monitor crops regularly, apply neem oil or recommended insecticide",
        valid_until: "2024-10-20",
    },
];

pub fn alerts() -> &'static [ClimateAlert] {
    &ALERTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_soil_advice_thresholds() {
        assert_eq!(soil_advice(61), "Optimal for most crops");
        assert_eq!(soil_advice(60), "Moderate - consider irrigation");
        assert_eq!(soil_advice(45), "Moderate - consider irrigation");
        assert_eq!(soil_advice(30), "Low - irrigation recommended");
    }

    #[test]
    fn test_drift_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut weather = WeatherData::default();
        for _ in 0..500 {
            let before = weather.temperature.current;
            weather.drift(&mut rng);
            assert!((weather.temperature.current - before).abs() <= 1.0);
            assert!((HUMIDITY_FLOOR..=HUMIDITY_CEILING).contains(&weather.humidity));
        }
    }

    #[test]
    fn test_forecast_is_seven_consecutive_days() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 29).unwrap();
        let days = forecast(today);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, today);
        let dom: Vec<u32> = days.iter().map(|d| d.day_of_month()).collect();
        assert_eq!(dom, vec![29, 30, 31, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rice_is_not_recommended() {
        let rice = recommendations().iter().find(|r| r.crop == "Rice").unwrap();
        assert_eq!(rice.suitability, Suitability::Poor);
        assert_eq!(alerts().len(), 2);
    }
}
