use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Local;
use colored::*;
use krishi_core::assistant::Assistant;
use krishi_core::climate::{self, WeatherData};
use krishi_core::loans::{self, LoanCategory};
use krishi_core::{format, msp, subsidies, Config, DiseaseScanner, Language, VoiceLanguage};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn title(text: &str) {
    println!("\n{}", text.bold().green());
    println!("{}", "=".repeat(50).dimmed());
}

pub fn list_msp(crop: Option<&str>, json: bool) -> Result<()> {
    let rates: Vec<&msp::MspRate> = match crop {
        Some(name) => match msp::find(name) {
            Some(rate) => vec![rate],
            None => bail!("no MSP rate found for crop '{}'", name),
        },
        None => msp::rates().iter().collect(),
    };

    if json {
        return print_json(&rates);
    }

    title("🌾 Current MSP Rates");
    for rate in rates {
        println!(
            "\n{}  {} {}",
            rate.crop.bold().yellow(),
            rate.trend.arrow(),
            rate.trend.as_str().dimmed()
        );
        println!("  {} • {}", rate.state, rate.season.dimmed());
        println!("  Central MSP  {}", rate.central_label().bold().green());
        if let Some(state_price) = rate.state_label() {
            println!(
                "  State MSP    {}  {}",
                state_price.bold().cyan(),
                rate.state_bonus_label().unwrap_or_default().green()
            );
        }
        println!("  {}", rate.updated_label().dimmed());
    }
    Ok(())
}

pub fn list_loans(category: Option<&str>, json: bool) -> Result<()> {
    let schemes: Vec<&loans::LoanScheme> = match category {
        Some(name) => match LoanCategory::from_slug(name) {
            Some(category) => loans::by_category(category),
            None => bail!(
                "unknown loan category '{}' (expected crop, equipment, infrastructure or emergency)",
                name
            ),
        },
        None => loans::schemes().iter().collect(),
    };

    if json {
        return print_json(&schemes);
    }

    title("🏦 Government Loan Schemes");
    for loan in schemes {
        println!(
            "\n{}  [{}] [{}]",
            loan.name.bold().yellow(),
            loan.category.as_str(),
            loan.status.as_str().cyan()
        );
        println!("  {}", loan.description.dimmed());
        println!(
            "  Max {}  ·  Interest {}  ·  Tenure {}",
            loan.max_amount.bold(),
            loan.interest_rate,
            loan.tenure
        );
        for criteria in loan.eligibility {
            println!("    {} {}", "✓".green(), criteria);
        }
    }
    Ok(())
}

pub fn list_subsidies(json: bool) -> Result<()> {
    let schemes = subsidies::schemes();
    if json {
        return print_json(schemes);
    }

    let today = Local::now().date_naive();
    title("💰 Agricultural Subsidies");
    for (label, value) in subsidies::SUMMARY {
        print!("  {} {}", value.bold().green(), label.dimmed());
    }
    println!();

    for scheme in schemes {
        println!(
            "\n{} {}  [{}]",
            scheme.category.icon(),
            scheme.name.bold().yellow(),
            scheme.status.label().cyan()
        );
        println!("  {}", scheme.description.dimmed());
        println!(
            "  {}% subsidy, up to {}, {} beneficiaries",
            scheme.subsidy_percent,
            scheme.max_amount_label().bold(),
            scheme.beneficiaries
        );
        if let (Some(label), Some(deadline)) = (scheme.deadline_label(today), scheme.deadline) {
            println!("  ⏰ {} ({})", label.yellow(), format::date_in(deadline));
        }
        let (shown, more) = scheme.eligibility_preview();
        for criteria in shown {
            println!("    {} {}", "✓".green(), criteria);
        }
        if let Some(more) = more {
            println!("    {}", more.dimmed());
        }
        println!("  → {}", scheme.action_label().bold());
    }
    Ok(())
}

#[derive(Serialize)]
struct ClimateReport<'a> {
    weather: &'a WeatherData,
    soil: &'static str,
    recommendations: &'static [climate::CropRecommendation],
    alerts: &'static [climate::ClimateAlert],
}

pub fn show_climate(config: &Config, json: bool) -> Result<()> {
    let weather = WeatherData {
        location: config.location(),
        ..WeatherData::default()
    };
    let soil = climate::soil_advice(weather.soil_moisture);

    if json {
        return print_json(&ClimateReport {
            weather: &weather,
            soil,
            recommendations: climate::recommendations(),
            alerts: climate::alerts(),
        });
    }

    title(&format!("{} Weather for {}", weather.condition.icon(), weather.location));
    println!(
        "  {:.0}°C (min {:.0}°, max {:.0}°), humidity {:.0}%, wind {:.0} km/h, UV {}",
        weather.temperature.current,
        weather.temperature.min,
        weather.temperature.max,
        weather.humidity,
        weather.wind_speed,
        weather.uv_index
    );
    println!("  Soil moisture {}%: {}", weather.soil_moisture, soil.cyan());

    let today = Local::now().date_naive();
    let days: Vec<String> = climate::forecast(today)
        .iter()
        .map(|d| format!("{} {}°/{}°", d.day_of_month(), d.high, d.low))
        .collect();
    println!("  Forecast: {}", days.join("  "));

    println!("\n{}", "Alerts".bold());
    for alert in climate::alerts() {
        println!(
            "  {} [{}] {}",
            alert.title.bold().red(),
            alert.severity.as_str(),
            alert.action
        );
    }

    println!("\n{}", "Crop Recommendations".bold());
    for rec in climate::recommendations() {
        println!(
            "  {} ({}) {}",
            rec.crop.bold().yellow(),
            rec.suitability.as_str(),
            rec.expected_yield.dimmed()
        );
    }
    Ok(())
}

pub async fn ask(config: &Config, question: &str, language: Language) -> Result<()> {
    if question.trim().is_empty() {
        bail!("question is empty");
    }
    let assistant = Assistant::new(config.timings.reply_delay());

    println!("🤖 {}\n", krishi_core::labels(language).typing.dimmed());
    let reply = assistant.reply(question, language).await;
    println!("{}", reply);
    Ok(())
}

pub async fn scan(config: &Config, image: &Path, json: bool) -> Result<()> {
    let mut scanner = DiseaseScanner::new(config.timings.analysis_delay());
    scanner
        .select_image(image)
        .with_context(|| format!("cannot use {}", image.display()))?;

    if !json {
        println!("🔬 {} {}", "Analyzing".bold(), image.display());
    }
    let result = scanner.analyze().await?;

    if json {
        return print_json(&result);
    }

    title(&format!("{} ({}% confidence)", result.disease, result.confidence));
    println!("  Severity: {}", result.severity.as_str().bold().red());
    println!("\n{}", "Immediate Treatment".bold());
    for step in result.treatment {
        println!("  • {}", step);
    }
    println!("\n{}", "Prevention Tips".bold());
    for tip in result.preventive_measures {
        println!("  • {}", tip);
    }
    Ok(())
}

pub fn languages(set: Option<&str>) -> Result<()> {
    if let Some(code) = set {
        let Some(language) = Language::from_code(code) else {
            bail!("unknown language code '{}'", code);
        };
        Config::save_language(language)?;
        println!("Interface language set to {}", language.display_name().bold().green());
        return Ok(());
    }

    title("🌐 Interface Languages");
    for language in Language::all() {
        println!("  {}  {}", language.as_str().bold(), language.display_name());
    }

    println!("\n{}", "Voice Languages".bold());
    for language in VoiceLanguage::all() {
        println!(
            "  {}  {} ({})",
            language.as_str().bold(),
            language.display_name(),
            language.speech_locale().dimmed()
        );
    }
    Ok(())
}
