//! Display helpers shared by the TUI and the print commands.

use chrono::NaiveDate;

/// Format rupees with Indian digit grouping: `₹2,275`, `₹1,00,000`.
pub fn inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

/// Parse an ISO `YYYY-MM-DD` literal.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Render an ISO date the way the en-IN locale does (`15/10/2024`).
/// Unparseable input is returned unchanged.
pub fn date_in(s: &str) -> String {
    match parse_date(s) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_small_amounts_have_no_separator() {
        assert_eq!(inr(0), "₹0");
        assert_eq!(inr(340), "₹340");
    }

    #[test]
    fn test_inr_uses_indian_grouping() {
        assert_eq!(inr(2275), "₹2,275");
        assert_eq!(inr(50_000), "₹50,000");
        assert_eq!(inr(100_000), "₹1,00,000");
        assert_eq!(inr(2_500_000), "₹25,00,000");
        assert_eq!(inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn test_date_in_formats_day_first() {
        assert_eq!(date_in("2024-10-15"), "15/10/2024");
        assert_eq!(date_in("not a date"), "not a date");
    }
}
