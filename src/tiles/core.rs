// src/tiles/core.rs
//! Core tile types: roster records, money parsing, wealth banding.
//! Keep this file dependency-light; it compiles before the asset/spawn glue.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One roster entry, as authored in a `.roster.ron` asset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileRecord {
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub interest: String,
    /// Free-form money string ("$250,000"); parsed at spawn time.
    #[serde(default)]
    pub net_worth: String,
}

impl TileRecord {
    /// One-line readout for the detail HUD, with "-" fallbacks for
    /// missing fields.
    pub fn summary(&self, index: usize) -> String {
        let age = self
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        let country = if self.country.is_empty() { "--" } else { &self.country };
        let interest = if self.interest.is_empty() { "-" } else { &self.interest };
        let net_worth = if self.net_worth.is_empty() { "$0" } else { &self.net_worth };
        format!(
            "#{} {} [{}]  Age: {}  Interest: {}  Net Worth: {}",
            index + 1,
            self.name,
            country,
            age,
            interest,
            net_worth
        )
    }
}

/// Index of a tile's record in the capped roster. Targets at the same
/// index in every layout belong to this tile.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileIndex(pub usize);

/// Net-worth color band for a tile's background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WealthBand {
    High,
    Medium,
    Low,
}

impl WealthBand {
    pub const HIGH_THRESHOLD: f32 = 200_000.0;
    pub const MEDIUM_THRESHOLD: f32 = 100_000.0;

    pub fn for_value(net_worth: f32) -> Self {
        if net_worth >= Self::HIGH_THRESHOLD {
            WealthBand::High
        } else if net_worth >= Self::MEDIUM_THRESHOLD {
            WealthBand::Medium
        } else {
            WealthBand::Low
        }
    }

    /// Semi-transparent tile background color.
    pub fn color(self) -> Color {
        match self {
            WealthBand::High => Color::srgba(34.0 / 255.0, 197.0 / 255.0, 94.0 / 255.0, 0.78),
            WealthBand::Medium => Color::srgba(249.0 / 255.0, 115.0 / 255.0, 22.0 / 255.0, 0.78),
            WealthBand::Low => Color::srgba(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 0.78),
        }
    }
}

/// Parse a money string ("$1,250,000", "90k", "250000.50") into a number.
/// Every character that is not a digit or a dot is dropped; anything that
/// still fails to parse counts as zero.
pub fn parse_money(raw: &str) -> f32 {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse::<f32>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_parsing_strips_formatting() {
        assert_eq!(parse_money("$250,000"), 250_000.0);
        assert_eq!(parse_money("1,250,000"), 1_250_000.0);
        assert_eq!(parse_money("90k"), 90.0);
        assert_eq!(parse_money("123.45"), 123.45);
    }

    #[test]
    fn unparseable_money_is_zero() {
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("n/a"), 0.0);
        assert_eq!(parse_money("1.2.3"), 0.0);
    }

    #[test]
    fn banding_thresholds() {
        assert_eq!(WealthBand::for_value(500_000.0), WealthBand::High);
        assert_eq!(WealthBand::for_value(200_000.0), WealthBand::High);
        assert_eq!(WealthBand::for_value(199_999.0), WealthBand::Medium);
        assert_eq!(WealthBand::for_value(100_000.0), WealthBand::Medium);
        assert_eq!(WealthBand::for_value(99_999.0), WealthBand::Low);
        assert_eq!(WealthBand::for_value(0.0), WealthBand::Low);
    }

    #[test]
    fn summary_shows_the_full_record() {
        let record = TileRecord {
            name: "Amara Osei".to_string(),
            age: Some(34),
            country: "GH".to_string(),
            interest: "Cycling".to_string(),
            net_worth: "$245,000".to_string(),
        };
        assert_eq!(
            record.summary(0),
            "#1 Amara Osei [GH]  Age: 34  Interest: Cycling  Net Worth: $245,000"
        );
    }

    #[test]
    fn summary_falls_back_for_missing_fields() {
        let record = TileRecord {
            name: "Unknown".to_string(),
            age: None,
            country: String::new(),
            interest: String::new(),
            net_worth: String::new(),
        };
        assert_eq!(
            record.summary(4),
            "#5 Unknown [--]  Age: -  Interest: -  Net Worth: $0"
        );
    }

    #[test]
    fn roster_record_deserializes_from_ron() {
        let record: TileRecord = ron::de::from_str(
            r#"(name: "Amara Osei", age: Some(34), country: "GH", interest: "Cycling", net_worth: "$245,000")"#,
        )
        .unwrap();
        assert_eq!(record.name, "Amara Osei");
        assert_eq!(record.age, Some(34));
        assert_eq!(parse_money(&record.net_worth), 245_000.0);
    }
}
