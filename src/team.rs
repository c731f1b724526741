use std::fmt;

use crate::error::SimulationError;

/// Side of a two-team matchup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeamSide {
    A,
    B,
}

/// Team scoring profile.
///
/// Points are per-game season averages; `std_dev` is the spread of the
/// team's own score around its expected value.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamProfile {
    pub name: String,

    /// Short label used in the text report (e.g. "SEA")
    pub abbreviation: String,

    pub avg_points_scored: f64,

    pub avg_points_allowed: f64,

    pub std_dev: f64,

    /// Hex color in `#RRGGBB` form
    pub display_color: String,
}

impl TeamProfile {
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        avg_points_scored: f64,
        avg_points_allowed: f64,
        std_dev: f64,
        display_color: impl Into<String>,
    ) -> Self {
        TeamProfile {
            name: name.into(),
            abbreviation: abbreviation.into(),
            avg_points_scored,
            avg_points_allowed,
            std_dev,
            display_color: display_color.into(),
        }
    }

    /// Check that the profile can parameterize a normal score distribution
    /// and that its color parses.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let invalid = |reason: &str| SimulationError::InvalidTeam {
            team: self.name.clone(),
            reason: reason.to_string(),
        };

        if !self.avg_points_scored.is_finite() {
            return Err(invalid("average points scored must be finite"));
        }
        if !self.avg_points_allowed.is_finite() {
            return Err(invalid("average points allowed must be finite"));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(invalid("standard deviation must be positive and finite"));
        }
        self.rgb()?;
        Ok(())
    }

    /// Parse `display_color` into its red, green and blue components.
    pub fn rgb(&self) -> Result<(u8, u8, u8), SimulationError> {
        parse_hex_color(&self.display_color).ok_or_else(|| SimulationError::InvalidColor {
            team: self.name.clone(),
            color: self.display_color.clone(),
        })
    }
}

impl fmt::Display for TeamProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} scored | {} allowed | sd {}",
            self.name,
            self.abbreviation,
            self.avg_points_scored,
            self.avg_points_allowed,
            self.std_dev
        )
    }
}

fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(std_dev: f64, color: &str) -> TeamProfile {
        TeamProfile::new("Seattle Seahawks", "SEA", 36.0, 16.5, std_dev, color)
    }

    #[test]
    fn test_parse_team_color() {
        assert_eq!(team(9.0, "#002244").rgb().unwrap(), (0x00, 0x22, 0x44));
        assert_eq!(team(9.0, "#C60C30").rgb().unwrap(), (0xC6, 0x0C, 0x30));
    }

    #[test]
    fn test_bad_color_rejected() {
        for color in ["002244", "#0022", "#00224G", "#0022445", "#+12345", ""] {
            let err = team(9.0, color).validate().unwrap_err();
            assert!(matches!(err, SimulationError::InvalidColor { .. }), "{color}");
        }
    }

    #[test]
    fn test_non_positive_std_dev_rejected() {
        for sd in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = team(sd, "#002244").validate().unwrap_err();
            assert!(matches!(err, SimulationError::InvalidTeam { .. }), "sd = {sd}");
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(team(9.0, "#002244").validate().is_ok());
    }
}
