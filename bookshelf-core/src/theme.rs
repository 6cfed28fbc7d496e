//! Day/night theme palettes
//!
//! A theme sets two CSS custom properties, `--color-dark` and `--color-light`,
//! which every component reads for its foreground and background colors.

use crate::error::ParseThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Custom property holding the foreground color
pub const COLOR_DARK: &str = "--color-dark";

/// Custom property holding the background color
pub const COLOR_LIGHT: &str = "--color-light";

/// An RGB triple, rendered as `r, g, b` for use inside `rgb(var(...))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

/// The two color values a theme applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub dark: Rgb,
    pub light: Rgb,
}

impl Palette {
    /// Custom property name/value pairs
    pub fn custom_properties(&self) -> [(&'static str, String); 2] {
        [
            (COLOR_DARK, self.dark.to_string()),
            (COLOR_LIGHT, self.light.to_string()),
        ]
    }

    /// Declarations suitable for a `:root { ... }` block
    pub fn to_css(&self) -> String {
        self.custom_properties()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The environment's light/dark preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Parse a `prefers-color-scheme` value such as the
    /// `Sec-CH-Prefers-Color-Scheme` client hint (quotes allowed)
    pub fn from_hint(value: &str) -> Option<Self> {
        match value.trim().trim_matches('"').to_ascii_lowercase().as_str() {
            "dark" => Some(ColorScheme::Dark),
            "light" => Some(ColorScheme::Light),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// Interpret a settings-form value: "night" selects night, anything else day
    pub fn from_form_value(value: &str) -> Self {
        if value.trim() == "night" {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    /// Startup theme for a (possibly unknown) environment preference
    pub fn from_preference(preference: Option<ColorScheme>) -> Self {
        match preference {
            Some(ColorScheme::Dark) => Theme::Night,
            Some(ColorScheme::Light) | None => Theme::Day,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Day => Palette {
                dark: INK,
                light: PAPER,
            },
            Theme::Night => Palette {
                dark: PAPER,
                light: INK,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}
