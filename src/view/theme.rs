//! Theme resolution: hex color tokens from the config, resolved once into
//! ratatui colors. A malformed token falls back to its built-in default
//! rather than failing the app.

use crate::config::ThemeTokens;
use ratatui::style::Color;

/// Resolved theme, ready for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub background: Color,
    pub text: Color,
    pub link: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0xea, 0xb3, 0x08),
            background: Color::Rgb(0x00, 0x00, 0x00),
            text: Color::Rgb(0xcc, 0xcc, 0xcc),
            link: Color::Rgb(0xea, 0xb3, 0x08),
            border: Color::Rgb(0x33, 0x33, 0x33),
        }
    }
}

impl Theme {
    /// Resolve config tokens; each field independently falls back on error.
    pub fn from_tokens(tokens: &ThemeTokens) -> Self {
        let fallback = Self::default();
        Self {
            primary: parse_hex_color(&tokens.primary_color).unwrap_or(fallback.primary),
            background: parse_hex_color(&tokens.background_color).unwrap_or(fallback.background),
            text: parse_hex_color(&tokens.text_color).unwrap_or(fallback.text),
            link: parse_hex_color(&tokens.link_color).unwrap_or(fallback.link),
            border: parse_hex_color(&tokens.border_color).unwrap_or(fallback.border),
        }
    }
}

/// Parse `#rrggbb` or `#rgb` into a ratatui color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
