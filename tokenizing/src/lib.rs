//! Colored text fragments produced when rendering symbols.
use std::borrow::Cow;
use std::fmt;

/// 24-bit color of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseHexError {
    MissingHash,
    InvalidLength,
    InvalidDigit,
}

impl fmt::Display for ParseHexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ParseHexError::MissingHash => "color must start with '#'",
            ParseHexError::InvalidLength => "color must have exactly six hex digits",
            ParseHexError::InvalidDigit => "color contains a non-hex digit",
        })
    }
}

impl std::error::Error for ParseHexError {}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses colors in the form `#rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ParseHexError> {
        let digits = s.strip_prefix('#').ok_or(ParseHexError::MissingHash)?;
        if digits.len() != 6 {
            return Err(ParseHexError::InvalidLength);
        }

        let channel = |idx: usize| {
            digits
                .get(idx..idx + 2)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or(ParseHexError::InvalidDigit)
        };

        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Escape sequence that switches a truecolor terminal to this foreground color.
    pub fn ansi(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Escape sequence that restores the terminal's default foreground color.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Colors used for each kind of token.
pub trait ColorScheme {
    fn brackets() -> &'static Color;
    fn delimiter() -> &'static Color;
    fn comment() -> &'static Color;
    fn item() -> &'static Color;

    fn spacing() -> &'static Color {
        &colors::WHITE
    }

    fn known() -> &'static Color {
        Self::item()
    }

    fn annotation() -> &'static Color {
        Self::item()
    }

    fn special() -> &'static Color {
        Self::item()
    }

    fn expr() -> &'static Color;
}

pub mod colors {
    //! IBM inspired colors, the defaults of the color scheme.

    use super::Color;

    pub const WHITE: Color = Color::from_rgb(0xff, 0xff, 0xff);
    pub const BLUE: Color = Color::from_rgb(0x0f, 0x62, 0xfe);
    pub const MAGENTA: Color = Color::from_rgb(0xf5, 0x12, 0x81);
    pub const RED: Color = Color::from_rgb(0xff, 0x00, 0x0b);
    pub const PURPLE: Color = Color::from_rgb(0x89, 0x1f, 0xff);
    pub const GREEN: Color = Color::from_rgb(0x02, 0xed, 0x6e);
    pub const GRAY60: Color = Color::from_rgb(0x60, 0x60, 0x60);
    pub const GRAY99: Color = Color::from_rgb(0x99, 0x99, 0x99);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'txt> {
    pub text: Cow<'txt, str>,
    pub color: &'static Color,
}

impl<'txt> Token<'txt> {
    pub fn from_string(text: String, color: &'static Color) -> Self {
        Self {
            text: Cow::Owned(text),
            color,
        }
    }

    pub fn from_str(text: &'static str, color: &'static Color) -> Self {
        Self {
            text: Cow::Borrowed(text),
            color,
        }
    }

    /// Text wrapped in the escape sequences for its color.
    pub fn ansi(&self) -> String {
        format!("{}{}{ANSI_RESET}", self.color.ansi(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(Color::from_hex("#f51281"), Ok(colors::MAGENTA));
        assert_eq!(Color::from_hex("#FFFFFF"), Ok(colors::WHITE));
        assert_eq!(Color::from_hex("f51281"), Err(ParseHexError::MissingHash));
        assert_eq!(Color::from_hex("#f5128"), Err(ParseHexError::InvalidLength));
        assert_eq!(Color::from_hex("#f5128g"), Err(ParseHexError::InvalidDigit));
    }

    #[test]
    fn ansi_token() {
        let token = Token::from_str("int", &colors::GREEN);
        assert_eq!(token.ansi(), "\x1b[38;2;2;237;110mint\x1b[0m");
    }
}
