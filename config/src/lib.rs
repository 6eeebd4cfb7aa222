use once_cell::sync::Lazy;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::parse);

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use tokenizing::Color;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::demangler")]
    pub demangler: Demangler,
    #[serde(default = "defaults::colors")]
    pub colors: Colors,
}

/// Limits placed on decoding a single symbol.
#[derive(Debug, Deserialize)]
pub struct Demangler {
    /// Bytes of scratch memory a decode may use before it's abandoned.
    #[serde(default = "defaults::arena_capacity")]
    pub arena_capacity: usize,
    /// How deep the grammar may nest before a decode is abandoned.
    #[serde(default = "defaults::max_recursion")]
    pub max_recursion: u32,
}

#[derive(Debug, Deserialize)]
pub struct Colors {
    #[serde(default = "defaults::item", deserialize_with = "color")]
    pub item: Color,
    #[serde(default = "defaults::known", deserialize_with = "color")]
    pub known: Color,
    #[serde(default = "defaults::special", deserialize_with = "color")]
    pub special: Color,
    #[serde(default = "defaults::annotation", deserialize_with = "color")]
    pub annotation: Color,
    #[serde(default = "defaults::expr", deserialize_with = "color")]
    pub expr: Color,
    #[serde(default = "defaults::brackets", deserialize_with = "color")]
    pub brackets: Color,
    #[serde(default = "defaults::delimiter", deserialize_with = "color")]
    pub delimiter: Color,
    #[serde(default = "defaults::comment", deserialize_with = "color")]
    pub comment: Color,
}

/// Default values when one is missing in the config.yaml.
/// Important to note is that any update to these defaults should also be reflected in the
/// config.yaml.
mod defaults {
    use tokenizing::{colors, Color};

    pub fn config() -> super::Config {
        super::Config {
            demangler: demangler(),
            colors: colors(),
        }
    }

    pub fn demangler() -> super::Demangler {
        super::Demangler {
            arena_capacity: arena_capacity(),
            max_recursion: max_recursion(),
        }
    }

    pub fn colors() -> super::Colors {
        super::Colors {
            item: item(),
            known: known(),
            special: special(),
            annotation: annotation(),
            expr: expr(),
            brackets: brackets(),
            delimiter: delimiter(),
            comment: comment(),
        }
    }

    pub fn arena_capacity() -> usize {
        1024 * 1024
    }
    pub fn max_recursion() -> u32 {
        96
    }

    pub fn item() -> Color {
        colors::MAGENTA
    }
    pub fn known() -> Color {
        colors::PURPLE
    }
    pub fn special() -> Color {
        colors::RED
    }
    pub fn annotation() -> Color {
        colors::BLUE
    }
    pub fn expr() -> Color {
        colors::GREEN
    }
    pub fn brackets() -> Color {
        colors::GRAY60
    }
    pub fn delimiter() -> Color {
        colors::GRAY99
    }
    pub fn comment() -> Color {
        colors::GRAY60
    }
}

impl Default for Config {
    fn default() -> Self {
        defaults::config()
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        let mut dir = dirs::data_dir()?;
        dir.push("symsize");
        dir.push("config.yaml");
        Some(dir)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(defaults::config());
        }

        serde_yaml::from_str(raw)
    }

    pub fn parse() -> Self {
        let path = match Self::path() {
            Some(path) => path,
            None => {
                log::warn!("No data directory set, using the default config.");
                return defaults::config();
            }
        };

        let raw = std::fs::read_to_string(path).unwrap_or_default();
        match Self::from_yaml(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("Failed to parse config.\nError: {err}.");

                // parse everything as default
                defaults::config()
            }
        }
    }
}

fn color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    struct ColorParsing;
    impl<'de> Visitor<'de> for ColorParsing {
        type Value = Color;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("expected hex color values")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            Color::from_hex(s).map_err(|err| E::custom(format!("{err}")))
        }
    }

    deserializer.deserialize_str(ColorParsing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenizing::colors;

    #[test]
    fn empty() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.demangler.arena_capacity, 1024 * 1024);
        assert_eq!(config.demangler.max_recursion, 96);
        assert_eq!(config.colors.item, colors::MAGENTA);
    }

    #[test]
    fn partial() {
        let config = Config::from_yaml(
            "demangler:\n  max_recursion: 32\ncolors:\n  item: \"#102030\"\n",
        )
        .unwrap();
        assert_eq!(config.demangler.max_recursion, 32);
        assert_eq!(config.demangler.arena_capacity, 1024 * 1024);
        assert_eq!(config.colors.item, Color::from_rgb(0x10, 0x20, 0x30));
        assert_eq!(config.colors.known, colors::PURPLE);
    }

    #[test]
    fn bad_color() {
        assert!(Config::from_yaml("colors:\n  item: \"red\"\n").is_err());
    }
}
