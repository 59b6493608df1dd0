/// Color tokens understood by the game's text renderer
///
/// Two token families exist and they are not interchangeable:
/// item-rarity color codes (`ÿc` + one character) are embedded inline in
/// string tables, tooltip font colors (`$FontColor<Name>`) are referenced from
/// UI layout data.
use crate::config::ConfigError;
use std::fmt;

/// Escape sequence that starts an inline color code.
pub const COLOR_CODE_PREFIX: &str = "ÿc";

/// Shared behaviour of both color token families.
pub trait ColorToken: Copy + Eq + fmt::Display {
    /// Look a token up by its config name (`"dark-green"`, `"gold"`, ...).
    fn from_name(name: &str) -> Option<Self>;
}

/// Inline item-rarity color code, rendered as `ÿc<code>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCode(char);

impl ColorCode {
    pub const WHITE: Self = Self('0');
    pub const RED: Self = Self('1');
    pub const GREEN: Self = Self('2');
    pub const BLUE: Self = Self('3');
    pub const GOLD: Self = Self('4');
    pub const GRAY: Self = Self('5');
    pub const BLACK: Self = Self('6');
    pub const TAN: Self = Self('7');
    pub const ORANGE: Self = Self('8');
    pub const YELLOW: Self = Self('9');
    pub const DARK_GREEN: Self = Self(':');
    pub const PURPLE: Self = Self(';');
    pub const LIGHT_GRAY: Self = Self('K');
    pub const TEAL: Self = Self('N');
    pub const PINK: Self = Self('O');

    const NAMED: [(&'static str, ColorCode); 15] = [
        ("white", Self::WHITE),
        ("red", Self::RED),
        ("green", Self::GREEN),
        ("blue", Self::BLUE),
        ("gold", Self::GOLD),
        ("gray", Self::GRAY),
        ("black", Self::BLACK),
        ("tan", Self::TAN),
        ("orange", Self::ORANGE),
        ("yellow", Self::YELLOW),
        ("dark-green", Self::DARK_GREEN),
        ("purple", Self::PURPLE),
        ("light-gray", Self::LIGHT_GRAY),
        ("teal", Self::TEAL),
        ("pink", Self::PINK),
    ];

    /// Wrap a raw code character found in game text.
    pub const fn from_code(code: char) -> Self {
        Self(code)
    }

    pub const fn code(self) -> char {
        self.0
    }
}

impl ColorToken for ColorCode {
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::NAMED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, color)| *color)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CODE_PREFIX, self.0)
    }
}

/// Tooltip font color, rendered as the `$FontColor<Name>` layout reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontColor {
    White,
    Red,
    Green,
    Blue,
    Gold,
    Gray,
    Black,
    Tan,
    Orange,
    Yellow,
    DarkGreen,
    Purple,
}

impl FontColor {
    fn layout_name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Gold => "Gold",
            Self::Gray => "Gray",
            Self::Black => "Black",
            Self::Tan => "Tan",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::DarkGreen => "DarkGreen",
            Self::Purple => "Purple",
        }
    }
}

impl ColorToken for FontColor {
    fn from_name(name: &str) -> Option<Self> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "white" => Self::White,
            "red" => Self::Red,
            "green" => Self::Green,
            "blue" => Self::Blue,
            "gold" => Self::Gold,
            "gray" => Self::Gray,
            "black" => Self::Black,
            "tan" => Self::Tan,
            "orange" => Self::Orange,
            "yellow" => Self::Yellow,
            "dark-green" => Self::DarkGreen,
            "purple" => Self::Purple,
            _ => return None,
        };
        Some(color)
    }
}

impl fmt::Display for FontColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$FontColor{}", self.layout_name())
    }
}

/// A color as written in the host config: a concrete name or the
/// `default`/`none` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSetting<T: ColorToken> {
    Default,
    Named(T),
}

impl<T: ColorToken> ColorSetting<T> {
    pub fn parse(key: &str, value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "default" | "none" => Ok(Self::Default),
            other => T::from_name(other)
                .map(Self::Named)
                .ok_or_else(|| ConfigError::unknown(key, value)),
        }
    }

    /// Replace the sentinel with the caller's fallback.
    pub fn resolve(self, fallback: T) -> T {
        match self {
            Self::Default => fallback,
            Self::Named(color) => color,
        }
    }

    /// Concrete color or an error naming the setting.
    pub fn require(self, key: &str) -> Result<T, ConfigError> {
        match self {
            Self::Default => Err(ConfigError::MissingColor(key.to_string())),
            Self::Named(color) => Ok(color),
        }
    }
}

/// Fixed colors used by the decorations themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Rainbow highlight colors, outermost first.
    pub rainbow: [ColorCode; 4],
    /// Color of the name inside a rainbow highlight.
    pub rainbow_name: ColorCode,
    /// Color of the big tooltip "Pick Up" line.
    pub pickup: ColorCode,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            rainbow: [
                ColorCode::RED,
                ColorCode::YELLOW,
                ColorCode::BLUE,
                ColorCode::GREEN,
            ],
            rainbow_name: ColorCode::GOLD,
            pickup: ColorCode::PURPLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_color_codes() {
        assert_eq!(ColorCode::GOLD.to_string(), "ÿc4");
        assert_eq!(ColorCode::PURPLE.to_string(), "ÿc;");
        assert_eq!(ColorCode::from_code('N'), ColorCode::TEAL);
    }

    #[test]
    fn font_colors_render_layout_references() {
        assert_eq!(FontColor::DarkGreen.to_string(), "$FontColorDarkGreen");
        assert_eq!(FontColor::from_name("Gold"), Some(FontColor::Gold));
        assert_eq!(FontColor::from_name("pink"), None);
    }

    #[test]
    fn sentinel_resolves_to_fallback() {
        let setting: ColorSetting<ColorCode> = ColorSetting::parse("goldColor", "default").unwrap();
        assert_eq!(setting.resolve(ColorCode::GOLD), ColorCode::GOLD);

        let setting: ColorSetting<ColorCode> = ColorSetting::parse("goldColor", "Orange").unwrap();
        assert_eq!(setting.resolve(ColorCode::GOLD), ColorCode::ORANGE);
    }

    #[test]
    fn require_rejects_sentinel() {
        let setting: ColorSetting<ColorCode> = ColorSetting::parse("runeNumberColor", "none").unwrap();
        assert_eq!(
            setting.require("runeNumberColor"),
            Err(ConfigError::MissingColor("runeNumberColor".into()))
        );
    }

    #[test]
    fn unknown_color_is_config_error() {
        let result: Result<ColorSetting<ColorCode>, _> = ColorSetting::parse("gemsColor", "mauve");
        assert!(matches!(result, Err(ConfigError::UnknownValue { .. })));
    }
}
