/// Decorative glyph runs placed around an item name
use crate::big_tooltip::BigTooltipSetting;
use crate::colors::{ColorCode, Palette};
use crate::config::{ConfigEnum, ConfigError};

/// Padding between a single glyph and the name.
pub const SINGLE_PADDING: usize = 1;
/// Padding between rainbow color runs and around the name.
pub const RAINBOW_PADDING: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightSize {
    Disabled,
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
}

impl HighlightSize {
    fn repeat(self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Small => 2,
            Self::Medium => 5,
            Self::Large => 10,
            Self::XLarge => 20,
            Self::XXLarge => 30,
        }
    }

    fn padding(self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Small => 2,
            Self::Medium => 3,
            Self::Large | Self::XLarge | Self::XXLarge => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HighlightPattern {
    #[default]
    None,
    Single {
        glyph: char,
        padding: String,
        color: Option<ColorCode>,
    },
    Double {
        size: HighlightSize,
        pattern: String,
        padding: String,
        color: Option<ColorCode>,
    },
    Rainbow {
        pattern: String,
        padding: String,
        colors: [ColorCode; 4],
        name_color: ColorCode,
    },
}

impl HighlightPattern {
    pub fn single(glyph: char, color: Option<ColorCode>) -> Self {
        Self::Single {
            glyph,
            padding: " ".repeat(SINGLE_PADDING),
            color,
        }
    }

    /// Symmetric glyph runs on both sides of the name.
    ///
    /// An xxlarge highlight does not fit next to a big tooltip: it is built
    /// as an uncolored xlarge highlight instead.
    pub fn double(
        size: HighlightSize,
        glyph: char,
        color: Option<ColorCode>,
        big_tooltip: BigTooltipSetting,
    ) -> Result<Self, ConfigError> {
        let (size, color) = match size {
            HighlightSize::Disabled => return Err(ConfigError::DisabledHighlight),
            HighlightSize::XXLarge if big_tooltip.is_enabled() => (HighlightSize::XLarge, None),
            size => (size, color),
        };

        Ok(Self::Double {
            size,
            pattern: glyph.to_string().repeat(size.repeat()),
            padding: " ".repeat(size.padding()),
            color,
        })
    }

    pub fn rainbow(glyph: char, palette: &Palette, big_tooltip: BigTooltipSetting) -> Self {
        let repeat = if big_tooltip.is_pickup_capable() { 3 } else { 5 };
        Self::Rainbow {
            pattern: glyph.to_string().repeat(repeat),
            padding: " ".repeat(RAINBOW_PADDING),
            colors: palette.rainbow,
            name_color: palette.rainbow_name,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::None => name.to_string(),
            Self::Single {
                glyph,
                padding,
                color,
            } => format!("{}{glyph}{padding}{name}", render(*color)),
            Self::Double {
                pattern,
                padding,
                color,
                ..
            } => {
                let color = render(*color);
                format!("{color}{pattern}{padding}{name}{padding}{pattern}{color}")
            }
            Self::Rainbow {
                pattern,
                padding,
                colors,
                name_color,
            } => {
                let last = colors.len() - 1;
                let mut out = String::new();
                for (index, color) in colors.iter().enumerate() {
                    out.push_str(&format!("{color}{pattern}"));
                    if index == last {
                        out.push_str(&format!("{name_color}{padding}"));
                    } else {
                        out.push_str(padding);
                    }
                }
                out.push_str(name);
                for color in colors.iter().rev() {
                    out.push_str(&format!("{padding}{color}{pattern}"));
                }
                out.push_str(&name_color.to_string());
                out
            }
        }
    }

    /// Width of the single glyph and its padding, as spaces.
    pub fn indent(&self) -> Option<String> {
        match self {
            Self::Single { padding, .. } => Some(" ".repeat(1 + padding.chars().count())),
            _ => None,
        }
    }
}

fn render(color: Option<ColorCode>) -> String {
    color.map(|color| color.to_string()).unwrap_or_default()
}

/// Highlight choice as written in the host config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightSetting {
    None,
    Single,
    Double(HighlightSize),
    Rainbow,
}

impl ConfigEnum for HighlightSetting {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("disabled", Self::None),
        ("single", Self::Single),
        ("small", Self::Double(HighlightSize::Small)),
        ("medium", Self::Double(HighlightSize::Medium)),
        ("large", Self::Double(HighlightSize::Large)),
        ("xlarge", Self::Double(HighlightSize::XLarge)),
        ("xxlarge", Self::Double(HighlightSize::XXLarge)),
        ("rainbow", Self::Rainbow),
    ];
}

impl HighlightSetting {
    pub fn build(
        self,
        glyph: char,
        color: Option<ColorCode>,
        big_tooltip: BigTooltipSetting,
        palette: &Palette,
    ) -> Result<HighlightPattern, ConfigError> {
        match self {
            Self::None => Ok(HighlightPattern::None),
            Self::Single => Ok(HighlightPattern::single(glyph, color)),
            Self::Double(size) => HighlightPattern::double(size, glyph, color, big_tooltip),
            Self::Rainbow => Ok(HighlightPattern::rainbow(glyph, palette, big_tooltip)),
        }
    }
}
