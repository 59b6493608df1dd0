/// Big tooltips: blank lines around a name to make its label taller
///
/// The tooltip renderer stacks lines bottom-up, so a trailing `\n` shows up
/// as a blank line *above* the name. The layouts below are written against
/// that behaviour.
use crate::colors::ColorCode;
use crate::config::{ConfigEnum, ConfigError};
use crate::highlight::HighlightPattern;

pub const PICKUP_TEXT: &str = "Pick Up";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BigTooltipSetting {
    #[default]
    Disabled,
    TwoLines,
    TwoLinesPickup,
    ThreeLines,
    FourLinesPickup,
    FiveLines,
    /// Reserved; its layout has not been defined.
    Custom,
}

impl ConfigEnum for BigTooltipSetting {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("2", Self::TwoLines),
        ("2-pickup", Self::TwoLinesPickup),
        ("3", Self::ThreeLines),
        ("4-pickup", Self::FourLinesPickup),
        ("5", Self::FiveLines),
        ("custom", Self::Custom),
    ];
}

impl BigTooltipSetting {
    pub fn is_enabled(self) -> bool {
        self != Self::Disabled
    }

    pub fn is_pickup_capable(self) -> bool {
        matches!(self, Self::TwoLinesPickup | Self::FourLinesPickup)
    }

    /// Reject the reserved `custom` level.
    pub fn selectable(self, key: &str) -> Result<Self, ConfigError> {
        match self {
            Self::Custom => Err(ConfigError::NotSpecified(format!("{key} = custom"))),
            setting => Ok(setting),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigTooltip {
    padding: String,
    pickup_color: ColorCode,
}

impl BigTooltip {
    pub fn new(padding: usize, pickup_color: ColorCode) -> Self {
        Self {
            padding: " ".repeat(padding),
            pickup_color,
        }
    }

    pub fn apply(
        &self,
        setting: BigTooltipSetting,
        name: &str,
        highlight: &HighlightPattern,
    ) -> String {
        let body = format!("{pad}{name}{pad}", pad = self.padding);
        match setting {
            BigTooltipSetting::Disabled | BigTooltipSetting::Custom => name.to_string(),
            BigTooltipSetting::TwoLines => format!("{body}\n"),
            BigTooltipSetting::TwoLinesPickup => {
                format!("{body}\n{}", self.pickup_line(highlight))
            }
            BigTooltipSetting::ThreeLines => format!("\n{body}\n"),
            BigTooltipSetting::FourLinesPickup => {
                format!("\n{body}\n{}\n", self.pickup_line(highlight))
            }
            BigTooltipSetting::FiveLines => format!("\n\n{body}\n\n"),
        }
    }

    fn pickup_line(&self, highlight: &HighlightPattern) -> String {
        let indent = highlight.indent().unwrap_or_default();
        format!("{indent}{}{PICKUP_TEXT}", self.pickup_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::HighlightSize;
    use pretty_assertions::assert_eq;

    fn tooltip() -> BigTooltip {
        BigTooltip::new(0, ColorCode::PURPLE)
    }

    #[test]
    fn disabled_is_identity() {
        let out = tooltip().apply(BigTooltipSetting::Disabled, "X", &HighlightPattern::None);
        assert_eq!(out, "X");
    }

    #[test]
    fn three_lines_wraps_both_sides() {
        let out = tooltip().apply(BigTooltipSetting::ThreeLines, "X", &HighlightPattern::None);
        assert_eq!(out, "\nX\n");
    }

    #[test]
    fn two_lines_appends_newline() {
        let out = BigTooltip::new(2, ColorCode::PURPLE).apply(
            BigTooltipSetting::TwoLines,
            "X",
            &HighlightPattern::None,
        );
        assert_eq!(out, "  X  \n");
    }

    #[test]
    fn five_lines_doubles_newlines() {
        let out = tooltip().apply(BigTooltipSetting::FiveLines, "X", &HighlightPattern::None);
        assert_eq!(out, "\n\nX\n\n");
    }

    #[test]
    fn pickup_line_aligns_under_single_glyph() {
        let highlight = HighlightPattern::single('*', None);
        let out = tooltip().apply(BigTooltipSetting::TwoLinesPickup, "* X", &highlight);
        assert_eq!(out, "* X\n  ÿc;Pick Up");
    }

    #[test]
    fn pickup_line_has_no_indent_for_double_highlight() {
        let highlight = HighlightPattern::double(
            HighlightSize::Small,
            '*',
            None,
            BigTooltipSetting::FourLinesPickup,
        )
        .unwrap();
        let out = tooltip().apply(BigTooltipSetting::FourLinesPickup, "X", &highlight);
        assert_eq!(out, "\nX\nÿc;Pick Up\n");
    }

    #[test]
    fn custom_cannot_be_selected() {
        let setting = BigTooltipSetting::parse("runesHighBigTooltip", "custom").unwrap();
        assert_eq!(setting, BigTooltipSetting::Custom);
        assert!(matches!(
            setting.selectable("runesHighBigTooltip"),
            Err(ConfigError::NotSpecified(_))
        ));
        assert_eq!(
            BigTooltipSetting::ThreeLines.selectable("runesHighBigTooltip"),
            Ok(BigTooltipSetting::ThreeLines)
        );
    }

    #[test]
    fn pickup_capability() {
        assert!(BigTooltipSetting::TwoLinesPickup.is_pickup_capable());
        assert!(BigTooltipSetting::FourLinesPickup.is_pickup_capable());
        assert!(!BigTooltipSetting::FiveLines.is_pickup_capable());
        assert!(!BigTooltipSetting::Disabled.is_enabled());
    }
}
