/// Decoration rules for one string table key
use crate::big_tooltip::BigTooltipSetting;
use crate::colors::ColorCode;
use crate::config::ConfigError;
use crate::highlight::HighlightPattern;
use crate::quality::{EquipmentQuality, QualityTag};

/// Digits of the item level the game appends after a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitCount {
    None,
    Single,
    Double,
}

impl DigitCount {
    pub fn from_count(count: u32) -> Result<Self, ConfigError> {
        match count {
            0 => Ok(Self::None),
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            other => Err(ConfigError::DigitCount(other)),
        }
    }

    /// Leading spaces that balance the appended ` N` / ` NN`.
    pub fn indent(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Single => "  ",
            Self::Double => "   ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Plain,
    /// Items whose tooltip shows their item level.
    ItemLevel,
    Rune {
        number: u8,
        number_color: ColorCode,
        show_number: bool,
    },
    Equipment {
        quality: EquipmentQuality,
        tag: QualityTag,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub key: String,
    pub kind: EntryKind,
    pub visible: bool,
    pub name: Option<String>,
    pub name_color: Option<ColorCode>,
    pub highlight: HighlightPattern,
    pub big_tooltip: BigTooltipSetting,
}

impl ItemEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: EntryKind::Plain,
            visible: true,
            name: None,
            name_color: None,
            highlight: HighlightPattern::None,
            big_tooltip: BigTooltipSetting::Disabled,
        }
    }

    /// Fresh entry that only hides its key.
    pub fn hidden(key: impl Into<String>) -> Self {
        Self {
            visible: false,
            ..Self::new(key)
        }
    }

    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn colored(mut self, color: ColorCode) -> Self {
        self.name_color = Some(color);
        self
    }

    pub fn highlighted(mut self, highlight: HighlightPattern) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_big_tooltip(mut self, setting: BigTooltipSetting) -> Self {
        self.big_tooltip = setting;
        self
    }
}
