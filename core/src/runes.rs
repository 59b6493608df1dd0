//! The 33 runes and the four tiers they are styled by.

use crate::big_tooltip::BigTooltipSetting;
use crate::colors::ColorCode;
use crate::highlight::{HighlightSetting, HighlightSize};

pub const RUNE_COUNT: u8 = 33;

const RUNE_NAMES: [&str; RUNE_COUNT as usize] = [
    "El", "Eld", "Tir", "Nef", "Eth", "Ith", "Tal", "Ral", "Ort", "Thul", "Amn", "Sol", "Shael",
    "Dol", "Hel", "Io", "Lum", "Ko", "Fal", "Lem", "Pul", "Um", "Mal", "Ist", "Gul", "Vex", "Ohm",
    "Lo", "Sur", "Ber", "Jah", "Cham", "Zod",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rune {
    number: u8,
}

impl Rune {
    pub fn new(number: u8) -> Option<Self> {
        (1..=RUNE_COUNT).contains(&number).then_some(Self { number })
    }

    pub fn number(self) -> u8 {
        self.number
    }

    pub fn name(self) -> &'static str {
        RUNE_NAMES[usize::from(self.number - 1)]
    }

    /// Row key in the misc table and the rune string table.
    pub fn code(self) -> String {
        format!("r{:02}", self.number)
    }

    /// HD item model the light pillar is attached to.
    pub fn model_path(self) -> String {
        format!(
            "hd/items/misc/rune/{}_rune.json",
            self.name().to_ascii_lowercase()
        )
    }
}

pub fn all_runes() -> impl Iterator<Item = Rune> {
    (1..=RUNE_COUNT).map(|number| Rune { number })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneTier {
    Low,
    LowMid,
    Mid,
    High,
}

impl RuneTier {
    pub const ALL: [RuneTier; 4] = [Self::Low, Self::LowMid, Self::Mid, Self::High];

    pub fn runes(self) -> impl Iterator<Item = Rune> {
        all_runes().filter(move |rune| Self::of(*rune) == self)
    }

    // Ral (8) is promoted out of strict numeric order.
    pub fn of(rune: Rune) -> RuneTier {
        match rune.number {
            8 | 15..=19 => Self::LowMid,
            1..=14 => Self::Low,
            20..=25 => Self::Mid,
            _ => Self::High,
        }
    }

    /// Prefix of the tier's keys in the host config.
    pub fn config_prefix(self) -> &'static str {
        match self {
            Self::Low => "runesLow",
            Self::LowMid => "runesLowMid",
            Self::Mid => "runesMid",
            Self::High => "runesHigh",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuneTierSettings {
    pub tier: RuneTier,
    pub visible: bool,
    pub name_color: ColorCode,
    pub number_color: ColorCode,
    pub highlight: HighlightSetting,
    pub big_tooltip: BigTooltipSetting,
    pub light_pillar: bool,
    pub drop_sound: Option<String>,
}

impl RuneTierSettings {
    pub fn defaults(tier: RuneTier) -> Self {
        let (highlight, big_tooltip, light_pillar, drop_sound) = match tier {
            RuneTier::Low => (HighlightSetting::None, BigTooltipSetting::Disabled, false, None),
            RuneTier::LowMid => (HighlightSetting::Single, BigTooltipSetting::Disabled, false, None),
            RuneTier::Mid => (
                HighlightSetting::Double(HighlightSize::Medium),
                BigTooltipSetting::TwoLines,
                true,
                None,
            ),
            RuneTier::High => (
                HighlightSetting::Double(HighlightSize::XLarge),
                BigTooltipSetting::ThreeLines,
                true,
                None,
            ),
        };
        Self {
            tier,
            visible: true,
            name_color: ColorCode::ORANGE,
            number_color: ColorCode::PURPLE,
            highlight,
            big_tooltip,
            light_pillar,
            drop_sound,
        }
    }
}
