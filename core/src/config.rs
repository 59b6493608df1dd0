/// Host configuration and its strongly-typed projection
///
/// The mod manager hands over a flat `key -> bool | number | string` object.
/// `HostConfig` mirrors it field for field; `ModConfig::from_host` parses
/// every enum-as-string value once, so a broken configuration fails before
/// any file is touched.
use crate::big_tooltip::BigTooltipSetting;
use crate::collection::CustomOverride;
use crate::colors::{ColorCode, ColorSetting};
use crate::entry::DigitCount;
use crate::filters::{self, CategoryConfig};
use crate::highlight::HighlightSetting;
use crate::pipeline::{ComposeSettings, ItemLevelSettings};
use crate::quality::{BracketStyle, QualityTag, QualityTagStyle, TagPlacement};
use crate::runes::{RuneTier, RuneTierSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unrecognized value {value:?} for setting `{key}`")]
    UnknownValue { key: String, value: String },

    #[error("setting `{0}` needs a concrete color")]
    MissingColor(String),

    #[error("a disabled highlight cannot be built as a double highlight; use `none` instead")]
    DisabledHighlight,

    #[error("{0} is not specified yet and cannot be selected")]
    NotSpecified(String),

    #[error("item level digit count must be 0, 1 or 2, got {0}")]
    DigitCount(u32),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("failed to read config file: {0}")]
    Io(String),
}

impl ConfigError {
    pub fn unknown(key: &str, value: &str) -> Self {
        Self::UnknownValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Closed set of string values a setting accepts.
pub trait ConfigEnum: Sized + Copy + 'static {
    const VARIANTS: &'static [(&'static str, Self)];

    fn parse(key: &str, value: &str) -> Result<Self, ConfigError> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::VARIANTS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, variant)| *variant)
            .ok_or_else(|| ConfigError::unknown(key, value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostConfig {
    pub hidden_width: u32,
    pub highlight_glyph: String,
    pub big_tooltip_padding: u32,

    pub item_level_enabled: bool,
    pub item_level_fix_indent: bool,
    pub item_level_hide_on_big_tooltip: bool,
    pub item_level_digits: u32,
    pub item_level_color: String,

    pub gold_mode: String,
    pub gold_color: String,
    pub gold_suffix: String,
    pub buff_potions_mode: String,
    pub buff_potions_color: String,
    pub throwing_potions_mode: String,
    pub throwing_potions_color: String,
    pub scrolls_mode: String,
    pub scrolls_color: String,
    pub arrows_mode: String,
    pub arrows_color: String,
    pub keys_mode: String,
    pub keys_color: String,
    pub gems_mode: String,
    pub healing_potions_mode: String,

    pub rune_numbers: bool,
    pub runes_low_visible: bool,
    pub runes_low_name_color: String,
    pub runes_low_number_color: String,
    pub runes_low_highlight: String,
    pub runes_low_big_tooltip: String,
    pub runes_low_light_pillar: bool,
    pub runes_low_drop_sound: String,
    pub runes_low_mid_visible: bool,
    pub runes_low_mid_name_color: String,
    pub runes_low_mid_number_color: String,
    pub runes_low_mid_highlight: String,
    pub runes_low_mid_big_tooltip: String,
    pub runes_low_mid_light_pillar: bool,
    pub runes_low_mid_drop_sound: String,
    pub runes_mid_visible: bool,
    pub runes_mid_name_color: String,
    pub runes_mid_number_color: String,
    pub runes_mid_highlight: String,
    pub runes_mid_big_tooltip: String,
    pub runes_mid_light_pillar: bool,
    pub runes_mid_drop_sound: String,
    pub runes_high_visible: bool,
    pub runes_high_name_color: String,
    pub runes_high_number_color: String,
    pub runes_high_highlight: String,
    pub runes_high_big_tooltip: String,
    pub runes_high_light_pillar: bool,
    pub runes_high_drop_sound: String,

    pub quality_tag: String,
    pub quality_brackets: String,
    pub quality_placement: String,

    pub custom_overrides: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            hidden_width: 1,
            highlight_glyph: "*".into(),
            big_tooltip_padding: 0,

            item_level_enabled: false,
            item_level_fix_indent: true,
            item_level_hide_on_big_tooltip: true,
            item_level_digits: 2,
            item_level_color: "default".into(),

            gold_mode: "all".into(),
            gold_color: "default".into(),
            gold_suffix: "disabled".into(),
            buff_potions_mode: "all".into(),
            buff_potions_color: "default".into(),
            throwing_potions_mode: "all".into(),
            throwing_potions_color: "default".into(),
            scrolls_mode: "all".into(),
            scrolls_color: "default".into(),
            arrows_mode: "all".into(),
            arrows_color: "default".into(),
            keys_mode: "all".into(),
            keys_color: "default".into(),
            gems_mode: "all".into(),
            healing_potions_mode: "all".into(),

            rune_numbers: true,
            runes_low_visible: true,
            runes_low_name_color: "orange".into(),
            runes_low_number_color: "purple".into(),
            runes_low_highlight: "none".into(),
            runes_low_big_tooltip: "disabled".into(),
            runes_low_light_pillar: false,
            runes_low_drop_sound: String::new(),
            runes_low_mid_visible: true,
            runes_low_mid_name_color: "orange".into(),
            runes_low_mid_number_color: "purple".into(),
            runes_low_mid_highlight: "single".into(),
            runes_low_mid_big_tooltip: "disabled".into(),
            runes_low_mid_light_pillar: false,
            runes_low_mid_drop_sound: String::new(),
            runes_mid_visible: true,
            runes_mid_name_color: "orange".into(),
            runes_mid_number_color: "purple".into(),
            runes_mid_highlight: "medium".into(),
            runes_mid_big_tooltip: "2".into(),
            runes_mid_light_pillar: true,
            runes_mid_drop_sound: String::new(),
            runes_high_visible: true,
            runes_high_name_color: "orange".into(),
            runes_high_number_color: "purple".into(),
            runes_high_highlight: "xlarge".into(),
            runes_high_big_tooltip: "3".into(),
            runes_high_light_pillar: true,
            runes_high_drop_sound: String::new(),

            quality_tag: "disabled".into(),
            quality_brackets: "square".into(),
            quality_placement: "suffix".into(),

            custom_overrides: String::new(),
        }
    }
}

impl HostConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Flat fields of one rune tier.
    fn rune_tier(&self, tier: RuneTier) -> RuneTierFields<'_> {
        match tier {
            RuneTier::Low => RuneTierFields {
                visible: self.runes_low_visible,
                name_color: &self.runes_low_name_color,
                number_color: &self.runes_low_number_color,
                highlight: &self.runes_low_highlight,
                big_tooltip: &self.runes_low_big_tooltip,
                light_pillar: self.runes_low_light_pillar,
                drop_sound: &self.runes_low_drop_sound,
            },
            RuneTier::LowMid => RuneTierFields {
                visible: self.runes_low_mid_visible,
                name_color: &self.runes_low_mid_name_color,
                number_color: &self.runes_low_mid_number_color,
                highlight: &self.runes_low_mid_highlight,
                big_tooltip: &self.runes_low_mid_big_tooltip,
                light_pillar: self.runes_low_mid_light_pillar,
                drop_sound: &self.runes_low_mid_drop_sound,
            },
            RuneTier::Mid => RuneTierFields {
                visible: self.runes_mid_visible,
                name_color: &self.runes_mid_name_color,
                number_color: &self.runes_mid_number_color,
                highlight: &self.runes_mid_highlight,
                big_tooltip: &self.runes_mid_big_tooltip,
                light_pillar: self.runes_mid_light_pillar,
                drop_sound: &self.runes_mid_drop_sound,
            },
            RuneTier::High => RuneTierFields {
                visible: self.runes_high_visible,
                name_color: &self.runes_high_name_color,
                number_color: &self.runes_high_number_color,
                highlight: &self.runes_high_highlight,
                big_tooltip: &self.runes_high_big_tooltip,
                light_pillar: self.runes_high_light_pillar,
                drop_sound: &self.runes_high_drop_sound,
            },
        }
    }
}

struct RuneTierFields<'a> {
    visible: bool,
    name_color: &'a str,
    number_color: &'a str,
    highlight: &'a str,
    big_tooltip: &'a str,
    light_pillar: bool,
    drop_sound: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuneConfig {
    pub show_numbers: bool,
    pub tiers: Vec<RuneTierSettings>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModConfig {
    pub compose: ComposeSettings,
    pub highlight_glyph: char,
    pub item_level_color: ColorCode,
    pub gold: filters::gold::GoldConfig,
    pub buff_potions: CategoryConfig<filters::potions::BuffPotionsMode>,
    pub throwing_potions: CategoryConfig<filters::potions::ThrowingPotionsMode>,
    pub healing_potions: filters::potions::HealingPotionsMode,
    pub scrolls: CategoryConfig<filters::scrolls::ScrollsMode>,
    pub arrows: CategoryConfig<filters::ammo::AmmoMode>,
    pub keys: CategoryConfig<filters::keys::KeysMode>,
    pub gems: filters::gems::GemsMode,
    pub runes: RuneConfig,
    pub quality_tag: Option<QualityTag>,
    pub custom_overrides: Vec<CustomOverride>,
}

impl ModConfig {
    pub fn from_host(host: &HostConfig) -> Result<Self, ConfigError> {
        let highlight_glyph = single_char("highlightGlyph", &host.highlight_glyph)?;

        let compose = ComposeSettings {
            hidden_width: host.hidden_width as usize,
            big_tooltip_padding: host.big_tooltip_padding as usize,
            item_level: ItemLevelSettings {
                enabled: host.item_level_enabled,
                fix_indent: host.item_level_fix_indent,
                hide_on_big_tooltip: host.item_level_hide_on_big_tooltip,
                digits: DigitCount::from_count(host.item_level_digits)?,
            },
            ..ComposeSettings::default()
        };

        let gold = filters::gold::GoldConfig {
            mode: ConfigEnum::parse("goldMode", &host.gold_mode)?,
            suffix: ConfigEnum::parse("goldSuffix", &host.gold_suffix)?,
            color: color("goldColor", &host.gold_color, filters::gold::DEFAULT_COLOR)?,
        };

        let runes = RuneConfig {
            show_numbers: host.rune_numbers,
            tiers: RuneTier::ALL
                .into_iter()
                .map(|tier| rune_tier(host, tier))
                .collect::<Result<_, _>>()?,
        };

        let quality_tag = QualityTagStyle::parse("qualityTag", &host.quality_tag)?.build(
            BracketStyle::parse("qualityBrackets", &host.quality_brackets)?,
            TagPlacement::parse("qualityPlacement", &host.quality_placement)?,
        )?;

        Ok(Self {
            compose,
            highlight_glyph,
            item_level_color: color(
                "itemLevelColor",
                &host.item_level_color,
                filters::item_level::DEFAULT_COLOR,
            )?,
            gold,
            buff_potions: CategoryConfig {
                mode: ConfigEnum::parse("buffPotionsMode", &host.buff_potions_mode)?,
                color: color(
                    "buffPotionsColor",
                    &host.buff_potions_color,
                    filters::potions::BUFF_COLOR,
                )?,
            },
            throwing_potions: CategoryConfig {
                mode: ConfigEnum::parse("throwingPotionsMode", &host.throwing_potions_mode)?,
                color: color(
                    "throwingPotionsColor",
                    &host.throwing_potions_color,
                    filters::potions::THROWING_COLOR,
                )?,
            },
            healing_potions: ConfigEnum::parse("healingPotionsMode", &host.healing_potions_mode)?,
            scrolls: CategoryConfig {
                mode: ConfigEnum::parse("scrollsMode", &host.scrolls_mode)?,
                color: color("scrollsColor", &host.scrolls_color, filters::scrolls::DEFAULT_COLOR)?,
            },
            arrows: CategoryConfig {
                mode: ConfigEnum::parse("arrowsMode", &host.arrows_mode)?,
                color: color("arrowsColor", &host.arrows_color, filters::ammo::DEFAULT_COLOR)?,
            },
            keys: CategoryConfig {
                mode: ConfigEnum::parse("keysMode", &host.keys_mode)?,
                color: color("keysColor", &host.keys_color, filters::keys::DEFAULT_COLOR)?,
            },
            gems: ConfigEnum::parse("gemsMode", &host.gems_mode)?,
            runes,
            quality_tag,
            custom_overrides: filters::custom::parse_overrides(&host.custom_overrides)?,
        })
    }
}

fn rune_tier(host: &HostConfig, tier: RuneTier) -> Result<RuneTierSettings, ConfigError> {
    let prefix = tier.config_prefix();
    let fields = host.rune_tier(tier);
    let defaults = RuneTierSettings::defaults(tier);
    let key = |suffix: &str| format!("{prefix}{suffix}");

    let big_tooltip =
        BigTooltipSetting::parse(&key("BigTooltip"), fields.big_tooltip)?.selectable(&key("BigTooltip"))?;
    let drop_sound = match fields.drop_sound.trim() {
        "" => None,
        sound => Some(sound.to_string()),
    };

    Ok(RuneTierSettings {
        tier,
        visible: fields.visible,
        name_color: color(&key("NameColor"), fields.name_color, defaults.name_color)?,
        number_color: ColorSetting::parse(&key("NumberColor"), fields.number_color)?
            .require(&key("NumberColor"))?,
        highlight: HighlightSetting::parse(&key("Highlight"), fields.highlight)?,
        big_tooltip,
        light_pillar: fields.light_pillar,
        drop_sound,
    })
}

fn color(key: &str, value: &str, fallback: ColorCode) -> Result<ColorCode, ConfigError> {
    Ok(ColorSetting::parse(key, value)?.resolve(fallback))
}

fn single_char(key: &str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => Ok(glyph),
        _ => Err(ConfigError::unknown(key, value)),
    }
}
