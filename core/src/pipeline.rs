use crate::big_tooltip::BigTooltip;
use crate::collapse::collapse;
use crate::colors::Palette;
use crate::entry::{DigitCount, EntryKind, ItemEntry};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLevelSettings {
    pub enabled: bool,
    pub fix_indent: bool,
    pub hide_on_big_tooltip: bool,
    pub digits: DigitCount,
}

impl Default for ItemLevelSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            fix_indent: true,
            hide_on_big_tooltip: true,
            digits: DigitCount::Double,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeSettings {
    /// Number of spaces a hidden item's name is replaced with.
    pub hidden_width: usize,
    pub big_tooltip_padding: usize,
    pub item_level: ItemLevelSettings,
    pub palette: Palette,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            hidden_width: 1,
            big_tooltip_padding: 0,
            item_level: ItemLevelSettings::default(),
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    HiddenCheck,
    NameSubstitution,
    NameColor,
    Highlight,
    ItemLevelIndent,
    RuneNumber,
    QualityTag,
    ItemLevelColorReset,
    BigTooltip,
    CollapseColors,
}

/// Stages in the order they run.
pub const STAGES: [Stage; 10] = [
    Stage::HiddenCheck,
    Stage::NameSubstitution,
    Stage::NameColor,
    Stage::Highlight,
    Stage::ItemLevelIndent,
    Stage::RuneNumber,
    Stage::QualityTag,
    Stage::ItemLevelColorReset,
    Stage::BigTooltip,
    Stage::CollapseColors,
];

impl Stage {
    pub fn applies_to(self, kind: &EntryKind) -> bool {
        match self {
            Self::ItemLevelIndent | Self::ItemLevelColorReset => {
                matches!(kind, EntryKind::ItemLevel)
            }
            Self::RuneNumber => matches!(kind, EntryKind::Rune { .. }),
            Self::QualityTag => matches!(kind, EntryKind::Equipment { .. }),
            _ => true,
        }
    }
}

/// Turns a localized name plus an entry's rules into the string written back.
#[derive(Debug, Clone)]
pub struct DisplayNameComposer {
    settings: ComposeSettings,
    hidden: String,
    big_tooltip: BigTooltip,
}

impl DisplayNameComposer {
    pub fn new(settings: ComposeSettings) -> Self {
        let hidden = " ".repeat(settings.hidden_width);
        let big_tooltip = BigTooltip::new(settings.big_tooltip_padding, settings.palette.pickup);
        Self {
            settings,
            hidden,
            big_tooltip,
        }
    }

    pub fn hidden_placeholder(&self) -> &str {
        &self.hidden
    }

    pub fn compose(&self, entry: &ItemEntry, source: &str) -> String {
        if !entry.visible {
            return self.hidden.clone();
        }

        STAGES
            .iter()
            .filter(|stage| stage.applies_to(&entry.kind))
            .fold(source.to_string(), |text, stage| self.run_stage(*stage, entry, text))
    }

    fn run_stage(&self, stage: Stage, entry: &ItemEntry, text: String) -> String {
        match stage {
            Stage::HiddenCheck => text,
            Stage::NameSubstitution => match entry.name.as_deref() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => text,
            },
            Stage::NameColor => format!("{}{text}", render_color(entry)),
            Stage::Highlight => entry.highlight.apply(&text),
            Stage::ItemLevelIndent => {
                if self.item_level_indent_active(entry) {
                    format!("{}{text}", self.settings.item_level.digits.indent())
                } else {
                    text
                }
            }
            Stage::RuneNumber => match &entry.kind {
                EntryKind::Rune {
                    number,
                    number_color,
                    show_number: true,
                } => format!("{text} {number_color}({number})"),
                _ => text,
            },
            Stage::QualityTag => match &entry.kind {
                EntryKind::Equipment { quality, tag } => tag.apply(&text, *quality),
                _ => text,
            },
            Stage::ItemLevelColorReset => format!("{text}{}", render_color(entry)),
            Stage::BigTooltip => self
                .big_tooltip
                .apply(entry.big_tooltip, &text, &entry.highlight),
            Stage::CollapseColors => collapse(&text, None),
        }
    }

    fn item_level_indent_active(&self, entry: &ItemEntry) -> bool {
        let settings = &self.settings.item_level;
        settings.enabled
            && settings.fix_indent
            && !(settings.hide_on_big_tooltip && entry.big_tooltip.is_enabled())
    }
}

fn render_color(entry: &ItemEntry) -> String {
    entry
        .name_color
        .map(|color| color.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::big_tooltip::BigTooltipSetting;
    use crate::colors::ColorCode;
    use crate::highlight::{HighlightPattern, HighlightSize};
    use crate::quality::{BracketStyle, EquipmentQuality, QualityTag, TagPlacement};
    use pretty_assertions::assert_eq;

    fn composer() -> DisplayNameComposer {
        DisplayNameComposer::new(ComposeSettings::default())
    }

    fn item_level_composer(hide_on_big_tooltip: bool) -> DisplayNameComposer {
        DisplayNameComposer::new(ComposeSettings {
            item_level: ItemLevelSettings {
                enabled: true,
                fix_indent: true,
                hide_on_big_tooltip,
                digits: DigitCount::Double,
            },
            ..ComposeSettings::default()
        })
    }

    #[test]
    fn plain_gold_entry() {
        let entry = ItemEntry::new("gld").colored(ColorCode::GOLD);
        let out = composer().compose(&entry, "Gold");
        assert_eq!(out, "ÿc4Gold");
        assert_eq!(collapse(&out, None), out);
    }

    #[test]
    fn hidden_entry_ignores_other_fields() {
        let entry = ItemEntry::new("isc")
            .named("ID")
            .colored(ColorCode::RED)
            .highlighted(HighlightPattern::single('*', None))
            .with_big_tooltip(BigTooltipSetting::FiveLines);
        let entry = ItemEntry {
            visible: false,
            ..entry
        };
        let composer = DisplayNameComposer::new(ComposeSettings {
            hidden_width: 3,
            ..ComposeSettings::default()
        });
        assert_eq!(composer.compose(&entry, "Scroll of Identify"), "   ");
    }

    #[test]
    fn empty_replacement_keeps_source() {
        let entry = ItemEntry::new("key").named("");
        assert_eq!(composer().compose(&entry, "Key"), "Key");
    }

    #[test]
    fn rune_entry_appends_number() {
        let entry = ItemEntry::new("r30")
            .with_kind(EntryKind::Rune {
                number: 30,
                number_color: ColorCode::PURPLE,
                show_number: true,
            })
            .colored(ColorCode::ORANGE)
            .highlighted(
                HighlightPattern::double(
                    HighlightSize::Small,
                    '*',
                    Some(ColorCode::ORANGE),
                    BigTooltipSetting::ThreeLines,
                )
                .unwrap(),
            )
            .with_big_tooltip(BigTooltipSetting::ThreeLines);
        let out = composer().compose(&entry, "Ber Rune");
        // Repeated orange codes collapse into the first one.
        assert_eq!(out, "\nÿc8**  Ber Rune  ** ÿc;(30)\n");
    }

    #[test]
    fn rune_number_can_be_disabled() {
        let entry = ItemEntry::new("r01")
            .with_kind(EntryKind::Rune {
                number: 1,
                number_color: ColorCode::PURPLE,
                show_number: false,
            })
            .colored(ColorCode::ORANGE);
        assert_eq!(composer().compose(&entry, "El Rune"), "ÿc8El Rune");
    }

    #[test]
    fn equipment_entry_gets_quality_tag() {
        let entry = ItemEntry::new("uap").with_kind(EntryKind::Equipment {
            quality: EquipmentQuality::Elite,
            tag: QualityTag::Single {
                brackets: BracketStyle::Square,
                placement: TagPlacement::Suffix,
            },
        });
        assert_eq!(composer().compose(&entry, "Shako"), "Shako [e]");
    }

    #[test]
    fn item_level_entry_indents_and_resets_color() {
        let entry = ItemEntry::new("rin")
            .with_kind(EntryKind::ItemLevel)
            .colored(ColorCode::WHITE);
        let out = item_level_composer(true).compose(&entry, "Ring");
        assert_eq!(out, "   ÿc0Ring");
    }

    #[test]
    fn item_level_reset_survives_inline_codes() {
        let entry = ItemEntry::new("amu")
            .with_kind(EntryKind::ItemLevel)
            .colored(ColorCode::WHITE)
            .highlighted(
                HighlightPattern::double(
                    HighlightSize::Small,
                    '+',
                    Some(ColorCode::RED),
                    BigTooltipSetting::Disabled,
                )
                .unwrap(),
            );
        let out = item_level_composer(true).compose(&entry, "Amulet");
        assert_eq!(out, "   ÿc1++  ÿc0Amulet  ++ÿc1ÿc0");
    }

    #[test]
    fn item_level_indent_skipped_with_big_tooltip() {
        let entry = ItemEntry::new("jew")
            .with_kind(EntryKind::ItemLevel)
            .colored(ColorCode::BLUE)
            .with_big_tooltip(BigTooltipSetting::TwoLines);
        assert_eq!(item_level_composer(true).compose(&entry, "Jewel"), "ÿc3Jewel\n");
        assert_eq!(item_level_composer(false).compose(&entry, "Jewel"), "   ÿc3Jewel\n");
    }

    #[test]
    fn item_level_indent_off_when_feature_disabled() {
        let entry = ItemEntry::new("cm1")
            .with_kind(EntryKind::ItemLevel)
            .colored(ColorCode::WHITE);
        assert_eq!(composer().compose(&entry, "Small Charm"), "ÿc0Small Charm");
    }

    #[test]
    fn plain_entry_skips_kind_stages() {
        assert!(!Stage::RuneNumber.applies_to(&EntryKind::Plain));
        assert!(!Stage::QualityTag.applies_to(&EntryKind::Plain));
        assert!(!Stage::ItemLevelIndent.applies_to(&EntryKind::Plain));
        assert!(Stage::BigTooltip.applies_to(&EntryKind::Plain));
    }
}
