/// Gold piles
use crate::collection::EntryCollection;
use crate::colors::ColorCode;
use crate::config::{ConfigEnum, ConfigError, ModConfig};
use crate::entry::ItemEntry;

pub const GOLD_KEY: &str = "gld";
pub const DEFAULT_COLOR: ColorCode = ColorCode::GOLD;
/// Replacement name when the short suffix is on; the amount is printed by the game.
pub const SHORT_NAME: &str = "G";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldMode {
    Disabled,
    All,
    Hide,
}

impl ConfigEnum for GoldMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("all", Self::All),
        ("hide", Self::Hide),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldSuffix {
    Disabled,
    Short,
}

impl ConfigEnum for GoldSuffix {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("short", Self::Short),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldConfig {
    pub mode: GoldMode,
    pub suffix: GoldSuffix,
    pub color: ColorCode,
}

pub fn compose(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let gold = &config.gold;
    let mut collection = EntryCollection::new();

    match gold.mode {
        GoldMode::Disabled => {}
        GoldMode::All => {
            let mut entry = ItemEntry::new(GOLD_KEY).colored(gold.color);
            if gold.suffix == GoldSuffix::Short {
                entry = entry.named(SHORT_NAME);
            }
            collection.upsert(entry);
        }
        GoldMode::Hide => collection.hide(GOLD_KEY),
    }

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfig;

    fn compose_with(mode: &str, suffix: &str) -> EntryCollection {
        let host = HostConfig {
            gold_mode: mode.into(),
            gold_suffix: suffix.into(),
            ..HostConfig::default()
        };
        compose(&ModConfig::from_host(&host).unwrap()).unwrap()
    }

    #[test]
    fn all_colors_gold() {
        let collection = compose_with("all", "disabled");
        let entry = collection.get(GOLD_KEY).unwrap();
        assert_eq!(entry.name_color, Some(ColorCode::GOLD));
        assert!(entry.name.is_none());
    }

    #[test]
    fn short_suffix_renames() {
        let collection = compose_with("all", "short");
        assert_eq!(collection.get(GOLD_KEY).unwrap().name.as_deref(), Some("G"));
    }

    #[test]
    fn hide_and_disabled() {
        assert!(!compose_with("hide", "short").get(GOLD_KEY).unwrap().visible);
        assert!(compose_with("disabled", "short").is_empty());
    }
}
