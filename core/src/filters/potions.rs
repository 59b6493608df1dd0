/// Buff, throwing and healing potions
use super::{colored, hidden};
use crate::collection::EntryCollection;
use crate::colors::ColorCode;
use crate::config::{ConfigEnum, ConfigError, ModConfig};
use crate::entry::ItemEntry;

pub const BUFF_COLOR: ColorCode = ColorCode::TEAL;
pub const THROWING_COLOR: ColorCode = ColorCode::DARK_GREEN;
pub const HEALING_COLOR: ColorCode = ColorCode::RED;
pub const MANA_COLOR: ColorCode = ColorCode::BLUE;
pub const REJUVENATION_COLOR: ColorCode = ColorCode::PURPLE;

/// Stamina, thawing and antidote potions.
pub const BUFF_POTIONS: [&str; 3] = ["vps", "wms", "yps"];
/// Gas and oil potions, large to small.
pub const THROWING_POTIONS: [&str; 6] = ["gpl", "gpm", "gps", "opl", "opm", "ops"];
pub const HEALING_POTIONS: [&str; 5] = ["hp1", "hp2", "hp3", "hp4", "hp5"];
pub const MANA_POTIONS: [&str; 5] = ["mp1", "mp2", "mp3", "mp4", "mp5"];
const REJUVENATION_POTIONS: [(&str, &str); 2] = [("rvs", "Rejuv"), ("rvl", "Full Rejuv")];

/// Grades 1 to 3 are hidden by `HideSmall`.
const SMALL_GRADES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuffPotionsMode {
    Disabled,
    All,
    Hide,
}

impl ConfigEnum for BuffPotionsMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("all", Self::All),
        ("hide", Self::Hide),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowingPotionsMode {
    Disabled,
    All,
    Hide,
}

impl ConfigEnum for ThrowingPotionsMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("all", Self::All),
        ("hide", Self::Hide),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealingPotionsMode {
    Disabled,
    /// Short names (`HP4`, `MP5`, `Rejuv`) in their potion color.
    All,
    /// As `All`, with grades 1 to 3 hidden.
    HideSmall,
    /// Hide every healing and mana potion; rejuvenation potions stay.
    Hide,
}

impl ConfigEnum for HealingPotionsMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("all", Self::All),
        ("hide-small", Self::HideSmall),
        ("hide", Self::Hide),
    ];
}

pub fn compose_buff(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let category = &config.buff_potions;
    Ok(match category.mode {
        BuffPotionsMode::Disabled => EntryCollection::new(),
        BuffPotionsMode::All => colored(&BUFF_POTIONS, category.color),
        BuffPotionsMode::Hide => hidden(&BUFF_POTIONS),
    })
}

pub fn compose_throwing(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let category = &config.throwing_potions;
    Ok(match category.mode {
        ThrowingPotionsMode::Disabled => EntryCollection::new(),
        ThrowingPotionsMode::All => colored(&THROWING_POTIONS, category.color),
        ThrowingPotionsMode::Hide => hidden(&THROWING_POTIONS),
    })
}

pub fn compose_healing(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let mode = config.healing_potions;
    let mut collection = EntryCollection::new();
    if mode == HealingPotionsMode::Disabled {
        return Ok(collection);
    }

    for (key, name) in REJUVENATION_POTIONS {
        collection.upsert(ItemEntry::new(key).named(name).colored(REJUVENATION_COLOR));
    }

    for (family, prefix, color) in [
        (&HEALING_POTIONS, "HP", HEALING_COLOR),
        (&MANA_POTIONS, "MP", MANA_COLOR),
    ] {
        for (grade, key) in family.iter().enumerate() {
            let entry = ItemEntry::new(*key)
                .named(format!("{prefix}{}", grade + 1))
                .colored(color);
            collection.upsert(entry);

            let hide = match mode {
                HealingPotionsMode::Hide => true,
                HealingPotionsMode::HideSmall => grade < SMALL_GRADES,
                _ => false,
            };
            if hide {
                collection.hide(key);
            }
        }
    }

    Ok(collection)
}
