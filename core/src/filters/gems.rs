/// Gems and skulls, five grades each
use crate::collection::EntryCollection;
use crate::colors::ColorCode;
use crate::config::{ConfigEnum, ConfigError, ModConfig};
use crate::entry::ItemEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GemGrade {
    Chipped,
    Flawed,
    Regular,
    Flawless,
    Perfect,
}

impl GemGrade {
    pub const ALL: [GemGrade; 5] = [
        Self::Chipped,
        Self::Flawed,
        Self::Regular,
        Self::Flawless,
        Self::Perfect,
    ];
}

pub struct GemFamily {
    pub name: &'static str,
    pub color: ColorCode,
    /// Keys ordered chipped to perfect.
    pub keys: [&'static str; 5],
}

pub const GEM_FAMILIES: [GemFamily; 7] = [
    GemFamily {
        name: "amethyst",
        color: ColorCode::PURPLE,
        keys: ["gcv", "gfv", "gsv", "gzv", "gpv"],
    },
    GemFamily {
        name: "topaz",
        color: ColorCode::YELLOW,
        keys: ["gcy", "gfy", "gsy", "gly", "gpy"],
    },
    GemFamily {
        name: "sapphire",
        color: ColorCode::BLUE,
        keys: ["gcb", "gfb", "gsb", "glb", "gpb"],
    },
    GemFamily {
        name: "emerald",
        color: ColorCode::GREEN,
        keys: ["gcg", "gfg", "gsg", "glg", "gpg"],
    },
    GemFamily {
        name: "ruby",
        color: ColorCode::RED,
        keys: ["gcr", "gfr", "gsr", "glr", "gpr"],
    },
    GemFamily {
        name: "diamond",
        color: ColorCode::WHITE,
        keys: ["gcw", "gfw", "gsw", "glw", "gpw"],
    },
    GemFamily {
        name: "skull",
        color: ColorCode::GRAY,
        keys: ["skc", "skf", "sku", "skl", "skz"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GemsMode {
    Disabled,
    All,
    /// Only flawless and perfect stay visible.
    Flawless,
    /// Only perfect stays visible.
    Perfect,
    Hide,
}

impl ConfigEnum for GemsMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("all", Self::All),
        ("flawless", Self::Flawless),
        ("perfect", Self::Perfect),
        ("hide", Self::Hide),
    ];
}

impl GemsMode {
    /// Lowest grade left visible, `None` when every grade is hidden.
    fn lowest_visible(self) -> Option<GemGrade> {
        match self {
            Self::Disabled | Self::All => Some(GemGrade::Chipped),
            Self::Flawless => Some(GemGrade::Flawless),
            Self::Perfect => Some(GemGrade::Perfect),
            Self::Hide => None,
        }
    }
}

pub fn compose(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let mode = config.gems;
    let mut collection = EntryCollection::new();
    if mode == GemsMode::Disabled {
        return Ok(collection);
    }

    let lowest = mode.lowest_visible();
    for family in &GEM_FAMILIES {
        for (grade, key) in GemGrade::ALL.into_iter().zip(family.keys) {
            match lowest {
                Some(lowest) if grade >= lowest => {
                    collection.upsert(ItemEntry::new(key).colored(family.color));
                }
                _ => collection.hide(key),
            }
        }
    }

    Ok(collection)
}
