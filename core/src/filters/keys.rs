/// Regular keys and the three uber keys
use crate::collection::EntryCollection;
use crate::colors::ColorCode;
use crate::config::{ConfigEnum, ConfigError, ModConfig};
use crate::entry::ItemEntry;
use crate::highlight::HighlightPattern;

pub const DEFAULT_COLOR: ColorCode = ColorCode::ORANGE;
pub const KEY: &str = "key";
/// Terror, Hate and Destruction.
pub const UBER_KEYS: [&str; 3] = ["pk1", "pk2", "pk3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeysMode {
    Disabled,
    All,
    /// Hide the regular key; uber keys keep their highlight.
    Hide,
}

impl ConfigEnum for KeysMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("all", Self::All),
        ("hide", Self::Hide),
    ];
}

pub fn compose(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let category = &config.keys;
    let mut collection = EntryCollection::new();
    if category.mode == KeysMode::Disabled {
        return Ok(collection);
    }

    let highlight = HighlightPattern::single(config.highlight_glyph, Some(category.color));
    for key in UBER_KEYS {
        collection.upsert(
            ItemEntry::new(key)
                .colored(category.color)
                .highlighted(highlight.clone()),
        );
    }

    match category.mode {
        KeysMode::Hide => collection.hide(KEY),
        _ => {
            collection.upsert(ItemEntry::new(KEY).colored(category.color));
        }
    }

    Ok(collection)
}
