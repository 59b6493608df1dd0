/// Per-category composers
///
/// Each composer is a pure function of the typed config that returns the
/// entries for one string table. `compose_all` folds them per table; the
/// user's override list is applied last and always wins.
pub mod ammo;
pub mod custom;
pub mod equipment;
pub mod gems;
pub mod gold;
pub mod item_level;
pub mod keys;
pub mod potions;
pub mod runes;
pub mod scrolls;

use crate::collection::EntryCollection;
use crate::colors::ColorCode;
use crate::config::{ConfigError, ModConfig};
use crate::entry::ItemEntry;
use crate::formats::json::StringTableFile;
use crate::formats::tsv::TsvTable;
use std::collections::BTreeMap;

/// Mode plus name color of a simple junk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig<M> {
    pub mode: M,
    pub color: ColorCode,
}

/// Color every key in `keys`.
fn colored(keys: &[&str], color: ColorCode) -> EntryCollection {
    keys.iter()
        .map(|key| ItemEntry::new(*key).colored(color))
        .collect()
}

fn hidden(keys: &[&str]) -> EntryCollection {
    keys.iter().map(|key| ItemEntry::hidden(*key)).collect()
}

type Composer = fn(&ModConfig) -> Result<EntryCollection, ConfigError>;

const COMPOSERS: [(&str, StringTableFile, Composer); 9] = [
    ("gold", StringTableFile::ItemNames, gold::compose),
    ("buff potions", StringTableFile::ItemNames, potions::compose_buff),
    ("throwing potions", StringTableFile::ItemNames, potions::compose_throwing),
    ("healing potions", StringTableFile::ItemNames, potions::compose_healing),
    ("scrolls", StringTableFile::ItemNames, scrolls::compose),
    ("arrows", StringTableFile::ItemNames, ammo::compose),
    ("keys", StringTableFile::ItemNames, keys::compose),
    ("gems", StringTableFile::ItemNames, gems::compose),
    ("item level", StringTableFile::ItemNames, item_level::compose),
];

/// Run every composer and fold the results per string table.
///
/// `equipment_tables` are the armor and weapons tables the quality tags are
/// derived from.
pub fn compose_all(
    config: &ModConfig,
    equipment_tables: &[TsvTable],
) -> Result<BTreeMap<StringTableFile, EntryCollection>, ConfigError> {
    let mut tables: BTreeMap<StringTableFile, EntryCollection> = BTreeMap::new();

    for (name, table, composer) in COMPOSERS {
        let entries = composer(config)?;
        log::debug!("{name}: {} entries for {}", entries.len(), table.path());
        tables.entry(table).or_default().merge(entries);
    }

    let equipment = equipment::compose(config, equipment_tables)?;
    log::debug!("equipment quality: {} entries", equipment.len());
    tables
        .entry(StringTableFile::ItemNames)
        .or_default()
        .merge(equipment);

    let runes = runes::compose(config)?;
    log::debug!("runes: {} entries", runes.len());
    tables
        .entry(StringTableFile::ItemRunes)
        .or_default()
        .merge(runes);

    if !config.custom_overrides.is_empty() {
        for table in StringTableFile::ALL {
            tables
                .entry(table)
                .or_default()
                .apply_overrides(&config.custom_overrides);
        }
    }

    tables.retain(|_, entries| !entries.is_empty());
    Ok(tables)
}
