/// Jewels, charms, rings and amulets: items whose item level is shown
use crate::collection::EntryCollection;
use crate::colors::ColorCode;
use crate::config::{ConfigError, ModConfig};
use crate::entry::{EntryKind, ItemEntry};

pub const DEFAULT_COLOR: ColorCode = ColorCode::WHITE;
pub const ITEM_LEVEL_KEYS: [&str; 6] = ["rin", "amu", "jew", "cm1", "cm2", "cm3"];

pub fn compose(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    if !config.compose.item_level.enabled {
        return Ok(EntryCollection::new());
    }

    Ok(ITEM_LEVEL_KEYS
        .iter()
        .map(|key| {
            ItemEntry::new(*key)
                .with_kind(EntryKind::ItemLevel)
                .colored(config.item_level_color)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfig;

    #[test]
    fn only_when_enabled() {
        let config = ModConfig::from_host(&HostConfig::default()).unwrap();
        assert!(compose(&config).unwrap().is_empty());

        let host = HostConfig {
            item_level_enabled: true,
            item_level_color: "blue".into(),
            ..HostConfig::default()
        };
        let collection = compose(&ModConfig::from_host(&host).unwrap()).unwrap();
        assert_eq!(collection.len(), 6);
        let charm = collection.get("cm3").unwrap();
        assert_eq!(charm.kind, EntryKind::ItemLevel);
        assert_eq!(charm.name_color, Some(ColorCode::BLUE));
    }
}
