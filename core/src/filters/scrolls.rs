/// Identify and town portal scrolls and their tomes
use super::hidden;
use crate::collection::EntryCollection;
use crate::colors::ColorCode;
use crate::config::{ConfigEnum, ConfigError, ModConfig};
use crate::entry::ItemEntry;

pub const DEFAULT_COLOR: ColorCode = ColorCode::TAN;

/// Scroll key and its short name.
const SCROLLS: [(&str, &str); 2] = [("isc", "ID"), ("tsc", "TP")];
const TOMES: [&str; 2] = ["ibk", "tbk"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollsMode {
    Disabled,
    All,
    HideScrolls,
    Hide,
}

impl ConfigEnum for ScrollsMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("all", Self::All),
        ("hide-scrolls", Self::HideScrolls),
        ("hide", Self::Hide),
    ];
}

pub fn compose(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let category = &config.scrolls;
    let mut collection = EntryCollection::new();

    match category.mode {
        ScrollsMode::Disabled => {}
        ScrollsMode::All | ScrollsMode::HideScrolls => {
            for (key, name) in SCROLLS {
                collection.upsert(ItemEntry::new(key).named(name).colored(category.color));
            }
            for key in TOMES {
                collection.upsert(ItemEntry::new(key).colored(category.color));
            }
            if category.mode == ScrollsMode::HideScrolls {
                for (key, _) in SCROLLS {
                    collection.hide(key);
                }
            }
        }
        ScrollsMode::Hide => {
            collection.merge(hidden(&SCROLLS.map(|(key, _)| key)));
            collection.merge(hidden(&TOMES));
        }
    }

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfig;

    fn compose_mode(mode: &str) -> EntryCollection {
        let host = HostConfig {
            scrolls_mode: mode.into(),
            ..HostConfig::default()
        };
        compose(&ModConfig::from_host(&host).unwrap()).unwrap()
    }

    #[test]
    fn all_shortens_scroll_names() {
        let collection = compose_mode("all");
        assert_eq!(collection.get("tsc").unwrap().name.as_deref(), Some("TP"));
        assert_eq!(collection.get("ibk").unwrap().name_color, Some(DEFAULT_COLOR));
    }

    #[test]
    fn hide_scrolls_keeps_tomes() {
        let collection = compose_mode("hide-scrolls");
        assert!(!collection.get("isc").unwrap().visible);
        assert!(collection.get("tbk").unwrap().visible);
    }

    #[test]
    fn hide_hides_everything() {
        let collection = compose_mode("hide");
        assert_eq!(collection.len(), 4);
        assert!(collection.iter().all(|entry| !entry.visible));
    }
}
