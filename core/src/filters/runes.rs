/// Rune names in the rune string table, styled per tier
use crate::collection::EntryCollection;
use crate::config::{ConfigError, ModConfig};
use crate::entry::{EntryKind, ItemEntry};

pub fn compose(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let mut collection = EntryCollection::new();

    for settings in &config.runes.tiers {
        if !settings.visible {
            for rune in settings.tier.runes() {
                collection.hide(&rune.code());
            }
            continue;
        }

        let highlight = settings.highlight.build(
            config.highlight_glyph,
            Some(settings.name_color),
            settings.big_tooltip,
            &config.compose.palette,
        )?;

        for rune in settings.tier.runes() {
            let entry = ItemEntry::new(rune.code())
                .with_kind(EntryKind::Rune {
                    number: rune.number(),
                    number_color: settings.number_color,
                    show_number: config.runes.show_numbers,
                })
                .colored(settings.name_color)
                .highlighted(highlight.clone())
                .with_big_tooltip(settings.big_tooltip);
            collection.upsert(entry);
        }
    }

    Ok(collection)
}
