/// Quality tags on armor and weapon base names
///
/// A base item's tier is read from its own row: the row is normal when its
/// `code` equals its `normcode`, exceptional for `ubercode` and elite for
/// `ultracode`. Rows matching none of them (quest items, unused bases) are
/// left alone.
use crate::collection::EntryCollection;
use crate::config::{ConfigError, ModConfig};
use crate::entry::{EntryKind, ItemEntry};
use crate::formats::tsv::{TsvRow, TsvTable};
use crate::quality::EquipmentQuality;

pub const ARMOR_TABLE: &str = "global/excel/armor.txt";
pub const WEAPONS_TABLE: &str = "global/excel/weapons.txt";
pub const EQUIPMENT_TABLES: [&str; 2] = [ARMOR_TABLE, WEAPONS_TABLE];

pub fn compose(config: &ModConfig, tables: &[TsvTable]) -> Result<EntryCollection, ConfigError> {
    let Some(tag) = config.quality_tag else {
        return Ok(EntryCollection::new());
    };

    let mut collection = EntryCollection::new();
    for row in tables.iter().flat_map(|table| table.rows.iter()) {
        if let Some((code, quality)) = classify(row) {
            collection.upsert(ItemEntry::new(code).with_kind(EntryKind::Equipment {
                quality,
                tag,
            }));
        }
    }
    Ok(collection)
}

fn classify(row: &TsvRow) -> Option<(&str, EquipmentQuality)> {
    let column = |name: &str| row.get(name).map(String::as_str).unwrap_or_default();
    let code = column("code");
    if code.is_empty() {
        return None;
    }

    let quality = if code == column("normcode") {
        EquipmentQuality::Normal
    } else if code == column("ubercode") {
        EquipmentQuality::Exceptional
    } else if code == column("ultracode") {
        EquipmentQuality::Elite
    } else {
        return None;
    };
    Some((code, quality))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfig;

    const ARMOR: &str = "name\tcode\tnormcode\tubercode\tultracode\n\
        Cap\tcap\tcap\txap\tuap\n\
        War Hat\txap\tcap\txap\tuap\n\
        Shako\tuap\tcap\txap\tuap\n\
        Expansion\t\t\t\t\n";

    fn table() -> TsvTable {
        TsvTable::parse(ARMOR).unwrap()
    }

    #[test]
    fn classifies_each_tier() {
        let host = HostConfig {
            quality_tag: "single".into(),
            ..HostConfig::default()
        };
        let collection = compose(&ModConfig::from_host(&host).unwrap(), &[table()]).unwrap();
        assert_eq!(collection.len(), 3);

        let quality = |key: &str| match &collection.get(key).unwrap().kind {
            EntryKind::Equipment { quality, .. } => *quality,
            other => panic!("unexpected kind {other:?}"),
        };
        assert_eq!(quality("cap"), EquipmentQuality::Normal);
        assert_eq!(quality("xap"), EquipmentQuality::Exceptional);
        assert_eq!(quality("uap"), EquipmentQuality::Elite);
    }

    #[test]
    fn nothing_without_quality_tag() {
        let config = ModConfig::from_host(&HostConfig::default()).unwrap();
        assert!(compose(&config, &[table()]).unwrap().is_empty());
    }
}
