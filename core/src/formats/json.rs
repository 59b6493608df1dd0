/// Localized string tables (`local/lng/strings/*.json`)
///
/// Each table is an array of `{id, Key, enUS, zhTW, ...}` records. Records
/// are kept as ordered JSON objects so unknown fields and key order survive
/// the round trip.
use super::FormatError;
use crate::collection::EntryCollection;
use crate::pipeline::DisplayNameComposer;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Language columns rewritten in every record.
pub const LANGUAGES: [&str; 13] = [
    "enUS", "zhTW", "deDE", "esES", "frFR", "itIT", "koKR", "plPL", "esMX", "jaJP", "ptBR",
    "ruRU", "zhCN",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StringTableFile {
    ItemNames,
    ItemRunes,
    ItemNameAffixes,
    ItemModifiers,
    UiStrings,
}

impl StringTableFile {
    pub const ALL: [StringTableFile; 5] = [
        Self::ItemNames,
        Self::ItemRunes,
        Self::ItemNameAffixes,
        Self::ItemModifiers,
        Self::UiStrings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::ItemNames => "local/lng/strings/item-names.json",
            Self::ItemRunes => "local/lng/strings/item-runes.json",
            Self::ItemNameAffixes => "local/lng/strings/item-nameaffixes.json",
            Self::ItemModifiers => "local/lng/strings/item-modifiers.json",
            Self::UiStrings => "local/lng/strings/ui.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringTable {
    records: Vec<Map<String, Value>>,
}

impl StringTable {
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let records = serde_json::from_str(text)
            .map_err(|e| FormatError::ParseError(format!("JSON parse error: {}", e)))?;
        Ok(Self { records })
    }

    pub fn from_value(value: Value) -> Result<Self, FormatError> {
        let records = serde_json::from_value(value)
            .map_err(|e| FormatError::ParseError(format!("not a string table: {}", e)))?;
        Ok(Self { records })
    }

    pub fn to_value(&self) -> Value {
        Value::Array(self.records.iter().cloned().map(Value::Object).collect())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Localized text of `key` in `language`.
    pub fn text(&self, key: &str, language: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record_key(record) == Some(key))
            .and_then(|record| record.get(language))
            .and_then(Value::as_str)
    }

    /// Rewrite every language column of the records `collection` has an
    /// entry for. Returns the number of records changed.
    pub fn apply(&mut self, composer: &DisplayNameComposer, collection: &EntryCollection) -> usize {
        let mut updated = 0;
        let mut seen = HashSet::new();

        for record in &mut self.records {
            let Some(entry) = record_key(record).and_then(|key| collection.get(key)) else {
                continue;
            };
            seen.insert(entry.key.clone());

            for language in LANGUAGES {
                if let Some(Value::String(text)) = record.get_mut(language) {
                    *text = composer.compose(entry, text);
                }
            }
            updated += 1;
        }

        let missing: Vec<&str> = collection.keys().filter(|key| !seen.contains(*key)).collect();
        if !missing.is_empty() {
            log::debug!("{} keys not present in table: {:?}", missing.len(), missing);
        }
        updated
    }
}

fn record_key(record: &Map<String, Value>) -> Option<&str> {
    record.get("Key").and_then(Value::as_str)
}
