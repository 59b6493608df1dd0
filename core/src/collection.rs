/// Key to entry mapping that composers fill and the runner applies
use crate::colors::ColorCode;
use crate::entry::ItemEntry;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCollection {
    entries: HashMap<String, ItemEntry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for its key, returning the previous one.
    pub fn upsert(&mut self, entry: ItemEntry) -> Option<ItemEntry> {
        self.entries.insert(entry.key.clone(), entry)
    }

    /// Hide `key`. An existing entry only has its visibility flipped; a
    /// missing one is created as a bare hidden entry.
    pub fn hide(&mut self, key: &str) {
        match self.entries.get_mut(key) {
            Some(entry) => entry.visible = false,
            None => {
                self.entries.insert(key.to_string(), ItemEntry::hidden(key));
            }
        }
    }

    /// Fold `other` into `self`; its entries win on key collisions.
    pub fn merge(&mut self, other: EntryCollection) {
        self.entries.extend(other.entries);
    }

    /// User overrides replace whatever the composers produced.
    pub fn apply_overrides(&mut self, overrides: &[CustomOverride]) {
        for custom in overrides {
            self.upsert(custom.to_entry());
        }
    }

    pub fn get(&self, key: &str) -> Option<&ItemEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemEntry> {
        self.entries.values()
    }
}

impl FromIterator<ItemEntry> for EntryCollection {
    fn from_iter<I: IntoIterator<Item = ItemEntry>>(iter: I) -> Self {
        let mut collection = Self::new();
        for entry in iter {
            collection.upsert(entry);
        }
        collection
    }
}

/// One hand-written rule from the user's override list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomOverride {
    pub key: String,
    pub hidden: bool,
    pub color: Option<ColorCode>,
    pub name: Option<String>,
}

impl CustomOverride {
    pub fn to_entry(&self) -> ItemEntry {
        if self.hidden {
            return ItemEntry::hidden(self.key.as_str());
        }
        let mut entry = ItemEntry::new(self.key.as_str());
        entry.name_color = self.color;
        entry.name = self.name.clone();
        entry
    }
}
