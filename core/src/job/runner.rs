/// One complete mod pass
///
/// Phases run strictly in order: version check, composition, reading every
/// file the pass touches, in-memory edits, then writes. Nothing is written
/// unless every earlier phase succeeded.
use crate::config::{ConfigError, ModConfig};
use crate::filters::equipment::EQUIPMENT_TABLES;
use crate::filters::{compose_all, item_level::ITEM_LEVEL_KEYS};
use crate::formats::json::StringTable;
use crate::formats::tsv::TsvTable;
use crate::formats::FormatError;
use crate::host::{require_version, Host, HostError, MINIMUM_HOST_VERSION};
use crate::pillars::{add_light_pillar, PillarError};
use crate::pipeline::DisplayNameComposer;
use crate::tables::{self, MISC_TABLE};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("{path}: {source}")]
    Format {
        path: String,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Pillar(#[from] PillarError),
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Files written, in write order.
    pub files_written: Vec<String>,
    /// String table records that were rewritten.
    pub records_updated: usize,
    pub excel_rows_changed: usize,
    pub pillars_added: usize,
}

enum PendingWrite {
    Tsv(String, TsvTable),
    Json(String, Value),
}

pub fn run<H: Host>(host: &mut H, config: &ModConfig) -> Result<RunSummary, RunError> {
    require_version(&*host, MINIMUM_HOST_VERSION)?;

    let item_level = config.compose.item_level.enabled;
    let mut equipment = Vec::new();
    if item_level || config.quality_tag.is_some() {
        for path in EQUIPMENT_TABLES {
            equipment.push(host.read_tsv(path)?);
        }
    }

    let collections = compose_all(config, &equipment)?;
    let composer = DisplayNameComposer::new(config.compose.clone());

    let mut summary = RunSummary::default();
    let mut pending = Vec::new();

    for (file, collection) in &collections {
        let path = file.path();
        let mut table = StringTable::from_value(host.read_json(path)?)
            .map_err(|source| format_error(path, source))?;
        let updated = table.apply(&composer, collection);
        log::debug!("{path}: {updated} of {} records updated", table.len());
        summary.records_updated += updated;
        pending.push(PendingWrite::Json(path.to_string(), table.to_value()));
    }

    if item_level {
        for (path, mut table) in EQUIPMENT_TABLES.into_iter().zip(equipment) {
            summary.excel_rows_changed += tables::show_item_level(&mut table, None)
                .map_err(|source| format_error(path, source))?;
            pending.push(PendingWrite::Tsv(path.to_string(), table));
        }
    }

    let drop_sounds = config.runes.tiers.iter().any(|tier| tier.drop_sound.is_some());
    if item_level || drop_sounds {
        let mut misc = host.read_tsv(MISC_TABLE)?;
        if item_level {
            let codes: Vec<String> = ITEM_LEVEL_KEYS.iter().map(|key| key.to_string()).collect();
            summary.excel_rows_changed += tables::show_item_level(&mut misc, Some(codes.as_slice()))
                .map_err(|source| format_error(MISC_TABLE, source))?;
        }
        summary.excel_rows_changed += tables::set_rune_drop_sounds(&mut misc, &config.runes.tiers)
            .map_err(|source| format_error(MISC_TABLE, source))?;
        pending.push(PendingWrite::Tsv(MISC_TABLE.to_string(), misc));
    }

    for tier in config.runes.tiers.iter().filter(|tier| tier.light_pillar) {
        for rune in tier.tier.runes() {
            let path = rune.model_path();
            let mut model = host.read_json(&path)?;
            if add_light_pillar(rune, &mut model)? {
                summary.pillars_added += 1;
                pending.push(PendingWrite::Json(path, model));
            }
        }
    }

    for write in pending {
        let path = match write {
            PendingWrite::Tsv(path, table) => {
                host.write_tsv(&path, &table)?;
                path
            }
            PendingWrite::Json(path, value) => {
                host.write_json(&path, &value)?;
                path
            }
        };
        log::info!("wrote {path}");
        summary.files_written.push(path);
    }

    log::info!(
        "{} files written, {} records updated, {} pillars added",
        summary.files_written.len(),
        summary.records_updated,
        summary.pillars_added
    );
    Ok(summary)
}

fn format_error(path: &str, source: FormatError) -> RunError {
    RunError::Format {
        path: path.to_string(),
        source,
    }
}
