/// Edits to the excel tables that go with the string changes
use crate::formats::tsv::TsvTable;
use crate::formats::FormatError;
use crate::runes::RuneTierSettings;

pub const MISC_TABLE: &str = "global/excel/misc.txt";
pub const SHOW_LEVEL: &str = "ShowLevel";
pub const DROP_SOUND: &str = "dropsound";

/// Set `ShowLevel` on every row with a code, or only on rows in `codes`.
pub fn show_item_level(table: &mut TsvTable, codes: Option<&[String]>) -> Result<usize, FormatError> {
    require_column(table, SHOW_LEVEL)?;

    let mut changed = 0;
    for row in &mut table.rows {
        let selected = match (row.get("code"), codes) {
            (Some(code), Some(codes)) => codes.contains(code),
            (Some(code), None) => !code.is_empty(),
            (None, _) => false,
        };
        if selected {
            row.insert(SHOW_LEVEL.to_string(), "1".to_string());
            changed += 1;
        }
    }
    Ok(changed)
}

/// Write each tier's drop sound into its rune rows; tiers without one keep the game's.
pub fn set_rune_drop_sounds(
    table: &mut TsvTable,
    tiers: &[RuneTierSettings],
) -> Result<usize, FormatError> {
    if tiers.iter().all(|tier| tier.drop_sound.is_none()) {
        return Ok(0);
    }
    require_column(table, DROP_SOUND)?;

    let mut changed = 0;
    for tier in tiers {
        let Some(sound) = &tier.drop_sound else {
            continue;
        };
        let codes: Vec<String> = tier.tier.runes().map(|rune| rune.code()).collect();
        for row in table.rows_with_code(&codes) {
            row.insert(DROP_SOUND.to_string(), sound.clone());
            changed += 1;
        }
    }
    Ok(changed)
}

fn require_column(table: &TsvTable, column: &str) -> Result<(), FormatError> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(FormatError::MissingColumn(column.to_string()))
    }
}
