//! End-to-end tests for a full mod pass
//!
//! These tests run the pass against a copy of the fixture game data:
//! 1. Host config loading and projection
//! 2. Composition of every category
//! 3. String table, excel table and model rewrites
//! 4. Output written next to, never over, the game data

use loot_filter_core::formats::json::{StringTable, StringTableFile};
use loot_filter_core::formats::tsv::TsvTable;
use loot_filter_core::runes::all_runes;
use loot_filter_core::{
    run, FileCache, FsHost, HostConfig, HostError, ModConfig, RunError,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE_MODEL: &str = include_str!("fixtures/models/rune.json");

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

/// Game data with every fixture file plus one model per rune.
fn game_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    copy_dir(&fixtures().join("game"), dir.path());
    for rune in all_runes() {
        let path = dir.path().join(rune.model_path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, FIXTURE_MODEL).unwrap();
    }
    dir
}

fn fixture_config() -> ModConfig {
    let host = HostConfig::from_file(fixtures().join("config.json")).unwrap();
    ModConfig::from_host(&host).unwrap()
}

fn read_strings(root: &Path, file: StringTableFile) -> StringTable {
    let bytes = fs::read(root.join(file.path())).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]), "{} lost its BOM", file.path());
    StringTable::parse(std::str::from_utf8(&bytes[3..]).unwrap()).unwrap()
}

fn read_excel(root: &Path, path: &str) -> TsvTable {
    TsvTable::parse(&fs::read_to_string(root.join(path)).unwrap()).unwrap()
}

/// Every file under `root`, keyed by its relative path.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let contents = fs::read(&path).unwrap();
                files.insert(path.strip_prefix(root).unwrap().to_path_buf(), contents);
            }
        }
    }
    files
}

/// Full pass with the fixture config
#[test]
fn test_e2e_full_pass() {
    let game = game_data();
    let output = TempDir::new().unwrap();
    let mut host = FileCache::new(FsHost::new(game.path(), output.path()));

    let summary = run(&mut host, &fixture_config()).expect("mod pass failed");

    // 5 string tables, 3 excel tables, 14 mid and high rune models
    assert_eq!(summary.files_written.len(), 22);
    assert_eq!(summary.records_updated, 12);
    assert_eq!(summary.excel_rows_changed, 12);
    assert_eq!(summary.pillars_added, 14);

    let names = read_strings(output.path(), StringTableFile::ItemNames);
    assert_eq!(names.text("gld", "enUS"), Some("ÿc4G"));
    assert_eq!(names.text("gld", "koKR"), Some("ÿc4G"));
    assert_eq!(names.text("isc", "frFR"), Some(" "));
    assert_eq!(names.text("hp5", "deDE"), Some("ÿc1HP5"));
    assert_eq!(names.text("gcv", "enUS"), Some(" "));
    assert_eq!(names.text("uap", "deDE"), Some("Tschako [e]"));
    assert_eq!(names.text("rin", "enUS"), Some("   ÿc0Ring"));
    assert_eq!(names.text("pk1", "enUS"), Some("ÿcO* Key of Terror"));

    let runes = read_strings(output.path(), StringTableFile::ItemRunes);
    assert_eq!(runes.text("r01", "enUS"), Some("ÿc8El Rune ÿc;(1)"));
    let stars = "*".repeat(20);
    let pad = " ".repeat(5);
    assert_eq!(
        runes.text("r30", "koKR").unwrap(),
        format!("\nÿc8{stars}{pad}베르 룬{pad}{stars} ÿc;(30)\n")
    );
    assert_eq!(runes.text("Runeword1", "enUS"), Some("Ancient's Pledge"));

    for file in [
        StringTableFile::ItemNameAffixes,
        StringTableFile::ItemModifiers,
        StringTableFile::UiStrings,
    ] {
        let table = read_strings(output.path(), file);
        assert_eq!(table.text("Cube", "deDE"), Some("ÿc4Cube"));
    }
}

/// A second pass into the same output produces the same files
#[test]
fn test_e2e_rerun_same_output() {
    let game = game_data();
    let output = TempDir::new().unwrap();
    let config = fixture_config();

    let mut first = FileCache::new(FsHost::new(game.path(), output.path()));
    run(&mut first, &config).unwrap();
    let after_first = snapshot(output.path());

    let mut second = FileCache::new(FsHost::new(game.path(), output.path()));
    let summary = run(&mut second, &config).unwrap();
    let after_second = snapshot(output.path());

    assert_eq!(summary.pillars_added, 14);
    assert_eq!(after_first.len(), after_second.len());
    assert!(after_first == after_second, "second pass changed the output");

    let runes = read_strings(output.path(), StringTableFile::ItemRunes);
    assert_eq!(runes.text("r01", "enUS"), Some("ÿc8El Rune ÿc;(1)"));
    let names = read_strings(output.path(), StringTableFile::ItemNames);
    assert_eq!(names.text("gld", "enUS"), Some("ÿc4G"));
    assert_eq!(names.text("uap", "deDE"), Some("Tschako [e]"));
}

/// Excel edits keep CRLF endings and leave the game copy alone
#[test]
fn test_e2e_excel_tables() {
    let game = game_data();
    let output = TempDir::new().unwrap();
    let original_misc = fs::read_to_string(game.path().join("global/excel/misc.txt")).unwrap();
    let mut host = FsHost::new(game.path(), output.path());

    run(&mut host, &fixture_config()).unwrap();

    let raw = fs::read_to_string(output.path().join("global/excel/misc.txt")).unwrap();
    assert!(raw.contains("\r\n"));
    let misc = read_excel(output.path(), "global/excel/misc.txt");
    let row = |code: &str| misc.rows.iter().find(|row| row["code"] == code).unwrap();
    assert_eq!(row("rin")["ShowLevel"], "1");
    assert_eq!(row("cm1")["ShowLevel"], "1");
    assert_eq!(row("r01")["ShowLevel"], "0");
    assert_eq!(row("r01")["dropsound"], "item_rune");
    assert_eq!(row("r31")["dropsound"], "item_gem");
    assert_eq!(misc.headers.last().map(String::as_str), Some("*eol"));

    let armor = read_excel(output.path(), "global/excel/armor.txt");
    assert!(armor.rows.iter().all(|row| row["ShowLevel"] == "1"));

    let untouched = fs::read_to_string(game.path().join("global/excel/misc.txt")).unwrap();
    assert_eq!(untouched, original_misc);
}

/// Pillars go on mid and high runes only
#[test]
fn test_e2e_light_pillars() {
    let game = game_data();
    let output = TempDir::new().unwrap();
    let mut host = FsHost::new(game.path(), output.path());

    run(&mut host, &fixture_config()).unwrap();

    let ber = output.path().join("hd/items/misc/rune/ber_rune.json");
    let model: serde_json::Value =
        serde_json::from_str(fs::read_to_string(ber).unwrap().trim_start_matches('\u{feff}'))
            .unwrap();
    let entities = model["entities"].as_array().unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[1]["name"], "droplight");
    assert_eq!(model["dependencies"]["particles"].as_array().unwrap().len(), 1);

    assert!(!output.path().join("hd/items/misc/rune/el_rune.json").exists());
    assert!(!output.path().join("hd/items/misc/rune/fal_rune.json").exists());
    assert!(output.path().join("hd/items/misc/rune/lem_rune.json").exists());
}

/// A missing game file aborts the pass before anything is written
#[test]
fn test_e2e_missing_file_writes_nothing() {
    let game = game_data();
    fs::remove_file(game.path().join("global/excel/misc.txt")).unwrap();
    let output = TempDir::new().unwrap();
    let mut host = FsHost::new(game.path(), output.path());

    let err = run(&mut host, &fixture_config()).unwrap_err();
    assert!(matches!(err, RunError::Host(HostError::Unreadable { .. })));
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

/// Old mod manager versions are refused with the fixed message
#[test]
fn test_e2e_old_host_version() {
    let game = game_data();
    let output = TempDir::new().unwrap();
    let mut host = FsHost::new(game.path(), output.path()).with_version(Some([1, 4, 2]));

    let err = run(&mut host, &fixture_config()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "D2RMM version 1.5.0 or higher is required to run this mod."
    );
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

/// A broken config never reaches the files
#[test]
fn test_e2e_invalid_config() {
    let host = HostConfig::from_json_str(r#"{"gemsMode": "shiny"}"#).unwrap();
    let err = ModConfig::from_host(&host).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unrecognized value \"shiny\" for setting `gemsMode`"
    );
}
