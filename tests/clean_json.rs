// tests/clean_json.rs
//
// file::clean_json_file against arbitrary files on disk.
//
use std::fs;
use std::path::PathBuf;

use passive_scrape::Error;
use passive_scrape::file::{clean_json_file, read_passives, write_passives};
use passive_scrape::specs::passives::PassiveRow;
use passive_scrape::store::aggregate;
use passive_scrape::weights::TokenWeights;
use serde_json::{Value, json};

fn write_tmp(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let p = dir.path().join(name);
    fs::write(&p, contents).unwrap();
    p
}

fn load(p: &PathBuf) -> Value {
    serde_json::from_str(&fs::read_to_string(p).unwrap()).unwrap()
}

#[test]
fn tightens_percent_in_strings() {
    let dir = tempfile::tempdir().unwrap();
    let p = write_tmp(&dir, "a.json", r#"{"a": "10 % chance"}"#);

    clean_json_file(&p).unwrap();

    assert_eq!(load(&p), json!({"a": "10% chance"}));
    assert_eq!(fs::read_to_string(&p).unwrap(), "{\n    \"a\": \"10% chance\"\n}");
}

#[test]
fn leaves_other_values_alone() {
    let dir = tempfile::tempdir().unwrap();
    let p = write_tmp(&dir, "b.json", r#"[1, 2.5, true, null, "plain", {"k %": ["x % y"]}]"#);

    clean_json_file(&p).unwrap();

    assert_eq!(load(&p), json!([1, 2.5, true, null, "plain", {"k %": ["x% y"]}]));
}

#[test]
fn second_pass_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let p = write_tmp(&dir, "c.json", r#"{"z": ["1 % a", "b  % c"], "a": {"n": 3, "s": "4 %"}}"#);

    clean_json_file(&p).unwrap();
    let once = fs::read_to_string(&p).unwrap();
    clean_json_file(&p).unwrap();
    let twice = fs::read_to_string(&p).unwrap();

    assert_eq!(once, twice);
    // key order survives the rewrite
    assert!(once.find("\"z\"").unwrap() < once.find("\"a\"").unwrap());
}

#[test]
fn keeps_non_ascii_unescaped() {
    let dir = tempfile::tempdir().unwrap();
    let p = write_tmp(&dir, "d.json", r#"{"名前": "Ω 5 %"}"#);

    clean_json_file(&p).unwrap();

    assert_eq!(fs::read_to_string(&p).unwrap(), "{\n    \"名前\": \"Ω 5%\"\n}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = clean_json_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn malformed_json_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = write_tmp(&dir, "bad.json", "{\"a\": ");
    let err = clean_json_file(&p).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    // untouched on failure
    assert_eq!(fs::read_to_string(&p).unwrap(), "{\"a\": ");
}

#[test]
fn write_then_read_round_trips_except_percent() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("data.json");
    let rows = vec![
        PassiveRow {
            name: "B".into(),
            values: vec!["5 % more".into(), "flat".into()],
            tokens: vec!["Distilled Guilt".into()],
        },
        PassiveRow {
            name: "A".into(),
            values: vec![],
            tokens: vec!["Distilled Ire".into(), "Distilled Foo".into()],
        },
    ];
    let map = aggregate(rows, &TokenWeights::default());

    write_passives(&p, &map).unwrap();
    assert_eq!(read_passives(&p).unwrap(), map);

    clean_json_file(&p).unwrap();
    let back = read_passives(&p).unwrap();
    assert_eq!(back.names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(back.get("B").unwrap().values, vec!["5% more", "flat"]);
    assert_eq!(back.get("A").unwrap(), map.get("A").unwrap());
}
