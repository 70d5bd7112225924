use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use tempfile::TempDir;
use zip::write::FileOptions;

fn bin(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("questions_extract").unwrap();
    cmd.current_dir(workdir)
        .env_remove("QUESTIONS_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn seed(path: &Path, sql: &str) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(sql).unwrap();
}

fn write_deck(path: &Path, entry: &str, xml: &str) {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        zip.start_file(entry, options).unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    fs::write(path, buf).unwrap();
}

fn written(workdir: &Path) -> Vec<String> {
    let text = fs::read_to_string(workdir.join("docs/questions.json")).unwrap();
    assert!(text.ends_with("]\n"));
    serde_json::from_str(&text).unwrap()
}

#[test]
fn missing_argument_prints_usage_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn extracts_cards_and_facts() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("source.db");
    seed(
        &db,
        "
        CREATE TABLE cards (question TEXT, answer TEXT);
        CREATE TABLE data_for_fact (value TEXT);
        INSERT INTO cards VALUES ('What is truth?', '  Unknown  \r\n');
        INSERT INTO data_for_fact VALUES ('インスピレーション');
        ",
    );

    bin(dir.path())
        .arg(&db)
        .assert()
        .success()
        .stdout("extracted_cells=3 unique_questions=2\n");

    assert_eq!(written(dir.path()), vec!["What is truth?", "Unknown"]);
    let raw = fs::read_to_string(dir.path().join("docs/questions.json")).unwrap();
    assert_eq!(raw, "[\n  \"What is truth?\",\n  \"Unknown\"\n]\n");
}

#[test]
fn empty_database_writes_empty_array() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("empty.db");
    seed(&db, "CREATE TABLE unrelated (x INTEGER);");

    bin(dir.path())
        .arg(&db)
        .assert()
        .success()
        .stdout("extracted_cells=0 unique_questions=0\n");

    let raw = fs::read_to_string(dir.path().join("docs/questions.json")).unwrap();
    assert_eq!(raw, "[]\n");
}

#[test]
fn rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("source.db");
    seed(
        &db,
        "
        CREATE TABLE cards (question TEXT, answer TEXT);
        INSERT INTO cards VALUES ('Repeat me', 'Oblique');
        INSERT INTO cards VALUES ('Second', 'Repeat me');
        ",
    );

    bin(dir.path()).arg(&db).assert().success();
    let first = fs::read(dir.path().join("docs/questions.json")).unwrap();
    bin(dir.path()).arg(&db).assert().success();
    let second = fs::read(dir.path().join("docs/questions.json")).unwrap();

    assert_eq!(first, second);
    assert_eq!(written(dir.path()), vec!["Repeat me", "Second"]);
}

#[test]
fn tsv_export_source() {
    let dir = TempDir::new().unwrap();
    let tsv = dir.path().join("export.tsv");
    fs::write(&tsv, "id\tquestion\n1\tAsk once\n2\tAsk once\n3\tAsk twice\n").unwrap();

    bin(dir.path())
        .arg(&tsv)
        .assert()
        .success()
        .stdout("extracted_cells=3 unique_questions=2\n");
    assert_eq!(written(dir.path()), vec!["Ask once", "Ask twice"]);
}

#[test]
fn output_path_from_environment() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("source.db");
    seed(&db, "CREATE TABLE data_for_fact (value TEXT); INSERT INTO data_for_fact VALUES ('Q');");

    bin(dir.path())
        .env("QUESTIONS_OUTPUT", "site/data/q.json")
        .arg(&db)
        .assert()
        .success();

    let raw = fs::read_to_string(dir.path().join("site/data/q.json")).unwrap();
    assert_eq!(raw, "[\n  \"Q\"\n]\n");
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn cards_deck_source() {
    let dir = TempDir::new().unwrap();
    let deck = dir.path().join("deck.cards");
    write_deck(
        &deck,
        "cards.xml",
        "<cards><p_1>・ 問い</p_1><p_1>問い</p_1><p_1>- Other</p_1></cards>",
    );

    bin(dir.path())
        .arg(&deck)
        .assert()
        .success()
        .stdout("extracted_cells=3 unique_questions=2\n");
    assert_eq!(written(dir.path()), vec!["問い", "Other"]);
}

#[test]
fn cards_deck_without_xml_entry_fails() {
    let dir = TempDir::new().unwrap();
    let deck = dir.path().join("deck.cards");
    write_deck(&deck, "notes.xml", "<cards/>");

    bin(dir.path())
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cards.xml not found"));
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn help_lists_environment_overrides() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("QUESTIONS_OUTPUT").and(predicate::str::contains("RUST_LOG")));
}
