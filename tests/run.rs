//! End-to-end runs against a real directory on disk.

use std::fs;
use std::path::Path;

use batchcheck::{Config, OsDirectory, RunError, RunStats, Runner};

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn config(dir: &Path) -> Config {
    Config {
        dir: dir.to_path_buf(),
        id_col: 0,
        flag_col: Some(1),
        insert_prefix: "INS".to_string(),
        update_prefix: "UPD".to_string(),
        min_id: 100,
    }
}

#[test]
fn full_run_over_real_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();

    // Byte-wise order: INS_1, INS_10, INS_2, UPD_1, notes.txt ignored.
    write_file(dir, "INS_1.csv", "ID,Flag\n100,First\n99,Low\n");
    write_file(dir, "INS_10.csv", "ID,Flag\n100,Second\n");
    write_file(dir, "INS_2.csv", "ID,Flag\n100,Third\n");
    write_file(dir, "UPD_1.csv", "ID,Flag\n100,Update\n99,Repeat\n777,Unknown\n");
    write_file(dir, "notes.txt", "not a batch file");
    fs::create_dir(dir.join("archive.csv")).unwrap();

    let mut out = Vec::new();
    let stats = Runner::new(config(dir), OsDirectory, &mut out)
        .run()
        .unwrap();

    // 100 is flagged by the duplicate in INS_10, so its update row is a
    // repeat appearance too.
    assert_eq!(
        stats,
        RunStats {
            insert_errors: 3,
            update_errors: 2,
        }
    );

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "INS_1.csv(3) - identifier below minimum : 99,Low",
            "INS_10.csv(2) - second occurrence in an insert file : 100,Second",
            "INS_2.csv(2) - repeat appearance of a previously-errored subject : 100,Third",
            "UPD_1.csv(2) - repeat appearance of a previously-errored subject : 100,Update",
            "UPD_1.csv(3) - repeat appearance of a previously-errored subject : 99,Repeat",
            "insert errors: 3 update errors: 2",
        ]
    );
}

#[test]
fn missing_directory_aborts() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config(&tmp.path().join("does-not-exist"));

    let mut out = Vec::new();
    let err = Runner::new(cfg, OsDirectory, &mut out).run().unwrap_err();
    assert!(matches!(err, RunError::ListDir { .. }));
}

#[test]
fn ragged_file_aborts_and_names_the_row() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    write_file(dir, "INS_1.csv", "ID,Flag\n100,a\n200,b,extra\n");

    let mut out = Vec::new();
    let err = Runner::new(config(dir), OsDirectory, &mut out)
        .run()
        .unwrap_err();
    match err {
        RunError::Decode { file, row, .. } => {
            assert_eq!(file, "INS_1.csv");
            assert_eq!(row, 3);
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn empty_directory_emits_only_the_summary() {
    let tmp = tempfile::tempdir().unwrap();

    let mut out = Vec::new();
    let stats = Runner::new(config(tmp.path()), OsDirectory, &mut out)
        .run()
        .unwrap();

    assert_eq!(stats, RunStats::default());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "insert errors: 0 update errors: 0\n"
    );
}
