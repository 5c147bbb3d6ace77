use std::path::Path;
use std::process::{Command, Output};

fn qed_sort(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qed-sort"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_missing_input_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    let out = qed_sort(dir.path(), &["--input", "nope.csv", "--output", "out.csv"]);

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&out.stderr),
        "qed-sort: Input file not found: nope.csv\n"
    );
    assert!(out.stdout.is_empty());
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_unknown_column_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("in.csv"), "id,qed,name\n1,0.2,x\n").unwrap();

    let out = qed_sort(
        dir.path(),
        &["--input", "in.csv", "--output", "out.csv", "--qed-field", "price"],
    );

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&out.stderr),
        "qed-sort: QED column 'price' not found. Available columns: id, qed, name\n"
    );
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_defaults_sort_and_exit_0() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("kaggle_zinc_filtered.csv"),
        "smiles,QED\nCCO,0.5\nCCN,\nCO,0.9\n",
    )
    .unwrap();

    let out = qed_sort(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Wrote 3 rows sorted by 'QED' (desc) to kaggle_zinc_filtered_sorted.csv\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("kaggle_zinc_filtered_sorted.csv")).unwrap(),
        "smiles,QED\nCO,0.9\nCCO,0.5\nCCN,\n"
    );
}

#[test]
fn test_bad_flag_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let out = qed_sort(dir.path(), &["--reverse"]);

    assert_eq!(out.status.code(), Some(2));
}
