//! CLI integration tests
//!
//! Drive the built `curvecat` binary against a catalog in a temp directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const DEFINITION: &str = r#"
schema_version: 0
curves:
  - curve_name: USD-OIS
    day_counter: Actual360
    enable_extrapolation: true
    config_date: "2024-01-01"
    helpers:
      - helper_name: H1
        type: DEPOSIT
        configs:
          - { field: rate, value: 0.05 }
      - helper_name: H2
        type: OIS
        configs:
          - { field: tenor, value: 5Y }
"#;

fn curvecat(dir: &Path, db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_curvecat"))
        .current_dir(dir)
        .env_remove("CURVECAT_DB")
        .env("RUST_LOG", "off")
        .args(args)
        .arg("--db")
        .arg(db)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn setup(temp_dir: &TempDir) -> PathBuf {
    let db_path = temp_dir.path().join("catalog.db");
    let definition = temp_dir.path().join("curves.yaml");
    fs::write(&definition, DEFINITION).unwrap();

    let output = curvecat(
        temp_dir.path(),
        &db_path,
        &["curve", "import", definition.to_str().unwrap()],
    );
    assert!(output.status.success(), "import failed: {:?}", output);
    assert!(stdout(&output).contains("Imported 1 curves"));
    db_path
}

#[test]
fn test_cli_migrate_creates_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("catalog.db");

    let output = curvecat(temp_dir.path(), &db_path, &["migrate"]);

    assert!(output.status.success(), "{:?}", output);
    assert!(db_path.exists());
    assert!(stdout(&output).contains("Catalog ready"));
}

#[test]
fn test_cli_curve_list_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let list = curvecat(temp_dir.path(), &db_path, &["curve", "list"]);
    assert!(list.status.success());
    assert!(stdout(&list).contains("USD-OIS\tActual360\t2024-01-01\t2 helpers"));

    let show = curvecat(temp_dir.path(), &db_path, &["curve", "show", "USD-OIS"]);
    assert!(show.status.success());
    let record: serde_json::Value = serde_json::from_str(&stdout(&show)).unwrap();
    assert_eq!(record["curve"]["curve_name"], "USD-OIS");
    assert_eq!(record["helpers"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_show_missing_curve_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let output = curvecat(temp_dir.path(), &db_path, &["curve", "show", "NOPE"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_NOT_FOUND"));
}

#[test]
fn test_cli_export_curve() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let output = curvecat(temp_dir.path(), &db_path, &["curve", "export", "USD-OIS"]);
    assert!(output.status.success());

    let exported: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(exported["NAME"], "USD-OIS");
    assert_eq!(exported["RATEHELPERS"][0]["TYPE"], "DEPOSIT");
    assert_eq!(exported["RATEHELPERS"][0]["RATE"], 0.05);
}

#[test]
fn test_cli_delete_helper_then_curve() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup(&temp_dir);

    let helper = curvecat(
        temp_dir.path(),
        &db_path,
        &["helper", "delete", "--name", "H1", "--curve", "USD-OIS"],
    );
    assert!(helper.status.success(), "{:?}", helper);
    assert!(stdout(&helper).contains("Deleted 1 helper(s), 1 config(s)"));

    let curve = curvecat(
        temp_dir.path(),
        &db_path,
        &["curve", "delete", "--name", "USD-OIS"],
    );
    assert!(curve.status.success(), "{:?}", curve);
    assert!(stdout(&curve).contains("Deleted 1 curve(s), 1 helper(s), 1 config(s)"));

    let list = curvecat(temp_dir.path(), &db_path, &["curve", "list"]);
    assert!(stdout(&list).trim().is_empty());
}

#[test]
fn test_cli_delete_absent_curve_id_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    let output = curvecat(temp_dir.path(), &db_path, &["curve", "delete", "--id", "999"]);

    assert!(output.status.success(), "{:?}", output);
    assert!(stdout(&output).contains("Deleted 0 curve(s)"));
}

#[test]
fn test_cli_tickers() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    let add = curvecat(
        temp_dir.path(),
        &db_path,
        &["ticker", "add", "USSO1 Curncy", "EUSWE1 Curncy"],
    );
    assert!(add.status.success());

    let dup = curvecat(temp_dir.path(), &db_path, &["ticker", "add", "USSO1 Curncy"]);
    assert!(!dup.status.success());
    assert!(String::from_utf8_lossy(&dup.stderr).contains("ERR_CREATE_FAILED"));

    let remove = curvecat(
        temp_dir.path(),
        &db_path,
        &["ticker", "remove", "USSO1 Curncy", "NOTREG Index"],
    );
    assert!(remove.status.success());
    let removed = stdout(&remove);
    assert!(removed.contains("Removed 1 ticker(s)"), "{}", removed);
    assert!(removed.contains("1 ticker(s) were not registered"), "{}", removed);

    let list = curvecat(temp_dir.path(), &db_path, &["ticker", "list"]);
    assert_eq!(stdout(&list), "EUSWE1 Curncy\n");
}

#[test]
fn test_cli_config_file_supplies_db_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("curvecat.toml");
    fs::write(&config_path, "db_path = \"from_config.db\"\nbusy_timeout_ms = 100\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_curvecat"))
        .current_dir(temp_dir.path())
        .env_remove("CURVECAT_DB")
        .env("RUST_LOG", "off")
        .args(["migrate", "--config", config_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(temp_dir.path().join("from_config.db").exists());
}

#[test]
fn test_cli_env_var_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("curvecat.toml");
    fs::write(&config_path, "db_path = \"from_config.db\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_curvecat"))
        .current_dir(temp_dir.path())
        .env("CURVECAT_DB", "from_env.db")
        .env("RUST_LOG", "off")
        .args(["migrate", "--config", config_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(temp_dir.path().join("from_env.db").exists());
    assert!(!temp_dir.path().join("from_config.db").exists());
}
