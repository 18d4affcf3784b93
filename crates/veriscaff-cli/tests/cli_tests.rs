//! End-to-end tests driving the `veriscaff` binary against temp directories.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use walkdir::WalkDir;

fn veriscaff(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("veriscaff").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn files_under(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

#[test]
fn generate_demo_project() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args([
            "generate",
            "DemoBus",
            "--protocol",
            "AXI4",
            "--simulator",
            "dsim",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/8] Creating directory structure"))
        .stdout(predicate::str::contains("Created directory:"))
        .stdout(predicate::str::contains("Generated:"))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("./run.sh axi4_base"));

    let root = dir.path().join("DemoBus");
    for file in [
        "rtl/axi4_if.sv",
        "rtl/demobus_core.sv",
        "verification/common/axi4_transaction.sv",
        "verification/uvm/agents/axi4_agent/axi4_driver.sv",
        "verification/uvm/tests/axi4_mixed_test.sv",
        "verification/testbench/tb_top.sv",
        "sim/config/test_config.cfg",
        "sim/run/run.sh",
        "impl/scripts/build.tcl",
        "impl/Makefile",
        "docs/axi4_verification_guide.md",
        ".github/workflows/ci.yml",
        ".gitignore",
        "README.md",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    assert_eq!(files_under(&root).len(), 31);

    let interface = fs::read_to_string(root.join("rtl/axi4_if.sv")).unwrap();
    assert!(interface.contains("interface axi4_if"));
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("DemoBus"));
    assert!(!readme.contains("{{"));
}

#[test]
fn new_alias_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["new", "DemoBus"])
        .assert()
        .success();
    assert!(dir.path().join("DemoBus/rtl/axi4_if.sv").is_file());
    let run_sh = fs::read_to_string(dir.path().join("DemoBus/sim/run/run.sh")).unwrap();
    assert!(run_sh.contains("DSIM"));
}

#[test]
fn no_impl_skips_fpga_flow() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["generate", "DemoBus", "--no-impl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("make help").not());

    let root = dir.path().join("DemoBus");
    assert!(!root.join("impl").exists());
    assert_eq!(files_under(&root).len(), 26);
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(!readme.contains("FPGA Implementation"));
}

#[test]
fn output_dir_places_project() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["generate", "SpiCtrl", "--protocol", "spi", "-o", "work/designs"])
        .assert()
        .success();
    assert!(
        dir.path()
            .join("work/designs/SpiCtrl/verification/uvm/agents/spi_agent/spi_agent.sv")
            .is_file()
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["generate", "DemoBus", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: would create 29 directories and 31 files"))
        .stdout(predicate::str::contains("axi4_if.sv"));
    assert!(!dir.path().join("DemoBus").exists());
}

#[test]
fn no_color_accepts_any_non_empty_value() {
    let dir = tempfile::tempdir().unwrap();
    for value in ["1", "please", "true"] {
        veriscaff(dir.path())
            .env("NO_COLOR", value)
            .args(["generate", "DemoBus", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Dry run: would create"));
    }
}

#[test]
fn identifier_issues_are_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["generate", "DemoBus", "--protocol", "pci-e"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("protocol 'pci-e' is not a valid SystemVerilog identifier")
                .count(1),
        )
        .stderr(predicate::str::contains("SystemVerilog identifier").not());
}

#[test]
fn json_report() {
    let dir = tempfile::tempdir().unwrap();
    let assert = veriscaff(dir.path())
        .args(["--output-format", "json", "generate", "DemoBus", "--protocol", "apb"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["project_name"], "DemoBus");
    assert_eq!(report["protocol"], "APB");
    assert_eq!(report["simulator"], "dsim");
    assert_eq!(report["include_implementation"], true);
    assert_eq!(report["files"].as_array().unwrap().len(), 31);
    assert_eq!(report["directories"].as_array().unwrap().len(), 29);
    assert!(report["issues"].as_array().unwrap().is_empty());
}

#[test]
fn identifier_issues_warn_but_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let assert = veriscaff(dir.path())
        .args(["--output-format", "json", "generate", "DemoBus", "--protocol", "pci-e"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert!(!report["issues"].as_array().unwrap().is_empty());
    assert!(dir.path().join("DemoBus/rtl/pci-e_if.sv").is_file());
}

#[test]
fn rerun_overwrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path()).args(["generate", "DemoBus"]).assert().success();
    let first = files_under(&dir.path().join("DemoBus"));

    veriscaff(dir.path()).args(["generate", "DemoBus"]).assert().success();
    assert_eq!(files_under(&dir.path().join("DemoBus")), first);
}

#[test]
fn components_writes_seven_files() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["components", "APB", "--output-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 7 APB components"));

    let files = files_under(&dir.path().join("out"));
    assert_eq!(
        files,
        vec![
            "verification/common/apb_transaction.sv",
            "verification/uvm/agents/apb_agent/apb_driver.sv",
            "verification/uvm/agents/apb_agent/apb_monitor.sv",
            "verification/uvm/agents/apb_agent/apb_sequencer.sv",
            "verification/uvm/sequences/apb_base_seq.sv",
            "verification/uvm/sequences/apb_read_seq.sv",
            "verification/uvm/sequences/apb_write_seq.sv",
        ]
    );
}

#[test]
fn components_protocol_with_parent_component_stays_inside() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["components", "x/../y", "-o", "out"])
        .assert()
        .success();

    let out = dir.path().join("out");
    assert!(out.join("verification/common/y_transaction.sv").is_file());
    assert!(out.join("verification/uvm/agents/y_agent/y_driver.sv").is_file());
}

#[test]
fn components_protocol_climbing_out_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["components", "../../../x", "-o", "out"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("escapes the project root"));
    assert!(!dir.path().join("x_transaction.sv").exists());
}

#[test]
fn components_dry_run_lists_files() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["components", "axi4", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("axi4_monitor.sv"));
    assert!(!dir.path().join("verification").exists());
}

#[test]
fn environment_sets_default_protocol() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .env("VERISCAFF_DEFAULTS__PROTOCOL", "i2c")
        .env("VERISCAFF_DEFAULTS__IMPLEMENTATION", "false")
        .args(["generate", "DemoBus"])
        .assert()
        .success();

    let root = dir.path().join("DemoBus");
    assert!(root.join("rtl/i2c_if.sv").is_file());
    assert!(!root.join("impl").exists());
}

#[test]
fn init_local_then_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(dir.path().join(".veriscaff.toml").is_file());

    veriscaff(dir.path())
        .args(["config", "set", "defaults.simulator", "questa"])
        .assert()
        .success();
    veriscaff(dir.path())
        .args(["config", "get", "defaults.simulator"])
        .assert()
        .success()
        .stdout(predicate::str::diff("questa\n"));
    veriscaff(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".veriscaff.toml"));

    veriscaff(dir.path()).args(["generate", "DemoBus"]).assert().success();
    let run_sh = fs::read_to_string(dir.path().join("DemoBus/sim/run/run.sh")).unwrap();
    assert!(run_sh.contains("QUESTA"));
}

#[test]
fn init_keeps_existing_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join(".veriscaff.toml");
    fs::write(&local, "[defaults]\nprotocol = \"spi\"\n").unwrap();

    veriscaff(dir.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert!(fs::read_to_string(&local).unwrap().contains("spi"));

    veriscaff(dir.path())
        .args(["init", "--local", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&local).unwrap().contains("AXI4"));
}

#[test]
fn config_list_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let assert = veriscaff(dir.path())
        .args(["--output-format", "json", "config", "list"])
        .assert()
        .success();
    let config: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(config["defaults"]["protocol"], "AXI4");
    assert_eq!(config["output"]["no_color"], false);
}

#[test]
fn log_file_receives_events() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["-v", "--log-file", "veriscaff.log", "generate", "DemoBus"])
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("veriscaff.log")).unwrap();
    assert!(log.contains("DemoBus"));
    assert!(!log.contains('\u{1b}'));
}

#[test]
fn help_and_version() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("components"));
    veriscaff(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_for_bash() {
    let dir = tempfile::tempdir().unwrap();
    veriscaff(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("veriscaff"));
}
