use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn autoconf_cmd() -> Command {
    Command::cargo_bin("autoconf").unwrap()
}

#[test]
fn writes_configuration_into_host_src() {
    let host = TempDir::new().unwrap();
    fs::create_dir(host.path().join("src")).unwrap();
    let plugin = TempDir::new().unwrap();
    fs::write(
        plugin.path().join("package.json"),
        r#"{ "name": "my-plugin" }"#,
    )
    .unwrap();

    autoconf_cmd()
        .arg("--cwd")
        .arg(plugin.path())
        .arg("--base-dir")
        .arg(host.path())
        .assert()
        .success();

    let code = fs::read_to_string(host.path().join("src/configuration.ts")).unwrap();
    assert!(code.contains("imports: ['my-plugin']"));
}

#[test]
fn skips_install_inside_own_tree() {
    let host = TempDir::new().unwrap();
    fs::create_dir(host.path().join("src")).unwrap();

    autoconf_cmd()
        .arg("--cwd")
        .arg(host.path())
        .arg("--mod-name")
        .arg("m")
        .arg("--base-dir")
        .arg(host.path())
        .assert()
        .success();

    assert!(!host.path().join("src/configuration.ts").exists());
}

#[test]
fn reports_missing_source_directory_without_failing() {
    let host = TempDir::new().unwrap();
    let plugin = TempDir::new().unwrap();

    autoconf_cmd()
        .env("RUST_LOG", "error")
        .arg("--cwd")
        .arg(plugin.path())
        .arg("--mod-name")
        .arg("m")
        .arg("--base-dir")
        .arg(host.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot find source directory"));
}
