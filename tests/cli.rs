use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn version_flag_prints_package_version() {
    let mut cmd = cargo_bin_cmd!("fullclock");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_flag_describes_program() {
    let mut cmd = cargo_bin_cmd!("fullclock");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("countdown"));
}

#[test]
fn unknown_argument_is_rejected_before_any_window_opens() {
    let mut cmd = cargo_bin_cmd!("fullclock");
    cmd.arg("--font-size")
        .arg("120")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
