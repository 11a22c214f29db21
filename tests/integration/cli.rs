use crate::helpers::prelude::*;

#[test]
fn it_prints_help() {
    binary()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chrome extension"));
}

#[test]
fn it_prints_version() {
    binary()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn it_rejects_flags() {
    let dir = tempdir().build();

    binary()
        .arg("--name")
        .arg("foobar")
        .current_dir(dir.path())
        .assert()
        .failure();

    assert!(dir.is_empty());
}

#[test]
fn it_needs_a_terminal_and_creates_nothing_without_one() {
    let dir = tempdir().build();

    binary()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a terminal"));

    assert!(dir.is_empty());
}
