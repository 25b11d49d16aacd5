use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn bare_invocation_prints_usage_and_exits_nonzero() {
    Command::cargo_bin("linksleeve")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_every_subcommand() {
    Command::cargo_bin("linksleeve")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("write"))
        .stdout(predicate::str::contains("pack"))
        .stdout(predicate::str::contains("extract-tables"))
        .stdout(predicate::str::contains("analyze-neighbors"))
        .stdout(predicate::str::contains("fill"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn completions_emits_a_nonempty_script() {
    Command::cargo_bin("linksleeve")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linksleeve"));
}

#[test]
fn dump_reports_bad_magic_on_a_non_rom_file() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.nes");
    std::fs::write(&bogus, b"not a rom").unwrap();
    let out_dir = dir.path().join("out");

    Command::cargo_bin("linksleeve")
        .unwrap()
        .args(["dump", bogus.to_str().unwrap(), out_dir.to_str().unwrap()])
        .assert()
        .failure();
}
