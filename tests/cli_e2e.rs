use assert_cmd::Command;
use predicates::prelude::*;

fn resub(settings: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("resub").unwrap();
    cmd.arg("--settings").arg(settings);
    cmd
}

#[test]
fn author_rules_and_apply() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings = temp_dir.path().join("settings.json");

    resub(&settings)
        .args(["pattern", "add", "a"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Pattern added (p1)"));
    resub(&settings)
        .args(["pattern", "add", "b"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Pattern added (p2)"));
    resub(&settings)
        .args(["replacer", "add", "X"])
        .assert()
        .success();

    // Opening the linking session seeds the index-aligned default link
    // l1 (p1 -> r1), so the explicit link lands at l2.
    resub(&settings)
        .args(["link", "p2", "r1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Linked p2 -> r1 (l2)"));

    resub(&settings)
        .args(["apply", "bbb"])
        .assert()
        .success()
        .stdout(predicates::str::contains("XXX"));
}

#[test]
fn never_linked_collections_seed_default_links_on_open() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings = temp_dir.path().join("settings.json");

    resub(&settings).args(["pattern", "add", "a"]).assert().success();
    resub(&settings).args(["replacer", "add", "X"]).assert().success();

    // No link command ran: the next session seeds p1 -> r1 itself.
    resub(&settings)
        .args(["apply", "aaa"])
        .assert()
        .success()
        .stdout(predicates::str::contains("XXX"));

    resub(&settings)
        .args(["link", "p1", "r1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Link p1 -> r1 already exists"));
}

#[test]
fn apply_reads_stdin_when_no_argument() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings = temp_dir.path().join("settings.json");

    resub(&settings).args(["pattern", "add", "a"]).assert().success();
    resub(&settings).args(["replacer", "add", "X"]).assert().success();
    resub(&settings).args(["link", "p1", "r1"]).assert().success();

    resub(&settings)
        .arg("apply")
        .write_stdin("ababab")
        .assert()
        .success()
        .stdout(predicates::str::contains("XbXbXb"));
}

#[test]
fn github_issue_scenario() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings = temp_dir.path().join("settings.json");

    resub(&settings)
        .args([
            "pattern",
            "add",
            r"^https://github\.com/[^/]+/([^/]+)/issues/(\d+)$",
        ])
        .assert()
        .success();
    resub(&settings)
        .args(["replacer", "add", "issue:$1#$2"])
        .assert()
        .success();
    resub(&settings).args(["link", "p1", "r1"]).assert().success();

    resub(&settings)
        .args(["apply", "https://github.com/acme/widgets/issues/42"])
        .assert()
        .success()
        .stdout(predicates::str::contains("issue:widgets#42"));
}

#[test]
fn migrate_rewrites_a_legacy_file_in_place() {
    let temp_dir = tempfile::tempdir().unwrap();
    let legacy = temp_dir.path().join("old-settings.json");
    std::fs::write(
        &legacy,
        r#"{
            "patterns": ["a", "b"],
            "replacers": ["X", "Y"],
            "enabled": [true, false],
            "comments": ["c1", ""],
            "formatVersion": 200
        }"#,
    )
    .unwrap();

    Command::cargo_bin("resub")
        .unwrap()
        .args(["migrate", "--write"])
        .arg(&legacy)
        .assert()
        .success()
        .stdout(predicates::str::contains("Migrated"));

    let migrated: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&legacy).unwrap()).unwrap();
    assert_eq!(migrated["formatVersion"], 300);
    assert_eq!(migrated["links"].as_array().unwrap().len(), 2);
    assert_eq!(migrated["links"][0]["enabled"], true);
    assert_eq!(migrated["links"][0]["comment"], "c1");
    assert_eq!(migrated["links"][1]["enabled"], false);

    // A migrated file keeps working as the live settings file.
    resub(&legacy)
        .args(["apply", "ababab"])
        .assert()
        .success()
        .stdout(predicates::str::contains("XbXbXb"));
}

#[test]
fn off_passes_text_through_unchanged() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings = temp_dir.path().join("settings.json");

    resub(&settings).args(["pattern", "add", "a"]).assert().success();
    resub(&settings).args(["replacer", "add", "X"]).assert().success();
    resub(&settings).args(["link", "p1", "r1"]).assert().success();
    resub(&settings).arg("off").assert().success();

    resub(&settings)
        .args(["apply", "aaa"])
        .assert()
        .success()
        .stdout(predicates::str::contains("aaa"))
        .stdout(predicates::str::contains("X").not());

    resub(&settings).arg("on").assert().success();
    resub(&settings)
        .args(["apply", "aaa"])
        .assert()
        .success()
        .stdout(predicates::str::contains("XXX"));
}

#[test]
fn failing_command_exits_nonzero_with_error_on_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings = temp_dir.path().join("settings.json");

    resub(&settings)
        .args(["unlink", "l9"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Link not found: l9"));
}

#[test]
fn cascade_removal_disarms_the_rule() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings = temp_dir.path().join("settings.json");

    resub(&settings).args(["pattern", "add", "a"]).assert().success();
    resub(&settings).args(["replacer", "add", "X"]).assert().success();
    resub(&settings).args(["link", "p1", "r1"]).assert().success();

    resub(&settings)
        .args(["pattern", "rm", "p1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 link(s)"));

    resub(&settings)
        .args(["apply", "aaa"])
        .assert()
        .success()
        .stdout(predicates::str::contains("aaa"));
}
