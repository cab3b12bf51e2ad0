use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn fixer() -> Command {
    let mut cmd = Command::cargo_bin("frontend-fixer").unwrap();
    cmd.env("NO_COLOR", "1");
    for var in [
        "FRONTEND_FIXER_IMAGE",
        "FRONTEND_FIXER_BRANCH",
        "FRONTEND_FIXER_VALUES_FILE",
        "FRONTEND_FIXER_COMMIT_MESSAGE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn seed_frontend(root: &std::path::Path) {
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/index.js"), "old").unwrap();
    fs::write(root.join("package.json"), "{}").unwrap();
}

#[test]
fn exits_with_failure_outside_frontend_repo() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();

    let output = fixer().arg(temp.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR: ERROR: Not in leninkart-frontend repo!"));
    assert_eq!(fs::read_to_string(temp.path().join("package.json")).unwrap(), "{}");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn skipped_fix_still_exits_successfully() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/index.js"), "old").unwrap();

    let output = fixer().arg(temp.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR: package.json not found!"));
    assert!(stdout.contains("SUCCESS: Fixed src/index.js"));
    assert!(stdout.contains("SUCCESS: Applied 1 fixes:"));
    assert!(stdout.contains("INFO: Backup: _backup_"));
}

#[test]
fn next_steps_use_configured_image_and_branch() {
    let temp = TempDir::new().unwrap();
    seed_frontend(temp.path());

    let output = fixer()
        .arg(temp.path())
        .args(["--image", "acme/web", "--branch", "main"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("INFO:    docker build -t acme/web:"));
    assert!(stdout.contains("INFO:    git push origin main"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn empty_no_color_is_accepted() {
    let temp = TempDir::new().unwrap();
    seed_frontend(temp.path());

    let output = fixer().env("NO_COLOR", "").arg(temp.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("SUCCESS: Applied 2 fixes:"));
}

#[test]
fn usage_errors_exit_with_failure() {
    let temp = TempDir::new().unwrap();
    seed_frontend(temp.path());

    let output = fixer()
        .arg(temp.path())
        .arg("--no-such-flag")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--no-such-flag"));
    assert_eq!(fs::read_to_string(temp.path().join("package.json")).unwrap(), "{}");
}

#[test]
fn version_and_help_exit_successfully() {
    let version = fixer().arg("--version").output().unwrap();
    assert_eq!(version.status.code(), Some(0));
    assert!(String::from_utf8(version.stdout).unwrap().contains("frontend-fixer"));

    let help = fixer().arg("--help").output().unwrap();
    assert_eq!(help.status.code(), Some(0));
}
