use assert_cmd::Command;
use tempfile::TempDir;

pub fn icontacts(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("icontacts").unwrap();
    cmd.current_dir(data_dir.path())
        .env("ICONTACTS_STORAGE", "file")
        .env("ICONTACTS_DATA_DIR", data_dir.path().join(".instance"))
        .env_remove("RUST_LOG");
    cmd
}

pub fn add(data_dir: &TempDir, first: &str, last: &str, phone: &str) {
    icontacts(data_dir)
        .args(["add", "--first-name", first, "--last-name", last, "--phone", phone])
        .assert()
        .success();
}

/// Runs `list` and returns its stdout.
pub fn list(data_dir: &TempDir, sort: &str) -> String {
    let output = icontacts(data_dir)
        .args(["list", "--sort", sort])
        .output()
        .unwrap();
    String::from_utf8(output.stdout).unwrap()
}

/// Id printed at the end of the first row mentioning `name`.
pub fn id_of(data_dir: &TempDir, name: &str) -> String {
    list(data_dir, "first")
        .lines()
        .find(|line| line.contains(name))
        .and_then(|line| line.split_whitespace().last())
        .unwrap()
        .to_string()
}
