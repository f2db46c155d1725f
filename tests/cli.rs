use assert_cmd::Command;
use predicates::prelude::*;

fn audioscribe() -> Command {
    let mut cmd = Command::cargo_bin("audioscribe").unwrap();
    cmd.env_remove("OPENAI_API_KEY");
    cmd
}

#[test]
fn missing_input_argument_prints_usage_and_fails() {
    audioscribe()
        .arg("--api-key")
        .arg("test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_api_key_is_reported() {
    audioscribe()
        .arg("some-audio.mp3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-key"));
}

#[test]
fn nonexistent_input_is_rejected() {
    audioscribe()
        .arg("definitely-not-a-real-file.mp3")
        .arg("--api-key")
        .arg("test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn directory_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    audioscribe()
        .arg(dir.path())
        .arg("--api-key")
        .arg("test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a file"));
}
