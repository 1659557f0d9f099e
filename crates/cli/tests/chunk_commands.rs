use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

#[allow(deprecated)]
fn rag_chunk() -> Command {
    let mut cmd = Command::cargo_bin("rag-chunk").expect("binary");
    cmd.env_remove("CHUNK_SIZE")
        .env_remove("CHUNK_OVERLAP")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("valid json")
}

fn chunk_ids(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("chunk array")
        .iter()
        .map(|c| c["chunk_id"].as_str().unwrap().to_string())
        .collect()
}

fn numbered_words(count: usize) -> String {
    (1..=count)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn text_from_file_uses_path_as_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, numbered_words(160)).unwrap();

    let output = rag_chunk()
        .args(["--chunk-size", "100", "--overlap", "20", "text"])
        .arg(&path)
        .args(["--id", "d1"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body = stdout_json(&output);
    assert_eq!(chunk_ids(&body), vec!["d1#1", "d1#2", "d1#3"]);
    assert_eq!(body[0]["source"], path.display().to_string());
    assert!(body[1]["text"].as_str().unwrap().starts_with("w61 w62"));
    assert!(body[2]["text"].as_str().unwrap().ends_with("w159 w160"));
}

#[test]
fn text_from_stdin_defaults_source_and_id() {
    let output = rag_chunk()
        .arg("text")
        .write_stdin("  Orders placed before 2 PM EST\n ship same day. ")
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body = stdout_json(&output);
    assert_eq!(
        body,
        serde_json::json!([{
            "chunk_id": "doc#1",
            "source": "unknown",
            "text": "Orders placed before 2 PM EST ship same day."
        }])
    );
}

#[test]
fn blank_text_yields_empty_array() {
    rag_chunk()
        .arg("text")
        .write_stdin(" \n\t ")
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn batch_keeps_document_order() {
    let docs = serde_json::json!([
        {"text": numbered_words(40), "source": "a.txt", "chunk_id": "a"},
        {"text": "short one", "source": "b.txt", "chunk_id": "b"},
        {"text": "no metadata"}
    ]);

    let output = rag_chunk()
        .args(["--chunk-size", "40", "--overlap", "12", "batch"])
        .write_stdin(docs.to_string())
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body = stdout_json(&output);
    assert_eq!(chunk_ids(&body), vec!["a#1", "a#2", "b#1", "doc#1"]);
    assert_eq!(body[3]["source"], "unknown");
}

#[test]
fn seed_corpus_command() {
    let output = rag_chunk().arg("seed").output().expect("command run");
    assert!(output.status.success());

    assert_eq!(
        chunk_ids(&stdout_json(&output)),
        vec![
            "policy_returns_v1#1",
            "policy_shipping_v1#1",
            "sizing_guide_v1#1",
            "support_contact_v1#1",
        ]
    );
}

#[test]
fn config_reflects_env_and_flags() {
    let output = rag_chunk()
        .env("CHUNK_SIZE", "200")
        .env("CHUNK_OVERLAP", "40")
        .arg("config")
        .output()
        .expect("command run");
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({
            "chunk_size": 200,
            "overlap": 40,
            "words_per_chunk": 150,
            "overlap_words": 30
        })
    );

    let output = rag_chunk()
        .env("CHUNK_SIZE", "200")
        .args(["--chunk-size", "100", "config"])
        .output()
        .expect("command run");
    assert_eq!(stdout_json(&output)["words_per_chunk"], 75);
}

#[test]
fn config_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chunker.toml");
    fs::write(&path, "chunk_size = 64\nchunk_overlap = 8\n").unwrap();

    let output = rag_chunk()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .output()
        .expect("command run");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["words_per_chunk"], 48);
    assert_eq!(stdout_json(&output)["overlap_words"], 6);
}

#[test]
fn invalid_configuration_fails_fast() {
    rag_chunk()
        .args(["--chunk-size", "100", "--overlap", "100", "seed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be smaller than chunk_size"));

    rag_chunk()
        .env("CHUNK_SIZE", "lots")
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CHUNK_SIZE"));
}

#[test]
fn malformed_batch_is_reported() {
    rag_chunk()
        .arg("batch")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse documents JSON"));
}
