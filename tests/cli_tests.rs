//! Integration tests for the pagerank binary

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pagerank_cmd() -> Command {
    Command::cargo_bin("pagerank").unwrap()
}

fn create_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    let pages = [
        ("1.html", r#"<a href="2.html">2</a>"#),
        ("2.html", r#"<a href="1.html">1</a> <a href="3.html">3</a>"#),
        ("3.html", r#"<a href="2.html">2</a> <a href="4.html">4</a>"#),
        ("4.html", r#"<a href="2.html">2</a>"#),
    ];
    for (name, body) in pages {
        fs::write(dir.path().join(name), format!("<html><body>{body}</body></html>")).unwrap();
    }
    dir
}

#[test]
fn test_text_output() {
    let corpus = create_corpus();

    pagerank_cmd()
        .arg(corpus.path())
        .args(["--samples", "2000", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PageRank Results from Sampling (n = 2000)"))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::is_match(r"  2\.html: 0\.\d{4}").unwrap());
}

#[test]
fn test_json_output() {
    let corpus = create_corpus();

    let output = pagerank_cmd()
        .arg(corpus.path())
        .args(["--samples", "500", "--seed", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["samples"], 500);
    for key in ["sampling", "iteration"] {
        let ranked: Vec<(String, f64)> = serde_json::from_value(report[key].clone()).unwrap();
        assert_eq!(ranked.len(), 4);
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
        let total: f64 = ranked.iter().map(|(_, rank)| rank).sum();
        assert!((total - 1.0).abs() < 0.001);
    }

    // 2.html is linked from every other page
    let iteration: Vec<(String, f64)> =
        serde_json::from_value(report["iteration"].clone()).unwrap();
    assert_eq!(iteration[0].0, "2.html");
}

#[test]
fn test_config_file_and_override() {
    let corpus = create_corpus();
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("rank.json");
    fs::write(&config_path, r#"{"samples": 300, "seed": 9}"#).unwrap();

    pagerank_cmd()
        .arg(corpus.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(n = 300)"));

    pagerank_cmd()
        .arg(corpus.path())
        .arg("--config")
        .arg(&config_path)
        .args(["--samples", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(n = 400)"));
}

#[test]
fn test_invalid_damping_fails() {
    let corpus = create_corpus();

    pagerank_cmd()
        .arg(corpus.path())
        .args(["--damping", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Damping factor"));
}

#[test]
fn test_empty_corpus_fails() {
    let corpus = TempDir::new().unwrap();

    pagerank_cmd()
        .arg(corpus.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pages"));
}
