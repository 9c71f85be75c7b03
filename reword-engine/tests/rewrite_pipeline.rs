//! End-to-end tests for loading rule files and rewriting text files

use proptest::prelude::*;
use reword_engine::{Backend, EngineError, Input, Rewriter};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_rewrite_files_with_every_backend() {
    let dir = TempDir::new().unwrap();
    let rules = write_file(&dir, "rules.txt", "cat -> dog\ndog -> fish\n");
    let input = write_file(&dir, "input.txt", "The cat sat.\nMy dog, 2 cats\n");

    for backend in Backend::ALL {
        let mut rewriter = Rewriter::new(backend);
        rewriter.load_rules(Input::from_file(&rules)).unwrap();
        let output = rewriter.rewrite(Input::from_file(&input)).unwrap();

        assert_eq!(output.text, "The dog sat.\nMy fish, 2 cats\n", "backend {backend}");
    }
}

#[test]
fn test_cycle_fails_then_first_rule_alone_succeeds() {
    let dir = TempDir::new().unwrap();
    let cyclic = write_file(&dir, "cyclic.txt", "x -> y\ny -> x\n");
    let single = write_file(&dir, "single.txt", "x -> y\n");

    let mut rewriter = Rewriter::new(Backend::Hash);
    let err = rewriter.load_rules(Input::from_file(&cyclic)).unwrap_err();
    assert!(err.is_cycle());
    assert!(err.to_string().contains("y -> x"));

    let mut fresh = Rewriter::new(Backend::Hash);
    let report = fresh.load_rules(Input::from_file(&single)).unwrap();
    assert_eq!(report.accepted, 1);
    assert_eq!(fresh.rewrite_text("x"), "y\n");
}

#[test]
fn test_missing_rules_file() {
    let mut rewriter = Rewriter::new(Backend::Bst);
    let err = rewriter
        .load_rules(Input::from_file("/nonexistent/rules.txt"))
        .unwrap_err();

    assert!(matches!(err, EngineError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/rules.txt"));
    assert!(rewriter.store().is_empty());
}

#[test]
fn test_invalid_utf8_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, [b'o', b'k', b'\n', 0xc3, 0x28, b'\n']).unwrap();

    let rewriter = Rewriter::new(Backend::RbTree);
    let err = rewriter.rewrite(Input::from_file(&path)).unwrap_err();
    assert!(matches!(err, EngineError::Io { .. }));
}

#[test]
fn test_crlf_rules_and_text() {
    let mut rewriter = Rewriter::new(Backend::Bst);
    rewriter
        .load_rules(Input::from_text("one -> uno\r\ntwo -> dos\r\n"))
        .unwrap();

    let output = rewriter
        .rewrite(Input::from_text("one two\r\nthree\r\n"))
        .unwrap();
    assert_eq!(output.text, "uno dos\nthree\n");
}

#[test]
fn test_lone_carriage_return_ends_line() {
    let dir = TempDir::new().unwrap();
    let rules = write_file(&dir, "rules.txt", "c -> d\r");
    let text = write_file(&dir, "input.txt", "c\rc");

    let mut rewriter = Rewriter::new(Backend::Hash);
    rewriter.load_rules(Input::from_file(rules)).unwrap();
    let output = rewriter.rewrite(Input::from_file(text)).unwrap();

    assert_eq!(output.text, "d\nd\n");
    assert_eq!(output.metadata.lines, 2);
    assert_eq!(output.metadata.replacements, 2);
}

#[test]
fn test_rewrite_from_reader() {
    let mut rewriter = Rewriter::builder()
        .backend(Backend::Hash)
        .delimiter("=")
        .build()
        .unwrap();
    rewriter.load_rules(Input::from_text("hello = goodbye")).unwrap();

    let reader = std::io::Cursor::new(b"hello, world".to_vec());
    let output = rewriter.rewrite(Input::from_reader(reader)).unwrap();
    assert_eq!(output.text, "goodbye, world\n");
}

proptest! {
    #[test]
    fn backends_rewrite_identically(
        rules in prop::collection::vec(("[a-d]{1,2}", "[a-d]{1,2}"), 0..24),
        text in "[a-d0-9 .,]{0,80}",
    ) {
        let rules_text: String = rules
            .iter()
            .map(|(k, v)| format!("{k} -> {v}\n"))
            .collect();

        let results: Vec<std::result::Result<String, String>> = Backend::ALL
            .iter()
            .map(|backend| {
                let mut rewriter = Rewriter::new(*backend);
                rewriter
                    .load_rules(Input::from_text(rules_text.clone()))
                    .map_err(|e| e.to_string())?;
                Ok(rewriter.rewrite_text(&text))
            })
            .collect();

        prop_assert!(results.iter().all(|r| r == &results[0]));
    }
}
