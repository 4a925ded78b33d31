//! Hygiene: source-level coding standards for the client crate.
//!
//! Scans production sources under `src/` (sibling `*_test.rs` files are
//! skipped) for patterns that panic in the browser or drop errors silently.
//! Each pattern has a budget; budgets only shrink.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, max occurrences, why it is budgeted)`.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics the WASM module"),
    (".expect(", 0, "panics the WASM module"),
    ("panic!(", 0, "panics the WASM module"),
    ("unreachable!(", 0, "panics the WASM module"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "discards the error of a Result"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Browser storage is only touched through this module.
const STORAGE_MODULE: &str = "storage.rs";

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

/// Per-file line counts containing `pattern`, files with no hits omitted.
fn hits<'a>(sources: impl IntoIterator<Item = &'a (PathBuf, String)>, pattern: &str) -> Vec<(String, usize)> {
    sources
        .into_iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect()
}

fn report(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    assert!(
        production_sources().iter().any(|(path, _)| path.ends_with("lib.rs")),
        "hygiene scan found no sources; run from the client crate root"
    );
}

#[test]
fn pattern_budgets() {
    let sources = production_sources();
    let over: Vec<String> = BUDGETS
        .iter()
        .filter_map(|&(pattern, max, why)| {
            let found = hits(&sources, pattern);
            let count: usize = found.iter().map(|(_, c)| c).sum();
            (count > max).then(|| format!("`{pattern}` ({why}): found {count}, max {max}\n{}", report(&found)))
        })
        .collect();
    assert!(over.is_empty(), "budget exceeded:\n{}", over.join("\n"));
}

#[test]
fn local_storage_confined_to_storage_module() {
    let sources = production_sources();
    let outside = sources.iter().filter(|(path, _)| !path.ends_with(STORAGE_MODULE));
    let found = hits(outside, "local_storage(");
    assert!(
        found.is_empty(),
        "localStorage accessed outside {STORAGE_MODULE}; go through PreferenceStorage instead.\n{}",
        report(&found)
    );
}
