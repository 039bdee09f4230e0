//! Source scanning for the layering contract tests.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A source line that breaks a layering rule.
pub struct Violation {
    pub file: String,
    pub line: usize,
    pub text: String,
}

impl fmt::Debug for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.text.trim())
    }
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Every `.rs` file under `src/<layer>`, sorted. An empty layer is all of `src`.
fn sources(layer: &str) -> Vec<PathBuf> {
    let mut pending = vec![crate_root().join("src").join(layer)];
    let mut files = Vec::new();
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", dir.display()));
        for entry in entries {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

/// Numbered lines of every source file under `src/<layer>`.
fn source_lines(layer: &str) -> impl Iterator<Item = (PathBuf, usize, String)> {
    sources(layer).into_iter().flat_map(|path| {
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        lines
            .into_iter()
            .enumerate()
            .map(move |(idx, text)| (path.clone(), idx + 1, text))
    })
}

fn violation(path: &Path, line: usize, text: String) -> Violation {
    let file = path
        .strip_prefix(crate_root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");
    Violation { file, line, text }
}

/// Code lines under `src/<layer>` that mention any of `forbidden`.
/// Comments are not code and never count.
pub fn forbidden_references(layer: &str, forbidden: &[&str]) -> Vec<Violation> {
    source_lines(layer)
        .filter(|(_, _, text)| !text.trim_start().starts_with("//"))
        .filter(|(_, _, text)| forbidden.iter().any(|pattern| text.contains(pattern)))
        .map(|(path, line, text)| violation(&path, line, text))
        .collect()
}

/// Lines of `mod.rs` files that are neither module declarations nor
/// re-exports.
pub fn mod_rs_logic() -> Vec<Violation> {
    let mut in_reexport = false;
    source_lines("")
        .filter(|(path, _, _)| path.file_name().is_some_and(|name| name == "mod.rs"))
        .filter(|(_, _, text)| {
            let line = text.trim();
            if in_reexport || line.starts_with("pub use ") {
                in_reexport = !line.ends_with(';');
                return false;
            }
            !(line.is_empty()
                || line.starts_with("//")
                || line.starts_with("pub mod ")
                || line.starts_with("mod ")
                || line.starts_with("#[cfg"))
        })
        .map(|(path, line, text)| violation(&path, line, text))
        .collect()
}

/// Whether `src/<relative>` exists.
pub fn source_exists(relative: &str) -> bool {
    crate_root().join("src").join(relative).exists()
}
