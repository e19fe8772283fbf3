//! Source scanning for literal translation calls.
//!
//! Files are discovered with a depth-first walk sorted by file name, so the
//! order of usages (and therefore of the report) is the same on every run.
//! Calls are found with a regular expression, not a parser: only calls
//! whose single argument is a quoted string literal are recognized.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

/// Extensions of files that are scanned for translation calls.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Marker that starts an embedded expression in a template literal.
const INTERPOLATION_MARKER: &str = "${";

/// One literal translation call found in source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub key: String,
    pub file_path: PathBuf,
    /// 1-based line number.
    pub line: usize,
}

/// A file or directory entry that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub usages: Vec<KeyUsage>,
    pub warnings: Vec<ScanWarning>,
    pub files_scanned: usize,
}

/// Matches `name('key')`, `name("key")` and ``name(`key`)`` for a set of
/// translation function names.
///
/// A name starting with a word character must start on a word boundary, so
/// `i18n.t('key')` matches the name `t` while `split('key')` does not. A
/// name starting with any other character (`$t`) must not directly follow a
/// word character.
#[derive(Debug, Clone)]
pub struct TranslationCallPattern {
    regex: Regex,
}

impl TranslationCallPattern {
    pub fn new(function_names: &[String]) -> Result<Self> {
        let alternatives = function_names
            .iter()
            .map(|name| {
                let name = name.trim();
                let guard = if name.starts_with(is_word_char) { r"\b" } else { r"\B" };
                format!("{}{}", guard, regex::escape(name))
            })
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r#"(?:{})\(\s*['"`]([^'"`]+)['"`]\s*\)"#, alternatives);
        let regex = Regex::new(&source)
            .with_context(|| format!("Failed to build translation call pattern: {}", source))?;
        Ok(Self { regex })
    }

    /// All static keys called on `line`, in order of appearance.
    ///
    /// Keys containing `${` are dynamic and skipped.
    pub fn keys_in_line<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|key| !key.contains(INTERPOLATION_MARKER))
    }
}

/// Paths skipped while walking the source tree.
///
/// Entries containing glob metacharacters (`*`, `?`, `[`) are globs, matched
/// against both the absolute path and the path relative to `base_dir`.
/// Any other entry is a literal path under `base_dir` and skips everything
/// beneath it.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    base_dir: PathBuf,
    literal_paths: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreRules {
    pub fn new(base_dir: &Path, entries: &[String]) -> Result<Self> {
        let mut literal_paths = Vec::new();
        let mut globs = Vec::new();

        for entry in entries {
            if is_glob_pattern(entry) {
                let pattern = Pattern::new(entry)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", entry))?;
                globs.push(pattern);
            } else {
                literal_paths.push(base_dir.join(entry).components().collect());
            }
        }

        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            literal_paths,
            globs,
        })
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }

        let absolute = path.to_string_lossy();
        let relative = path
            .strip_prefix(&self.base_dir)
            .ok()
            .map(|rel| rel.to_string_lossy());
        self.globs.iter().any(|p| {
            p.matches(&absolute) || relative.as_deref().is_some_and(|rel| p.matches(rel))
        })
    }
}

fn is_glob_pattern(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}

/// Collect every source file under `root`, depth-first in file-name order.
///
/// Entries matched by `ignores` are skipped, and ignored directories are not
/// descended into. Directory entries that cannot be accessed are reported as
/// warnings.
pub fn collect_source_files(root: &Path, ignores: &IgnoreRules) -> (Vec<PathBuf>, Vec<ScanWarning>) {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !ignores.is_ignored(entry.path()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let file_path = e
                    .path()
                    .unwrap_or(root)
                    .to_string_lossy()
                    .to_string();
                warnings.push(ScanWarning {
                    file_path,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_file() && is_scannable_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    (files, warnings)
}

/// Scan `files` line by line for literal translation calls.
///
/// A file that cannot be read is recorded as a warning and skipped; the
/// remaining files are still scanned.
pub fn scan_source_files(files: &[PathBuf], pattern: &TranslationCallPattern) -> ScanResult {
    let mut result = ScanResult::default();

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                result.warnings.push(ScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        result.files_scanned += 1;
        for (index, line) in content.lines().enumerate() {
            result
                .usages
                .extend(pattern.keys_in_line(line).map(|key| KeyUsage {
                    key: key.to_string(),
                    file_path: path.clone(),
                    line: index + 1,
                }));
        }
    }

    result
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
