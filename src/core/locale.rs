use std::{fmt, fs, io, path::Path};

use serde_json::{Map, Value};

use super::flatten::{KeySet, key_set};

/// Why a locale file could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    NotFound { file_path: String },
    InvalidJson { file_path: String, error: String },
    Unreadable { file_path: String, error: String },
}

impl LoadWarning {
    pub fn file_path(&self) -> &str {
        match self {
            LoadWarning::NotFound { file_path }
            | LoadWarning::InvalidJson { file_path, .. }
            | LoadWarning::Unreadable { file_path, .. } => file_path,
        }
    }

    /// The warning message with the file shown as `display_path`.
    pub fn message(&self, display_path: &str) -> String {
        match self {
            LoadWarning::NotFound { .. } => format!("File not found: {}", display_path),
            LoadWarning::InvalidJson { error, .. } => {
                format!("Invalid JSON in {}: {}", display_path, error)
            }
            LoadWarning::Unreadable { error, .. } => {
                format!("Failed to read {}: {}", display_path, error)
            }
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(self.file_path()))
    }
}

/// A locale file after loading. The document is an empty object when
/// loading failed, so callers can always flatten it.
#[derive(Debug, Clone)]
pub struct LoadedLocale {
    pub label: String,
    pub file_path: String,
    pub document: Value,
    pub warning: Option<LoadWarning>,
}

impl LoadedLocale {
    pub fn keys(&self) -> KeySet {
        key_set(&self.document)
    }
}

/// Load a locale JSON file.
///
/// Never fails: a missing, unreadable or malformed file yields an empty
/// document together with a [`LoadWarning`] describing the problem.
pub fn load_locale(path: &Path) -> LoadedLocale {
    let file_path = path.to_string_lossy().to_string();
    let label = locale_label(path);

    let (document, warning) = match read_document(path, &file_path) {
        Ok(document) => (document, None),
        Err(warning) => (Value::Object(Map::new()), Some(warning)),
    };

    LoadedLocale {
        label,
        file_path,
        document,
        warning,
    }
}

fn read_document(path: &Path, file_path: &str) -> Result<Value, LoadWarning> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadWarning::NotFound {
            file_path: file_path.to_string(),
        },
        _ => LoadWarning::Unreadable {
            file_path: file_path.to_string(),
            error: e.to_string(),
        },
    })?;

    serde_json::from_str(&content).map_err(|e| LoadWarning::InvalidJson {
        file_path: file_path.to_string(),
        error: e.to_string(),
    })
}

/// Display label for a locale file: its upper-cased file stem.
///
/// Examples:
/// - "en.json" -> "EN"
/// - "/path/to/messages/zh-CN.json" -> "ZH-CN"
pub fn locale_label(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().to_uppercase())
        .unwrap_or_else(|| path.as_ref().to_string_lossy().to_string())
}
