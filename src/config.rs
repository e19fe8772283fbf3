use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::IgnoreRules;

pub const CONFIG_FILE_NAME: &str = ".localeauditrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locale_a_path")]
    pub locale_a_path: String,
    #[serde(default = "default_locale_b_path")]
    pub locale_b_path: String,
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    /// Names of translation functions whose literal arguments are collected.
    #[serde(default = "default_translation_functions")]
    pub translation_functions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_locale_a_path() -> String {
    "messages/vi.json".to_string()
}

fn default_locale_b_path() -> String {
    "messages/en.json".to_string()
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_base_dir() -> String {
    ".".to_string()
}

fn default_translation_functions() -> Vec<String> {
    vec!["t".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_a_path: default_locale_a_path(),
            locale_b_path: default_locale_b_path(),
            source_dir: default_source_dir(),
            base_dir: default_base_dir(),
            translation_functions: default_translation_functions(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if no usable translation function name is
    /// configured. Ignore patterns are checked when compiled by
    /// [`Config::ignore_rules`].
    pub fn validate(&self) -> Result<()> {
        if self.translation_functions.is_empty() {
            bail!("'translationFunctions' must name at least one function");
        }
        if let Some(name) = self
            .translation_functions
            .iter()
            .find(|name| name.trim().is_empty())
        {
            bail!(
                "Invalid name in 'translationFunctions': \"{}\" (names must not be blank)",
                name
            );
        }

        Ok(())
    }

    /// Compile `ignores`, resolving literal entries against `root`.
    pub fn ignore_rules(&self, root: &Path) -> Result<IgnoreRules> {
        IgnoreRules::new(root, &self.ignores)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative paths in `config` are resolved against:
    /// the directory holding the config file, or the start directory.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// `config.ignores`, compiled against `root`.
    pub ignores: IgnoreRules,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            let ignores = config.ignore_rules(&root)?;
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
                ignores,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
            ignores: IgnoreRules::default(),
        }),
    }
}

/// Join `path` onto `root` unless it is already absolute, dropping `.`
/// components so printed paths stay clean.
pub fn resolve_path(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    root.join(path).components().collect()
}
