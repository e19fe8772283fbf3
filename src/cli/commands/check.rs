use std::path::{Path, PathBuf};

use anyhow::Result;

use super::super::args::{CheckCommand, PathArgs};
use super::CommandResult;
use crate::{
    config::{Config, load_config, resolve_path},
    core::{
        IgnoreRules, KeySet, LoadedLocale, LocaleDiff, ScanResult, TranslationCallPattern, UsageBuckets,
        classify_usages, collect_source_files, load_locale, scan_source_files,
    },
};

/// Absolute locations the audit works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditPaths {
    pub locale_a: PathBuf,
    pub locale_b: PathBuf,
    pub source_dir: PathBuf,
    /// Reported file locations are shown relative to this directory.
    pub base_dir: PathBuf,
}

impl AuditPaths {
    /// Resolve config paths against `config_root` and CLI overrides
    /// against `cwd`.
    pub fn resolve(config: &Config, config_root: &Path, overrides: &PathArgs, cwd: &Path) -> Self {
        let pick = |over: &Option<PathBuf>, configured: &str| match over {
            Some(path) => resolve_path(cwd, path),
            None => resolve_path(config_root, configured),
        };

        Self {
            locale_a: pick(&overrides.locale_a, &config.locale_a_path),
            locale_b: pick(&overrides.locale_b, &config.locale_b_path),
            source_dir: pick(&overrides.source_dir, &config.source_dir),
            base_dir: pick(&overrides.base_dir, &config.base_dir),
        }
    }
}

/// Everything the reporter needs from one audit run.
#[derive(Debug)]
pub struct AuditReport {
    pub paths: AuditPaths,
    pub locale_a: LoadedLocale,
    pub locale_b: LoadedLocale,
    pub keys_a: KeySet,
    pub keys_b: KeySet,
    pub diff: LocaleDiff,
    pub scan: ScanResult,
}

impl AuditReport {
    /// Code usages grouped by the locale(s) missing their key.
    pub fn buckets(&self) -> UsageBuckets<'_> {
        classify_usages(&self.scan.usages, &self.keys_a, &self.keys_b)
    }
}

/// Run the audit: load both locales, scan the source tree, compare.
///
/// Unreadable inputs are recorded as warnings in the report. An error is
/// only returned when the configuration itself is unusable.
pub fn run_audit(paths: AuditPaths, config: &Config, ignores: &IgnoreRules) -> Result<AuditReport> {
    let pattern = TranslationCallPattern::new(&config.translation_functions)?;

    let locale_a = load_locale(&paths.locale_a);
    let locale_b = load_locale(&paths.locale_b);
    let keys_a = locale_a.keys();
    let keys_b = locale_b.keys();
    let diff = LocaleDiff::new(&keys_a, &keys_b);

    let (files, walk_warnings) = collect_source_files(&paths.source_dir, ignores);
    let mut scan = scan_source_files(&files, &pattern);
    if !walk_warnings.is_empty() {
        scan.warnings.splice(0..0, walk_warnings);
    }

    Ok(AuditReport {
        paths,
        locale_a,
        locale_b,
        keys_a,
        keys_b,
        diff,
        scan,
    })
}

pub fn check(cmd: &CheckCommand, cwd: &Path) -> Result<CommandResult> {
    let loaded = load_config(cwd)?;
    let paths = AuditPaths::resolve(&loaded.config, &loaded.root, &cmd.paths, cwd);
    let report = run_audit(paths, &loaded.config, &loaded.ignores)?;
    Ok(CommandResult::Check(Box::new(report)))
}
