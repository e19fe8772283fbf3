//! locale-audit - translation key audit for two-locale projects
//!
//! locale-audit is a CLI tool and library that compares two locale JSON
//! files and scans JavaScript/TypeScript sources for `t('key')` calls. It
//! reports keys defined in one locale but not the other, and keys used in
//! code that a locale does not define.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Audit engine (load and flatten, scan, compare)

pub mod cli;
pub mod config;
pub mod core;
