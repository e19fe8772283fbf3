//! Core audit engine.
//!
//! The audit runs as three linear stages, each consuming the previous
//! stage's output as an immutable value:
//!
//! 1. **Load**: read both locale files and flatten them into key sets
//!    (`locale`, `flatten`)
//! 2. **Scan**: walk the source tree and collect literal translation calls
//!    (`scanner`)
//! 3. **Compare**: diff the locale key sets against each other and against
//!    the collected usages (`compare`)
//!
//! Recoverable failures (missing or malformed locale files, unreadable
//! source files) are carried as warnings next to the data instead of
//! aborting the run.

pub mod compare;
pub mod flatten;
pub mod locale;
pub mod scanner;

pub use compare::{LocaleDiff, UsageBuckets, classify_usages};
pub use flatten::{KeySet, flatten, key_set};
pub use locale::{LoadWarning, LoadedLocale, load_locale, locale_label};
pub use scanner::{
    IgnoreRules, KeyUsage, ScanResult, ScanWarning, TranslationCallPattern,
    collect_source_files, scan_source_files,
};
