//! Key comparison between the two locales and between code and locales.

use super::{flatten::KeySet, scanner::KeyUsage};

/// Keys defined in one locale but not the other.
///
/// `missing_in_b` (A - B) and `missing_in_a` (B - A) are kept apart: they
/// point at different files to fix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDiff {
    /// Keys in locale A that locale B lacks, sorted.
    pub missing_in_b: Vec<String>,
    /// Keys in locale B that locale A lacks, sorted.
    pub missing_in_a: Vec<String>,
}

impl LocaleDiff {
    pub fn new(a: &KeySet, b: &KeySet) -> Self {
        Self {
            missing_in_b: a.difference(b).cloned().collect(),
            missing_in_a: b.difference(a).cloned().collect(),
        }
    }

    /// Number of keys out of sync, counting both directions.
    pub fn len(&self) -> usize {
        self.missing_in_a.len() + self.missing_in_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missing_in_a.is_empty() && self.missing_in_b.is_empty()
    }
}

/// Code usages grouped by which locale lacks their key.
///
/// Usages whose key exists in both locales are not kept. Within a bucket
/// the scan order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageBuckets<'a> {
    pub missing_in_both: Vec<&'a KeyUsage>,
    pub missing_in_a: Vec<&'a KeyUsage>,
    pub missing_in_b: Vec<&'a KeyUsage>,
}

impl UsageBuckets<'_> {
    /// Number of usages missing from at least one locale.
    pub fn len(&self) -> usize {
        self.missing_in_both.len() + self.missing_in_a.len() + self.missing_in_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missing_in_both.is_empty() && self.missing_in_a.is_empty() && self.missing_in_b.is_empty()
    }
}

/// Classify each usage against the key sets of locale A and locale B.
pub fn classify_usages<'a>(usages: &'a [KeyUsage], a: &KeySet, b: &KeySet) -> UsageBuckets<'a> {
    let mut buckets = UsageBuckets::default();

    for usage in usages {
        match (a.contains(&usage.key), b.contains(&usage.key)) {
            (false, false) => buckets.missing_in_both.push(usage),
            (false, true) => buckets.missing_in_a.push(usage),
            (true, false) => buckets.missing_in_b.push(usage),
            (true, true) => {}
        }
    }

    buckets
}
