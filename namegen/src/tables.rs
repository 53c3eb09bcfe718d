//! Name Table Registry
//!
//! Static fragment lists for each language category. The registry is built
//! once and never mutated afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{NameError, Result};

// ============================================================================
// Fragment Data
// ============================================================================

const LATIN_PREFIXES: &[&str] = &[
    "Aur", "Caes", "Dec", "Flav", "Jul", "Luc", "Marc", "Oct", "Pub", "Tit",
];
const LATIN_SUFFIXES: &[&str] = &[
    "ius", "us", "a", "illa", "inus", "or", "ix", "ena", "ana", "ianus",
];
const LATIN_MIDDLES: &[&str] = &["el", "ian", "il", "in", "on"];

const GREEK_PREFIXES: &[&str] = &[
    "Alex", "Andr", "Call", "Dem", "Hel", "Phil", "Soph", "The", "Xen", "Zer",
];
const GREEK_SUFFIXES: &[&str] = &[
    "os", "us", "is", "as", "es", "ia", "ion", "or", "us", "ius",
];
const GREEK_MIDDLES: &[&str] = &["and", "ip", "op", "eth"];

const NORSE_PREFIXES: &[&str] = &[
    "Bjor", "Eir", "Frey", "Gun", "Heim", "Ing", "Sig", "Thor", "Ulf", "Yng",
];
const NORSE_SUFFIXES: &[&str] = &[
    "ald", "ar", "ild", "ulf", "und", "or", "ir", "mar", "mund", "rid",
];
const NORSE_MIDDLES: &[&str] = &["grim", "rik", "vig", "bjorn"];

const EGYPTIAN_PREFIXES: &[&str] = &[
    "Amen", "Hor", "Khen", "Men", "Nef", "Ptah", "Ra", "Set", "Thut", "Wes",
];
const EGYPTIAN_SUFFIXES: &[&str] = &[
    "hotep", "amon", "mose", "ankh", "ari", "tet", "is", "ut", "em", "ra",
];
const EGYPTIAN_MIDDLES: &[&str] = &["en", "ka", "ma", "nu"];

const SANSKRIT_PREFIXES: &[&str] = &[
    "Abhi", "Adi", "Dev", "Hari", "Ind", "Kris", "Mah", "Raj", "Sur", "Vish",
];
const SANSKRIT_SUFFIXES: &[&str] = &[
    "ant", "it", "ana", "a", "i", "am", "an", "ya", "raj", "dev",
];
const SANSKRIT_MIDDLES: &[&str] = &["esh", "end", "ath", "ang"];

// ============================================================================
// Registry
// ============================================================================

/// Fragments for a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FragmentTable {
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    /// May be empty; a category without middles always yields prefix + suffix
    pub middles: &'static [&'static str],
}

impl FragmentTable {
    pub fn has_middles(&self) -> bool {
        !self.middles.is_empty()
    }
}

/// Category name -> fragment table
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct NameTables {
    tables: BTreeMap<&'static str, FragmentTable>,
}

impl NameTables {
    /// Registry with the five built-in ancient language categories
    pub fn ancient() -> Self {
        let entries = [
            ("Latin", LATIN_PREFIXES, LATIN_SUFFIXES, LATIN_MIDDLES),
            ("Greek", GREEK_PREFIXES, GREEK_SUFFIXES, GREEK_MIDDLES),
            ("Norse", NORSE_PREFIXES, NORSE_SUFFIXES, NORSE_MIDDLES),
            ("Egyptian", EGYPTIAN_PREFIXES, EGYPTIAN_SUFFIXES, EGYPTIAN_MIDDLES),
            ("Sanskrit", SANSKRIT_PREFIXES, SANSKRIT_SUFFIXES, SANSKRIT_MIDDLES),
        ];

        let tables = entries
            .into_iter()
            .map(|(name, prefixes, suffixes, middles)| {
                (name, FragmentTable { prefixes, suffixes, middles })
            })
            .collect();

        Self { tables }
    }

    /// Registered category names, in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }

    /// Resolve a category to its fragments. Matching is exact.
    pub fn lookup(&self, category: &str) -> Result<&FragmentTable> {
        self.tables
            .get(category)
            .ok_or_else(|| NameError::UnknownCategory(category.to_string()))
    }

    pub fn contains(&self, category: &str) -> bool {
        self.tables.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FragmentTable)> + '_ {
        self.tables.iter().map(|(name, table)| (*name, table))
    }
}

impl Default for NameTables {
    fn default() -> Self {
        Self::ancient()
    }
}
