//! Name Composer
//!
//! Assembles names by drawing one prefix, an optional middle fragment and
//! one suffix from a category's tables. The random source is always supplied
//! by the caller, so a seeded `StdRng` gives reproducible output.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::tables::{FragmentTable, NameTables};

/// Chance of inserting a middle fragment when the category has any
pub const DEFAULT_MIDDLE_CHANCE: f64 = 0.5;

// ============================================================================
// Gender
// ============================================================================

/// Gender preference collected by the front end.
///
/// The fragment tables are not split by gender, so this value never changes
/// which fragments are drawn. It is carried through to the composer and
/// logged, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unisex,
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    /// Accepts the menu digits `1`-`3` or the words. Anything else is Unisex.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let gender = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "m" | "male" => Gender::Male,
            "2" | "f" | "female" => Gender::Female,
            _ => Gender::Unisex,
        };
        Ok(gender)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unisex => "Unisex",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Generated Name
// ============================================================================

/// A composed name along with the fragments it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedName {
    name: String,
    prefix: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle: Option<&'static str>,
    suffix: &'static str,
}

impl GeneratedName {
    fn compose(prefix: &'static str, middle: Option<&'static str>, suffix: &'static str) -> Self {
        let mut name = String::with_capacity(
            prefix.len() + middle.map_or(0, str::len) + suffix.len(),
        );
        name.push_str(prefix);
        if let Some(middle) = middle {
            name.push_str(middle);
        }
        name.push_str(suffix);

        Self { name, prefix, middle, suffix }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn middle(&self) -> Option<&'static str> {
        self.middle
    }

    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    pub fn into_string(self) -> String {
        self.name
    }
}

impl fmt::Display for GeneratedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for GeneratedName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Composer
// ============================================================================

pub struct NameComposer<'a> {
    tables: &'a NameTables,
    middle_chance: f64,
}

impl<'a> NameComposer<'a> {
    pub fn new(tables: &'a NameTables) -> Self {
        Self {
            tables,
            middle_chance: DEFAULT_MIDDLE_CHANCE,
        }
    }

    /// Override the middle fragment probability, clamped to `0.0..=1.0`
    pub fn with_middle_chance(mut self, chance: f64) -> Self {
        self.middle_chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self
    }

    pub fn tables(&self) -> &'a NameTables {
        self.tables
    }

    /// Generate `count` names for `category`.
    ///
    /// Fails with `UnknownCategory` before drawing anything if the category
    /// is not registered. `count` is used as given; range limits belong to
    /// the caller. `gender` is accepted for the interface but does not
    /// influence the result.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: &str,
        gender: Gender,
        count: usize,
    ) -> Result<Vec<GeneratedName>> {
        let table = self.tables.lookup(category)?;
        debug!(category, %gender, count, "Generating names");

        let names = (0..count).map(|_| self.generate_one(rng, table)).collect();
        Ok(names)
    }

    /// Compose a single name from `table`
    pub fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R, table: &FragmentTable) -> GeneratedName {
        let prefix = table.prefixes[rng.gen_range(0..table.prefixes.len())];
        let suffix = table.suffixes[rng.gen_range(0..table.suffixes.len())];

        let middle = if table.has_middles() && rng.gen_bool(self.middle_chance) {
            Some(table.middles[rng.gen_range(0..table.middles.len())])
        } else {
            None
        };

        GeneratedName::compose(prefix, middle, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameError;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::collections::VecDeque;

    /// Hands out pre-scripted words. 0 maps to index 0 for `gen_range`;
    /// `u64::MAX` makes `gen_bool(0.5)` come up false.
    struct ScriptedRng(VecDeque<u64>);

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0.pop_front().expect("script exhausted")
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// Strip a known prefix and suffix; what's left must be empty or a middle
    fn matches_table(name: &str, table: &FragmentTable) -> bool {
        table.prefixes.iter().any(|prefix| {
            name.strip_prefix(prefix).map_or(false, |rest| {
                table.suffixes.iter().any(|suffix| {
                    rest.strip_suffix(suffix).map_or(false, |middle| {
                        middle.is_empty() || table.middles.contains(&middle)
                    })
                })
            })
        })
    }

    #[test]
    fn test_first_fragments_without_middle() {
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables);
        // prefix index 0, suffix index 0, middle coin false
        let mut rng = ScriptedRng(VecDeque::from(vec![0, 0, u64::MAX]));

        let names = composer.generate(&mut rng, "Latin", Gender::Unisex, 1).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].as_str(), "Aurius");
        assert_eq!(names[0].middle(), None);
    }

    #[test]
    fn test_first_fragments_with_middle() {
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables);
        let mut rng = ScriptedRng(VecDeque::from(vec![0, 0, 0, 0]));

        let names = composer.generate(&mut rng, "Latin", Gender::Male, 1).unwrap();
        assert_eq!(names[0].to_string(), "Aurelius");
        assert_eq!(names[0].prefix(), "Aur");
        assert_eq!(names[0].middle(), Some("el"));
        assert_eq!(names[0].suffix(), "ius");
    }

    #[test]
    fn test_exact_count_for_every_category() {
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables);
        let mut rng = StdRng::seed_from_u64(7);

        for category in tables.categories() {
            for count in [1, 2, 10, 37] {
                let names = composer.generate(&mut rng, category, Gender::Unisex, count).unwrap();
                assert_eq!(names.len(), count, "{} x {}", category, count);
            }
        }
    }

    #[test]
    fn test_names_are_built_from_category_fragments() {
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables);
        let mut rng = StdRng::seed_from_u64(42);

        for category in tables.categories() {
            let table = tables.lookup(category).unwrap();
            for name in composer.generate(&mut rng, category, Gender::Female, 200).unwrap() {
                assert!(matches_table(name.as_str(), table), "{} not a {} name", name, category);
            }
        }
    }

    #[test]
    fn test_egyptian_pattern() {
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables);
        let mut rng = StdRng::seed_from_u64(3);

        let names = composer.generate(&mut rng, "Egyptian", Gender::Unisex, 3).unwrap();
        assert_eq!(names.len(), 3);

        let prefixes = ["Amen", "Hor", "Khen", "Men", "Nef", "Ptah", "Ra", "Set", "Thut", "Wes"];
        let middles = ["en", "ka", "ma", "nu"];
        let suffixes = ["hotep", "amon", "mose", "ankh", "ari", "tet", "is", "ut", "em", "ra"];
        for name in &names {
            let text = name.as_str();
            let matched = prefixes.iter().any(|prefix| {
                text.strip_prefix(prefix).map_or(false, |rest| {
                    suffixes.iter().any(|suffix| {
                        rest.strip_suffix(suffix).map_or(false, |middle| {
                            middle.is_empty() || middles.contains(&middle)
                        })
                    })
                })
            });
            assert!(matched, "{} does not fit the Egyptian tables", text);

            let rebuilt = format!("{}{}{}", name.prefix(), name.middle().unwrap_or(""), name.suffix());
            assert_eq!(text, rebuilt);
        }
    }

    #[test]
    fn test_table_without_middles_never_draws_one() {
        const NO_MIDDLES: FragmentTable = FragmentTable {
            prefixes: &["Ka", "Ba"],
            suffixes: &["ru", "ti"],
            middles: &[],
        };
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables).with_middle_chance(1.0);

        // Two words only: prefix and suffix. A coin draw would exhaust the script.
        let mut rng = ScriptedRng(VecDeque::from(vec![0, 0]));
        let name = composer.generate_one(&mut rng, &NO_MIDDLES);
        assert_eq!(name.as_str(), "Karu");
        assert_eq!(name.middle(), None);

        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let name = composer.generate_one(&mut rng, &NO_MIDDLES);
            assert_eq!(name.middle(), None);
            assert_eq!(name.as_str(), format!("{}{}", name.prefix(), name.suffix()));
        }
    }

    #[test]
    fn test_unknown_category_produces_nothing() {
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables);
        // Empty script: any draw would panic
        let mut rng = ScriptedRng(VecDeque::new());

        let result = composer.generate(&mut rng, "Atlantean", Gender::Unisex, 5);
        assert_eq!(result, Err(NameError::UnknownCategory("Atlantean".to_string())));
    }

    #[test]
    fn test_middle_fraction_is_about_half() {
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables);
        let mut rng = StdRng::seed_from_u64(2024);

        let names = composer.generate(&mut rng, "Norse", Gender::Unisex, 10_000).unwrap();
        let with_middle = names.iter().filter(|n| n.middle().is_some()).count();
        let fraction = with_middle as f64 / names.len() as f64;
        assert!((0.47..=0.53).contains(&fraction), "middle fraction {}", fraction);
    }

    #[test]
    fn test_middle_chance_bounds() {
        let tables = NameTables::ancient();
        let mut rng = StdRng::seed_from_u64(1);

        let never = NameComposer::new(&tables).with_middle_chance(0.0);
        let names = never.generate(&mut rng, "Greek", Gender::Unisex, 500).unwrap();
        assert!(names.iter().all(|n| n.middle().is_none()));

        let always = NameComposer::new(&tables).with_middle_chance(7.5);
        let names = always.generate(&mut rng, "Greek", Gender::Unisex, 500).unwrap();
        assert!(names.iter().all(|n| n.middle().is_some()));
    }

    #[test]
    fn test_gender_does_not_change_output() {
        let tables = NameTables::ancient();
        let composer = NameComposer::new(&tables);

        let male = composer
            .generate(&mut StdRng::seed_from_u64(99), "Sanskrit", Gender::Male, 20)
            .unwrap();
        let female = composer
            .generate(&mut StdRng::seed_from_u64(99), "Sanskrit", Gender::Female, 20)
            .unwrap();
        assert_eq!(male, female);
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("1".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" 3 ".parse::<Gender>().unwrap(), Gender::Unisex);
        assert_eq!("whatever".parse::<Gender>().unwrap(), Gender::Unisex);
        assert_eq!(Gender::Male.to_string(), "Male");
    }

    #[test]
    fn test_generated_name_json() {
        let name = GeneratedName::compose("Thor", None, "ald");
        let json = serde_json::to_value(&name).unwrap();
        assert_eq!(json["name"], "Thorald");
        assert!(json.get("middle").is_none());
    }
}
