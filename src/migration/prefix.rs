use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

/// Legacy index prefix: digits, then a spaced hyphen.
static LEGACY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+) - ").expect("legacy prefix pattern is valid"));

/// Numeric index taken from a legacy prefix, rendered with at least two digits.
///
/// The digits are kept as text so that indices of any length survive;
/// leading zeros are dropped the way an integer conversion would drop them.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0:0>2}")]
pub struct IndexPrefix(String);

impl IndexPrefix {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            IndexPrefix("0".to_string())
        } else {
            IndexPrefix(trimmed.to_string())
        }
    }
}

/// A base name that carries the legacy `N - ` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyName<'a> {
    pub index: IndexPrefix,
    pub remainder: &'a str,
}

impl<'a> LegacyName<'a> {
    pub fn parse(name: &'a str) -> Option<Self> {
        let captures = LEGACY_PREFIX.captures(name)?;
        let whole = captures.get(0)?;
        let digits = captures.get(1)?;

        Some(LegacyName {
            index: IndexPrefix::from_digits(digits.as_str()),
            remainder: &name[whole.end()..],
        })
    }

    pub fn migrated(&self) -> String {
        format!("{}. {}", self.index, self.remainder)
    }
}

/// Returns the migrated base name, or `None` when `name` has no legacy prefix.
pub fn migrate_name(name: &str) -> Option<String> {
    LegacyName::parse(name).map(|legacy| legacy.migrated())
}
