//! Metadata overrides read from an existing conf file (`--input`).

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Keys the tool derives from the document; input values for them are ignored
pub const GENERATED_KEYS: &[&str] = &[
    "ModDrv",
    "DataPath",
    "CompressType",
    "BlockType",
    "Encoding",
    "SourceType",
    "SwordVersionDate",
    "Lang",
    "GlobalOptionFilter",
    "Feature",
    "LCSH",
    "Versification",
    "MinimumVersion",
];

/// A `key=value` line of a conf file. Line breaks in the value are
/// continuation lines, written with a trailing backslash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfEntry {
    pub key: String,
    pub value: String,
}

impl ConfEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ConfEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value.replace('\n', "\\\n"))
    }
}

/// Metadata entries (license, description, history, ...) in file order.
/// A key given twice keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOverrides {
    entries: Vec<ConfEntry>,
}

impl MetadataOverrides {
    pub fn parse(content: &str) -> Self {
        let mut overrides = Self::default();

        for (number, line) in logical_lines(content) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!("Ignoring line {} of input conf: no '=' found", number + 1);
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            if GENERATED_KEYS.contains(&key) {
                tracing::warn!("Ignoring generated key '{}' from input conf", key);
                continue;
            }

            overrides.set(key, value.trim());
        }

        overrides
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.value = value.to_string(),
            None => self.entries.push(ConfEntry::new(key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Join physical lines ending in `\` with the lines that continue them.
/// Each logical line carries the index of its first physical line.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (number, line) in content.lines().enumerate() {
        let (start, mut joined) = match pending.take() {
            Some((start, mut joined)) => {
                joined.push('\n');
                (start, joined)
            }
            None => (number, String::new()),
        };

        match line.trim_end().strip_suffix('\\') {
            Some(head) => {
                joined.push_str(head);
                pending = Some((start, joined));
            }
            None => {
                joined.push_str(line);
                lines.push((start, joined));
            }
        }
    }

    // a continuation on the last line has nothing to join
    lines.extend(pending);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata() {
        let content = "\
[KJV]
# distribution
DistributionLicense = Public Domain
Description=King James Version
History_1.1=Fixed typos
";
        let overrides = MetadataOverrides::parse(content);
        assert_eq!(overrides.get("DistributionLicense"), Some("Public Domain"));
        assert_eq!(overrides.get("Description"), Some("King James Version"));
        let keys: Vec<_> = overrides.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["DistributionLicense", "Description", "History_1.1"]);
    }

    #[test]
    fn test_generated_keys_are_ignored() {
        let overrides = MetadataOverrides::parse("ModDrv=RawText\nLang=de\nVersion=2.0\n");
        assert_eq!(overrides.get("ModDrv"), None);
        assert_eq!(overrides.get("Lang"), None);
        assert_eq!(overrides.get("Version"), Some("2.0"));
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let overrides = MetadataOverrides::parse("About=first\nVersion=1.1\nAbout=second\n");
        let entries: Vec<_> = overrides.iter().cloned().collect();
        assert_eq!(
            entries,
            vec![ConfEntry::new("About", "second"), ConfEntry::new("Version", "1.1")]
        );
    }

    #[test]
    fn test_value_may_contain_equals() {
        let overrides = MetadataOverrides::parse("About=a=b\n");
        assert_eq!(overrides.get("About"), Some("a=b"));
    }

    #[test]
    fn test_continuation_lines_are_joined() {
        let content = "\
About=The King James Version \\
with Strong's numbers=annotated
Version=1.1
";
        let overrides = MetadataOverrides::parse(content);
        let entries: Vec<_> = overrides.iter().cloned().collect();
        assert_eq!(
            entries,
            vec![
                ConfEntry::new("About", "The King James Version \nwith Strong's numbers=annotated"),
                ConfEntry::new("Version", "1.1"),
            ]
        );
    }

    #[test]
    fn test_continued_value_is_written_back_with_continuation() {
        let content = "History_1.1=Fixed typos \\\n  in Genesis\\\n  and Exodus\n";
        let overrides = MetadataOverrides::parse(content);
        let entry = overrides.iter().next().unwrap();
        assert_eq!(entry.to_string(), content.trim_end());
    }

    #[test]
    fn test_trailing_continuation_at_end_of_file() {
        let overrides = MetadataOverrides::parse("About=dangling \\");
        assert_eq!(overrides.get("About"), Some("dangling"));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let overrides = MetadataOverrides::parse("not a pair\n=orphan\n");
        assert!(overrides.is_empty());
    }
}
