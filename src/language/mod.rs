//! Language tag resolution.
//!
//! A tag is looked up against the ISO 639 registry in a fixed order:
//! part 1 (two letters), part 2B, part 2T, part 3 and finally part 5.
//! The first hit wins; no hit is a normal outcome, not an error.

pub mod registry;

use serde::{Deserialize, Serialize};

use crate::error::{ConfError, Result};
use registry::{LanguageEntry, LanguageRegistry, REGISTRY};

/// Canonical language identifier and its English name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// Two-letter code when the language has one, otherwise the
    /// three-letter (or family) code
    pub code: String,
    /// Human readable name, e.g. "English"
    pub name: String,
}

impl LanguageRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Record for a tag that is used verbatim, without registry backing
    pub fn literal(tag: &str) -> Self {
        Self::new(tag, tag)
    }
}

impl From<LanguageEntry> for LanguageRecord {
    fn from(entry: LanguageEntry) -> Self {
        Self::new(entry.part1.unwrap_or(entry.code), entry.name)
    }
}

/// Resolves language tags and reconciles the document language with the
/// one given on the command line
pub struct LanguageResolver;

impl LanguageResolver {
    /// Look a tag up in the registry, trying each ISO 639 part in turn
    pub fn resolve(tag: &str) -> Option<LanguageRecord> {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            return None;
        }

        let lookups: [fn(&LanguageRegistry, &str) -> Option<LanguageEntry>; 5] = [
            LanguageRegistry::by_part1,
            LanguageRegistry::by_part2b,
            LanguageRegistry::by_part2t,
            LanguageRegistry::by_part3,
            LanguageRegistry::by_part5,
        ];

        let registry: &LanguageRegistry = &REGISTRY;
        lookups
            .iter()
            .find_map(|lookup| lookup(registry, tag.as_str()))
            .map(LanguageRecord::from)
    }

    /// Decide the module language from the document tag and the optional
    /// command-line tag.
    ///
    /// When both are known they must agree by primary code. A document tag
    /// that cannot be resolved defers to the command line; without either,
    /// the language is undefined.
    pub fn reconcile(document_tag: &str, cli_tag: Option<&str>) -> Result<LanguageRecord> {
        let document = Self::resolve(document_tag);

        match (document, cli_tag) {
            (Some(document), None) => {
                tracing::debug!("Language {} taken from the document", document.code);
                Ok(document)
            }
            (Some(document), Some(cli)) => {
                let cli_code = Self::resolve(cli)
                    .map(|record| record.code)
                    .unwrap_or_else(|| cli.to_string());
                if cli_code != document.code {
                    return Err(ConfError::LanguageConflict {
                        cli: cli.to_string(),
                        document: document.code,
                    });
                }
                tracing::debug!("Language {} confirmed by the commandline", document.code);
                Ok(document)
            }
            (None, Some(cli)) => {
                tracing::debug!(
                    "Document language '{}' is unknown, using '{}' from the commandline",
                    document_tag,
                    cli
                );
                Ok(Self::resolve(cli).unwrap_or_else(|| LanguageRecord::literal(cli)))
            }
            (None, None) => Err(ConfError::UndefinedLanguage),
        }
    }
}
