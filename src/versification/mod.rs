//! Versification resolution and the catalog of known schemes.

use crate::document::OsisDocument;
use crate::error::{ConfError, Result};

/// Versification used when neither the document nor the command line names one
pub const DEFAULT_VERSIFICATION: &str = "KJV";

/// Element declaring the reference system, e.g. `<refSystem>Bible.NRSV</refSystem>`
pub const REF_SYSTEM: &str = "refSystem";

const REF_SYSTEM_PREFIX: &str = "Bible.";

/// Known versifications and the minimum SWORD version supporting each,
/// in catalog order.
pub static VERSIFICATIONS: &[(&str, &str)] = &[
    ("KJV", "1.5.9"),
    ("KJVA", "1.6.0"),
    ("NRSV", "1.6.0"),
    ("NRSVA", "1.6.0"),
    ("MT", "1.6.0"),
    ("Leningrad", "1.6.0"),
    ("Synodal", "1.6.1"),
    ("Vulg", "1.6.1"),
    ("Luther", "1.6.1"),
    ("German", "1.6.1"),
    ("Catholic", "1.6.2"),
    ("Catholic2", "1.6.2"),
    ("LXX", "1.7.2"),
    ("Orthodox", "1.7.2"),
    ("SynodalProt", "1.7.2"),
    ("DarbyFr", "1.8.0"),
    ("Segond", "1.8.0"),
    ("Calvin", "1.8.0"),
];

/// Minimum SWORD version for a versification, if it is known
pub fn minimum_version(versification: &str) -> Option<&'static str> {
    VERSIFICATIONS
        .iter()
        .find(|(name, _)| *name == versification)
        .map(|(_, version)| *version)
}

pub fn is_known(versification: &str) -> bool {
    minimum_version(versification).is_some()
}

/// Names of all known versifications
pub fn known_names() -> impl Iterator<Item = &'static str> {
    VERSIFICATIONS.iter().map(|(name, _)| *name)
}

/// Closest known versification by Jaro-Winkler similarity
pub fn suggest(versification: &str) -> Option<&'static str> {
    known_names()
        .map(|name| {
            let score = strsim::jaro_winkler(&versification.to_lowercase(), &name.to_lowercase());
            (name, score)
        })
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(name, _)| name)
}

/// Determines the versification from the document, the command line or
/// the default, in that order
pub struct VersificationResolver;

impl VersificationResolver {
    /// Versification declared by the first `refSystem` element, without its
    /// `Bible.` prefix
    pub fn declared(document: &OsisDocument) -> Option<String> {
        let declared = document.elements_by_name(REF_SYSTEM).next()?.text().trim();
        let declared = declared.strip_prefix(REF_SYSTEM_PREFIX).unwrap_or(declared);
        (!declared.is_empty()).then(|| declared.to_string())
    }

    pub fn resolve(document: &OsisDocument, cli_override: Option<&str>) -> Result<String> {
        let versification = match (Self::declared(document), cli_override) {
            (Some(declared), Some(cli)) if declared != cli => {
                return Err(ConfError::VersificationConflict {
                    cli: cli.to_string(),
                    document: declared,
                });
            }
            (Some(declared), _) => {
                tracing::debug!("Versification {} declared by the document", declared);
                declared
            }
            (None, Some(cli)) => {
                tracing::debug!("Versification {} taken from the commandline", cli);
                cli.to_string()
            }
            (None, None) => {
                tracing::debug!("No versification given, using {}", DEFAULT_VERSIFICATION);
                DEFAULT_VERSIFICATION.to_string()
            }
        };

        if !is_known(&versification) {
            tracing::info!(
                "Valid versification systems are {}",
                known_names().collect::<Vec<_>>().join(", ")
            );
            if let Some(suggestion) = suggest(&versification) {
                tracing::info!("Did you mean {}?", suggestion);
            }
            return Err(ConfError::UnknownVersification(versification));
        }

        Ok(versification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;

    fn document(ref_system: Option<&str>) -> OsisDocument {
        let mut header = Element::new("header");
        if let Some(text) = ref_system {
            header = header.with_child(Element::new(REF_SYSTEM).with_text(text));
        }
        OsisDocument::from_root(
            Element::new("osis").with_child(Element::new("osisText").with_child(header)),
        )
    }

    #[test]
    fn test_default_versification() {
        let resolved = VersificationResolver::resolve(&document(None), None).unwrap();
        assert_eq!(resolved, DEFAULT_VERSIFICATION);
        assert!(is_known(&resolved));
    }

    #[test]
    fn test_declared_prefix_is_stripped() {
        let doc = document(Some(" Bible.NRSV \n"));
        assert_eq!(VersificationResolver::declared(&doc).as_deref(), Some("NRSV"));
        assert_eq!(VersificationResolver::resolve(&doc, None).unwrap(), "NRSV");
    }

    #[test]
    fn test_declared_without_prefix() {
        let doc = document(Some("Luther"));
        assert_eq!(VersificationResolver::resolve(&doc, None).unwrap(), "Luther");
    }

    #[test]
    fn test_empty_ref_system_is_ignored() {
        let doc = document(Some("  "));
        assert_eq!(VersificationResolver::declared(&doc), None);
        assert_eq!(VersificationResolver::resolve(&doc, Some("MT")).unwrap(), "MT");
    }

    #[test]
    fn test_cli_override_without_declaration() {
        let resolved = VersificationResolver::resolve(&document(None), Some("Vulg")).unwrap();
        assert_eq!(resolved, "Vulg");
    }

    #[test]
    fn test_cli_agrees_with_document() {
        let doc = document(Some("Bible.Synodal"));
        assert_eq!(VersificationResolver::resolve(&doc, Some("Synodal")).unwrap(), "Synodal");
    }

    #[test]
    fn test_cli_conflicts_with_document() {
        let doc = document(Some("Bible.Synodal"));
        let err = VersificationResolver::resolve(&doc, Some("KJV")).unwrap_err();
        assert!(matches!(err, ConfError::VersificationConflict { .. }));
    }

    #[test]
    fn test_unknown_versification() {
        let err = VersificationResolver::resolve(&document(Some("Bible.Klingon")), None).unwrap_err();
        assert!(matches!(err, ConfError::UnknownVersification(ref name) if name == "Klingon"));

        assert!(VersificationResolver::resolve(&document(None), Some("kjv")).is_err());
    }

    #[test]
    fn test_minimum_version() {
        assert_eq!(minimum_version("KJV"), Some("1.5.9"));
        assert_eq!(minimum_version("Calvin"), Some("1.8.0"));
        assert_eq!(minimum_version("unknown"), None);
        assert_eq!(known_names().count(), 18);
    }

    #[test]
    fn test_suggest() {
        assert_eq!(suggest("kjv"), Some("KJV"));
        assert_eq!(suggest("Synodl"), Some("Synodal"));
        assert_eq!(suggest("zzzzzz"), None);
    }
}
