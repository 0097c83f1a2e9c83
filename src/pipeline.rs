//! One pass from a parsed document to its configuration record.

use chrono::NaiveDate;

use crate::conf::{ConfigAssembler, DocumentConfiguration, MetadataOverrides};
use crate::document::OsisDocument;
use crate::error::Result;
use crate::features::FeatureDetector;
use crate::language::LanguageResolver;
use crate::versification::VersificationResolver;

/// Command-line inputs that influence the derived configuration
#[derive(Debug, Clone, Default)]
pub struct ConfOptions {
    /// Language tag that must match the document language, or supply it
    pub language: Option<String>,
    /// Versification that must match the document, or supply it
    pub versification: Option<String>,
    pub makefile: bool,
    pub overrides: MetadataOverrides,
    /// Fixed version date; today when absent
    pub version_date: Option<NaiveDate>,
}

/// Resolve language and versification, detect features and assemble the
/// configuration. Fails on the first irreconcilable or unknown value.
pub fn derive_configuration(
    mut document: OsisDocument,
    options: &ConfOptions,
) -> Result<DocumentConfiguration> {
    let metadata = document.metadata()?;
    tracing::debug!(
        "Work '{}' of type '{}' in language '{}'",
        metadata.name,
        metadata.work_type,
        metadata.lang_text
    );

    let lang = LanguageResolver::reconcile(&metadata.lang_text, options.language.as_deref())?;
    let versification =
        VersificationResolver::resolve(&document, options.versification.as_deref())?;

    // refSystem lives in the header, so it is read before the header goes
    document.strip_headers();
    let features = FeatureDetector::detect(&document);

    let mut assembler = ConfigAssembler::new()
        .makefile(options.makefile)
        .with_overrides(options.overrides.clone());
    if let Some(date) = options.version_date {
        assembler = assembler.with_version_date(date);
    }

    assembler.assemble(&metadata, lang, versification, features)
}
