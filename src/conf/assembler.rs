//! Merges resolved language, versification and detected features into a
//! [`DocumentConfiguration`].

use chrono::{Local, NaiveDate};

use super::input::{ConfEntry, MetadataOverrides};
use super::tables;
use super::DocumentConfiguration;
use crate::document::DocumentMetadata;
use crate::error::{ConfError, Result};
use crate::features::FeatureSet;
use crate::language::LanguageRecord;
use crate::versification;

const DEFAULT_LICENSE: &str = "copyrighted. Do not distribute";
const DEFAULT_VERSION: &str = "1.0";
const DEFAULT_HISTORY: (&str, &str) = ("History_1.0", "First release");

#[derive(Debug, Clone)]
pub struct ConfigAssembler {
    version_date: NaiveDate,
    makefile: bool,
    overrides: MetadataOverrides,
}

impl ConfigAssembler {
    /// Assembler stamping today's date
    pub fn new() -> Self {
        Self {
            version_date: Local::now().date_naive(),
            makefile: false,
            overrides: MetadataOverrides::default(),
        }
    }

    pub fn with_version_date(mut self, date: NaiveDate) -> Self {
        self.version_date = date;
        self
    }

    pub fn makefile(mut self, makefile: bool) -> Self {
        self.makefile = makefile;
        self
    }

    pub fn with_overrides(mut self, overrides: MetadataOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn assemble(
        &self,
        document: &DocumentMetadata,
        lang: LanguageRecord,
        versification: String,
        features: FeatureSet,
    ) -> Result<DocumentConfiguration> {
        let minimum_version = versification::minimum_version(&versification)
            .ok_or_else(|| ConfError::UnknownVersification(versification.clone()))?;

        let module_driver = tables::module_driver(&document.work_type).unwrap_or_default();
        let data_path = format!(
            "{}{}",
            tables::data_path_prefix(&document.work_type).unwrap_or_default(),
            document.name.to_lowercase()
        );
        if module_driver.is_empty() {
            tracing::warn!("Unknown document type '{}', ModDrv left empty", document.work_type);
        }

        // Feature order is catalog order, so filters follow the catalogs too
        let option_filters = features
            .iter()
            .filter_map(tables::option_filter)
            .map(String::from)
            .collect();
        let raw_features = features
            .iter()
            .filter_map(tables::raw_feature)
            .map(String::from)
            .collect();

        let metadata = if self.makefile {
            Vec::new()
        } else {
            self.metadata(&document.name, &lang)
        };

        Ok(DocumentConfiguration {
            name: document.name.clone(),
            lang_text: document.lang_text.clone(),
            lang,
            work_type: document.work_type.clone(),
            versification,
            features,
            option_filters,
            raw_features,
            module_driver: module_driver.to_string(),
            data_path,
            minimum_version: minimum_version.to_string(),
            version_date: self.version_date,
            makefile: self.makefile,
            metadata,
        })
    }

    /// Default distribution metadata with input overrides applied; extra
    /// input keys follow the defaults in file order
    fn metadata(&self, name: &str, lang: &LanguageRecord) -> Vec<ConfEntry> {
        let description = format!("{} Bible in {}", name, lang.name);
        let defaults = [
            ("DistributionLicense", DEFAULT_LICENSE),
            ("Description", description.as_str()),
            ("About", description.as_str()),
            ("Version", DEFAULT_VERSION),
            DEFAULT_HISTORY,
        ];

        let mut metadata: Vec<ConfEntry> = defaults
            .iter()
            .map(|(key, default)| ConfEntry::new(*key, self.overrides.get(key).unwrap_or(*default)))
            .collect();

        metadata.extend(
            self.overrides
                .iter()
                .filter(|entry| !defaults.iter().any(|(key, _)| *key == entry.key))
                .cloned(),
        );

        metadata
    }
}

impl Default for ConfigAssembler {
    fn default() -> Self {
        Self::new()
    }
}
