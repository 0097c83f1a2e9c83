//! SWORD module configuration derived from a document.

pub mod assembler;
pub mod input;
pub mod tables;

use chrono::NaiveDate;
use serde::Serialize;

use crate::features::FeatureSet;
use crate::language::LanguageRecord;

pub use assembler::ConfigAssembler;
pub use input::{ConfEntry, MetadataOverrides};

/// Everything needed to render one conf section. Built once by
/// [`ConfigAssembler`] and read by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentConfiguration {
    /// Module name (`osisIDWork`), used as the section header
    pub name: String,
    /// Language tag as written in the document
    pub lang_text: String,
    pub lang: LanguageRecord,
    /// Document type (`osisRefWork`), e.g. "Bible"
    #[serde(rename = "type")]
    pub work_type: String,
    pub versification: String,
    pub features: FeatureSet,
    pub option_filters: Vec<String>,
    pub raw_features: Vec<String>,
    pub module_driver: String,
    pub data_path: String,
    pub minimum_version: String,
    pub version_date: NaiveDate,
    /// Suppresses distribution and version metadata
    pub makefile: bool,
    /// Distribution metadata lines, empty in makefile mode
    pub metadata: Vec<ConfEntry>,
}
