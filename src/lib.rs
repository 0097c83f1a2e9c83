pub mod conf;
pub mod document;
pub mod error;
pub mod features;
pub mod language;
pub mod pipeline;
pub mod render;
pub mod versification;

pub use conf::{ConfEntry, ConfigAssembler, DocumentConfiguration, MetadataOverrides};
pub use document::{DocumentMetadata, Element, OsisDocument};
pub use error::{ConfError, Result};
pub use features::{Feature, FeatureDetector, FeatureSet};
pub use language::{LanguageRecord, LanguageResolver};
pub use pipeline::{derive_configuration, ConfOptions};
pub use render::{render, render_conf, render_json, OutputFormat};
pub use versification::{VersificationResolver, DEFAULT_VERSIFICATION};
