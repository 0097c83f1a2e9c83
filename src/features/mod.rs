//! Textual features of an OSIS document.
//!
//! Features come from three fixed catalogs (document structure, word-level
//! annotations, character/diacritic systems) plus the paragraph marker.
//! [`FeatureSet`] keeps them ordered by catalog declaration and never holds
//! a feature twice.

pub mod detector;
pub mod diacritics;

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

pub use detector::FeatureDetector;

/// A detectable feature. Variant order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    // Document structure
    Title,
    Note,
    Reference,
    Quotation,
    Figure,
    ReadingVariant,
    Segmentation,
    // Word-level annotations
    Lemma,
    Strong,
    Gloss,
    Morph,
    // Paragraph markup
    Paragraphs,
    // Character systems
    HebrewVowelPoints,
    ArabicVowelPoints,
    HebrewCantillation,
    GreekAccents,
}

/// Element-presence features, in catalog order
pub const STRUCTURAL_FEATURES: [Feature; 7] = [
    Feature::Title,
    Feature::Note,
    Feature::Reference,
    Feature::Quotation,
    Feature::Figure,
    Feature::ReadingVariant,
    Feature::Segmentation,
];

/// Attributes of `<w>` elements, in catalog order
pub const WORD_FEATURES: [Feature; 4] = [
    Feature::Lemma,
    Feature::Strong,
    Feature::Gloss,
    Feature::Morph,
];

/// Diacritic and pointing systems found in the text, in catalog order
pub const CHARACTER_FEATURES: [Feature; 4] = [
    Feature::HebrewVowelPoints,
    Feature::ArabicVowelPoints,
    Feature::HebrewCantillation,
    Feature::GreekAccents,
];

impl Feature {
    /// Element name, attribute name or system name identifying the feature
    pub fn tag(&self) -> &'static str {
        match self {
            Feature::Title => "title",
            Feature::Note => "note",
            Feature::Reference => "reference",
            Feature::Quotation => "q",
            Feature::Figure => "figure",
            Feature::ReadingVariant => "rdg",
            Feature::Segmentation => "seg",
            Feature::Lemma => "lemma",
            Feature::Strong => "strong",
            Feature::Gloss => "gloss",
            Feature::Morph => "morph",
            Feature::Paragraphs => "p",
            Feature::HebrewVowelPoints => "Hebrew Vowel Points",
            Feature::ArabicVowelPoints => "Arabic Vowel Points",
            Feature::HebrewCantillation => "Hebrew Cantillation",
            Feature::GreekAccents => "Greek Accents",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        STRUCTURAL_FEATURES
            .iter()
            .chain(WORD_FEATURES.iter())
            .chain(std::iter::once(&Feature::Paragraphs))
            .chain(CHARACTER_FEATURES.iter())
            .find(|feature| feature.tag() == tag)
            .copied()
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Ordered, duplicate-free collection of detected features
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet {
    features: BTreeSet<Feature>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a feature; returns false if it was already present
    pub fn insert(&mut self, feature: Feature) -> bool {
        self.features.insert(feature)
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Features in catalog order
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}
