//! Feature detection over a parsed OSIS document.

use crate::document::{Element, OsisDocument};

use super::{diacritics, Feature, FeatureSet, STRUCTURAL_FEATURES, WORD_FEATURES};

/// Word-level element carrying lemma, morphology and gloss attributes
pub const WORD: &str = "w";

/// Detects which optional textual features a document uses.
///
/// Every check only asks whether at least one matching element or attribute
/// exists, so detection is independent of element order and running it
/// twice yields the same set.
pub struct FeatureDetector;

impl FeatureDetector {
    pub fn detect(document: &OsisDocument) -> FeatureSet {
        let mut features = FeatureSet::new();
        let words: Vec<&Element> = document.elements_by_name(WORD).collect();

        Self::detect_structure(document, &mut features);
        Self::detect_word_attributes(&words, &mut features);
        Self::detect_strongs_in_lemma(&words, &mut features);
        Self::detect_paragraphs(document, &mut features);
        Self::detect_diacritics(document, &mut features);

        features
    }

    /// A structural feature is present when one element of that name exists
    fn detect_structure(document: &OsisDocument, features: &mut FeatureSet) {
        for feature in STRUCTURAL_FEATURES {
            if document.contains_element(feature.tag()) {
                Self::record(features, feature);
            }
        }
    }

    /// A word feature is present when one `<w>` element carries the attribute
    fn detect_word_attributes(words: &[&Element], features: &mut FeatureSet) {
        for feature in WORD_FEATURES {
            if words.iter().any(|word| word.has_attribute(feature.tag())) {
                Self::record(features, feature);
            }
        }
    }

    /// Strong's numbers are often encoded inside lemma values
    /// (`lemma="strong:H7225"`) instead of a separate attribute.
    fn detect_strongs_in_lemma(words: &[&Element], features: &mut FeatureSet) {
        if !features.contains(Feature::Lemma) || features.contains(Feature::Strong) {
            return;
        }

        let encoded = words.iter().any(|word| {
            word.attribute(Feature::Lemma.tag())
                .is_some_and(|lemma| lemma.to_lowercase().contains("strong"))
        });
        if encoded {
            Self::record(features, Feature::Strong);
        }
    }

    fn detect_paragraphs(document: &OsisDocument, features: &mut FeatureSet) {
        if document.contains_element(Feature::Paragraphs.tag()) {
            Self::record(features, Feature::Paragraphs);
        }
    }

    fn detect_diacritics(document: &OsisDocument, features: &mut FeatureSet) {
        let mut systems = FeatureSet::new();
        for element in document.root().descendants() {
            if diacritics::scan(element.text(), &mut systems) {
                break;
            }
        }
        for feature in systems.iter() {
            Self::record(features, feature);
        }
    }

    fn record(features: &mut FeatureSet, feature: Feature) {
        if features.insert(feature) {
            tracing::debug!("Detected feature: {}", feature);
        }
    }
}
