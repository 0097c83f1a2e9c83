//! Static lookup tables of the SWORD conf format.

use crate::features::Feature;

/// `GlobalOptionFilter` value rendering a feature, if the feature has one
pub fn option_filter(feature: Feature) -> Option<&'static str> {
    match feature {
        Feature::Title => Some("OSISHeadings"),
        Feature::Note => Some("OSISFootnotes"),
        Feature::Reference => Some("OSISScripref"),
        Feature::Quotation => Some("OSISRedLetterWords"),
        Feature::ReadingVariant => Some("OSISVariants"),
        Feature::Segmentation => Some("OSISMorphSegmentation"),
        Feature::Lemma => Some("OSISLemma"),
        Feature::Strong => Some("OSISStrongs"),
        Feature::Gloss => Some("OSISGlosses"),
        Feature::Morph => Some("OSISMorph"),
        Feature::HebrewVowelPoints => Some("UTF8HebrewPoints"),
        Feature::ArabicVowelPoints => Some("UTF8ArabicPoints"),
        Feature::HebrewCantillation => Some("UTF8Cantillation"),
        Feature::GreekAccents => Some("UTF8GreekAccents"),
        Feature::Figure | Feature::Paragraphs => None,
    }
}

/// `Feature` value for features that toggle module content or behavior
pub fn raw_feature(feature: Feature) -> Option<&'static str> {
    match feature {
        Feature::Strong => Some("StrongsNumbers"),
        Feature::Figure => Some("Images"),
        Feature::Paragraphs => Some("NoParagraphs"),
        _ => None,
    }
}

/// `ModDrv` for a document type (`osisRefWork`)
pub fn module_driver(work_type: &str) -> Option<&'static str> {
    match work_type {
        "Bible" => Some("zText"),
        "Commentary" => Some("zCom"),
        _ => None,
    }
}

/// `DataPath` prefix for a document type; the lowercased module name follows
pub fn data_path_prefix(work_type: &str) -> Option<&'static str> {
    match work_type {
        "Bible" => Some("./modules/texts/ztext/"),
        "Commentary" => Some("./modules/comments/zcom/"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{CHARACTER_FEATURES, STRUCTURAL_FEATURES, WORD_FEATURES};

    #[test]
    fn test_every_word_feature_has_a_filter() {
        for feature in WORD_FEATURES.iter().chain(CHARACTER_FEATURES.iter()) {
            assert!(option_filter(*feature).is_some(), "{}", feature);
        }
    }

    #[test]
    fn test_structural_filters() {
        let filters: Vec<_> = STRUCTURAL_FEATURES.iter().filter_map(|f| option_filter(*f)).collect();
        assert_eq!(
            filters,
            vec![
                "OSISHeadings",
                "OSISFootnotes",
                "OSISScripref",
                "OSISRedLetterWords",
                "OSISVariants",
                "OSISMorphSegmentation"
            ]
        );
    }

    #[test]
    fn test_raw_features() {
        assert_eq!(raw_feature(Feature::Strong), Some("StrongsNumbers"));
        assert_eq!(raw_feature(Feature::Figure), Some("Images"));
        assert_eq!(raw_feature(Feature::Paragraphs), Some("NoParagraphs"));
        assert_eq!(raw_feature(Feature::Note), None);
    }

    #[test]
    fn test_document_types() {
        assert_eq!(module_driver("Bible"), Some("zText"));
        assert_eq!(module_driver("Commentary"), Some("zCom"));
        assert_eq!(module_driver("Dictionary"), None);
        assert_eq!(data_path_prefix("Commentary"), Some("./modules/comments/zcom/"));
        assert_eq!(data_path_prefix("bible"), None);
    }
}
