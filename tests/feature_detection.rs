//! Integration tests for feature detection and configuration assembly
//! over the OSIS fixtures.

use std::path::PathBuf;

use chrono::NaiveDate;
use osis_confmaker::{
    derive_configuration, render_conf, ConfError, ConfOptions, Feature, FeatureDetector,
    OsisDocument,
};

fn load(name: &str) -> OsisDocument {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    OsisDocument::from_path(&path).expect("Failed to parse fixture")
}

fn options() -> ConfOptions {
    ConfOptions {
        version_date: NaiveDate::from_ymd_opt(2025, 1, 31),
        ..Default::default()
    }
}

#[test]
fn test_minimal_features() {
    let features = FeatureDetector::detect(&load("minimal.osis.xml"));
    let found: Vec<_> = features.iter().collect();
    assert_eq!(found, vec![Feature::Note, Feature::Lemma, Feature::Strong]);
}

#[test]
fn test_header_elements_are_not_features() {
    let mut document = load("hebrew.osis.xml");
    assert!(FeatureDetector::detect(&document).contains(Feature::Title));

    document.strip_headers();
    let features = FeatureDetector::detect(&document);
    assert!(!features.contains(Feature::Title));
    assert!(features.contains(Feature::Paragraphs));
    assert!(features.contains(Feature::HebrewVowelPoints));
    assert!(features.contains(Feature::HebrewCantillation));
    // lemma values without a "strong" prefix do not imply Strong's numbers
    assert!(!features.contains(Feature::Strong));
}

#[test]
fn test_detection_is_idempotent() {
    let document = load("commentary.osis.xml");
    let first = FeatureDetector::detect(&document);
    let second = FeatureDetector::detect(&document);
    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
}

#[test]
fn test_minimal_conf() {
    let conf = derive_configuration(load("minimal.osis.xml"), &options()).unwrap();
    let expected = "\
[Test]
ModDrv=zText
DataPath=./modules/texts/ztext/test
CompressType=ZIP
BlockType=BOOK
Encoding=UTF-8
SourceType=OSIS
SwordVersionDate=2025-01-31
Lang=en
GlobalOptionFilter=OSISFootnotes
GlobalOptionFilter=OSISLemma
GlobalOptionFilter=OSISStrongs
Feature=StrongsNumbers
LCSH=Bible. English.
DistributionLicense=copyrighted. Do not distribute
Description=Test Bible in English
About=Test Bible in English
Version=1.0
History_1.0=First release
Versification=KJV
MinimumVersion=1.5.9
";
    assert_eq!(render_conf(&conf), expected);
}

#[test]
fn test_unknown_versification() {
    let err = derive_configuration(load("unknown_versification.osis.xml"), &options()).unwrap_err();
    assert!(matches!(err, ConfError::UnknownVersification(ref name) if name == "Klingon"));
}

#[test]
fn test_any_iso_639_language() {
    let xml = r#"<osis xmlns="http://www.bibletechnologies.net/2003/OSIS/namespace">
  <osisText osisIDWork="QuNT" osisRefWork="Bible" xml:lang="qu">
    <div type="book" osisID="John"><verse osisID="John.1.1">Qallariypiqmi</verse></div>
  </osisText>
</osis>"#;
    let document = OsisDocument::parse(xml).unwrap();
    let conf = derive_configuration(document, &options()).unwrap();
    assert_eq!(conf.lang.code, "qu");
    assert_eq!(conf.lang.name, "Quechua");
    assert!(render_conf(&conf).contains("LCSH=Bible. Quechua.\n"));
}

#[test]
fn test_undefined_language() {
    let err = derive_configuration(load("undefined_language.osis.xml"), &options()).unwrap_err();
    assert!(matches!(err, ConfError::UndefinedLanguage));
}
