//! Detection of pointing and accent systems in text content.

use super::{Feature, FeatureSet, CHARACTER_FEATURES};

fn is_hebrew_point(c: char) -> bool {
    matches!(
        c,
        '\u{05B0}'..='\u{05BD}' | '\u{05BF}' | '\u{05C1}'..='\u{05C2}' | '\u{05C4}'..='\u{05C5}' | '\u{05C7}'
    )
}

fn is_hebrew_cantillation(c: char) -> bool {
    matches!(c, '\u{0591}'..='\u{05AF}')
}

fn is_arabic_vowel_point(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

fn is_greek_letter(c: char) -> bool {
    matches!(c, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}')
}

/// Precomposed polytonic letters and monotonic letters with tonos
fn is_accented_greek(c: char) -> bool {
    matches!(
        c,
        '\u{1F00}'..='\u{1FFF}'
            | '\u{0386}'
            | '\u{0388}'..='\u{038A}'
            | '\u{038C}'
            | '\u{038E}'..='\u{0390}'
            | '\u{03AC}'..='\u{03B0}'
            | '\u{03CA}'..='\u{03CE}'
    )
}

/// Combining grave, acute, psili, dasia, perispomeni and ypogegrammeni
fn is_greek_combining_accent(c: char) -> bool {
    matches!(c, '\u{0300}' | '\u{0301}' | '\u{0313}' | '\u{0314}' | '\u{0342}' | '\u{0345}')
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Record every character system present in `text`.
///
/// Returns true once all systems of the character catalog are known, so
/// callers scanning many text nodes can stop early.
pub fn scan(text: &str, found: &mut FeatureSet) -> bool {
    let mut after_greek = false;

    for c in text.chars() {
        if is_hebrew_point(c) {
            found.insert(Feature::HebrewVowelPoints);
        } else if is_hebrew_cantillation(c) {
            found.insert(Feature::HebrewCantillation);
        } else if is_arabic_vowel_point(c) {
            found.insert(Feature::ArabicVowelPoints);
        } else if is_accented_greek(c) || (after_greek && is_greek_combining_accent(c)) {
            found.insert(Feature::GreekAccents);
        }

        // Stacked combining marks keep the base letter of the cluster
        if !is_combining_mark(c) {
            after_greek = is_greek_letter(c);
        }
    }

    CHARACTER_FEATURES.iter().all(|feature| found.contains(*feature))
}
