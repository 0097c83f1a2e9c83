//! ISO 639 registry.
//!
//! Parts 1 and 3 come from the complete `isolang` tables. Part 2T codes are
//! the part 3 identifiers of the same languages; the twenty part 2B codes
//! that differ from them are kept as aliases here, as are the part 5
//! language families, which part 3 does not cover.

use std::collections::HashMap;

use isolang::Language;
use once_cell::sync::Lazy;

/// A resolved registry row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub part1: Option<&'static str>,
    /// Part 3 identifier, or the part 5 code of a family
    pub code: &'static str,
    pub name: &'static str,
}

impl From<Language> for LanguageEntry {
    fn from(language: Language) -> Self {
        Self {
            part1: language.to_639_1(),
            code: language.to_639_3(),
            name: language.to_name(),
        }
    }
}

/// Bibliographic code → terminological code
static BIBLIOGRAPHIC: &[(&str, &str)] = &[
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("dut", "nld"),
    ("fre", "fra"),
    ("geo", "kat"),
    ("ger", "deu"),
    ("gre", "ell"),
    ("ice", "isl"),
    ("mac", "mkd"),
    ("mao", "mri"),
    ("may", "msa"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("tib", "bod"),
    ("wel", "cym"),
];

static FAMILIES: &[(&str, &str)] = &[
    ("afa", "Afro-Asiatic languages"),
    ("alg", "Algonquian languages"),
    ("aus", "Australian languages"),
    ("bat", "Baltic languages"),
    ("bnt", "Bantu languages"),
    ("cau", "Caucasian languages"),
    ("cel", "Celtic languages"),
    ("cus", "Cushitic languages"),
    ("dra", "Dravidian languages"),
    ("gem", "Germanic languages"),
    ("grk", "Greek languages"),
    ("iir", "Indo-Iranian languages"),
    ("inc", "Indic languages"),
    ("ine", "Indo-European languages"),
    ("ira", "Iranian languages"),
    ("map", "Austronesian languages"),
    ("myn", "Mayan languages"),
    ("nic", "Niger-Kordofanian languages"),
    ("poz", "Malayo-Polynesian languages"),
    ("roa", "Romance languages"),
    ("sem", "Semitic languages"),
    ("sit", "Sino-Tibetan languages"),
    ("sla", "Slavic languages"),
    ("tai", "Tai languages"),
    ("trk", "Turkic languages"),
    ("urj", "Uralic languages"),
];

pub struct LanguageRegistry {
    bibliographic: HashMap<&'static str, &'static str>,
    families: HashMap<&'static str, LanguageEntry>,
}

impl LanguageRegistry {
    fn new() -> Self {
        let families = FAMILIES
            .iter()
            .map(|(code, name)| {
                let entry = LanguageEntry {
                    part1: None,
                    code: *code,
                    name: *name,
                };
                (*code, entry)
            })
            .collect();

        Self {
            bibliographic: BIBLIOGRAPHIC.iter().copied().collect(),
            families,
        }
    }

    pub fn by_part1(&self, code: &str) -> Option<LanguageEntry> {
        Language::from_639_1(code).map(LanguageEntry::from)
    }

    pub fn by_part2b(&self, code: &str) -> Option<LanguageEntry> {
        if let Some(terminological) = self.bibliographic.get(code) {
            return self.by_part2t(terminological);
        }
        // a terminological code with a distinct bibliographic one is not part 2B
        if self.bibliographic.values().any(|t| *t == code) {
            return None;
        }
        self.by_part2t(code)
    }

    pub fn by_part2t(&self, code: &str) -> Option<LanguageEntry> {
        self.by_part3(code)
    }

    pub fn by_part3(&self, code: &str) -> Option<LanguageEntry> {
        Language::from_639_3(code).map(LanguageEntry::from)
    }

    pub fn by_part5(&self, code: &str) -> Option<LanguageEntry> {
        self.families.get(code).copied()
    }
}

/// Global registry instance (lazily initialized)
pub static REGISTRY: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::new);
