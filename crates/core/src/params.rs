//! Parameter objects accepted by the resource operations.
//!
//! Every field is optional at the serde level so that missing required fields
//! surface as field-level [`ValidationError`]s rather than opaque decode errors.

use crate::validation::{Validate, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Language used when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

const CHAPTERS: std::ops::RangeInclusive<u64> = 1..=114;
const PAGES: std::ops::RangeInclusive<u64> = 1..=604;
const JUZS: std::ops::RangeInclusive<u64> = 1..=30;
const HIZBS: std::ops::RangeInclusive<u64> = 1..=60;
const RUBS: std::ops::RangeInclusive<u64> = 1..=240;
const POSITIVE: std::ops::RangeInclusive<u64> = 1..=u64::MAX;

/// Scalar argument that callers may send as a bool, a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl ArgValue {
    /// Non-negative integer value, accepting digit strings.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ArgValue::Int(n) => u64::try_from(*n).ok(),
            ArgValue::Text(s) => {
                let s = s.trim();
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    s.parse().ok()
                } else {
                    None
                }
            }
            ArgValue::Bool(_) => None,
        }
    }

    /// Form sent upstream as a query value or path segment.
    pub fn to_query_value(&self) -> String {
        match self {
            ArgValue::Bool(b) => b.to_string(),
            ArgValue::Int(n) => n.to_string(),
            ArgValue::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<u64> for ArgValue {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => ArgValue::Int(n),
            Err(_) => ArgValue::Text(n.to_string()),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Text(s.to_string())
    }
}

/// Trimmed, lowercased language code, defaulting to [`DEFAULT_LANGUAGE`].
pub fn normalize_language(language: Option<&str>) -> String {
    language
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_ascii_lowercase()
}

/// Parameters that take nothing at all
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyParams {}

impl Validate for EmptyParams {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Optional language, used by the reference-data list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageParams {
    pub language: Option<String>,
}

impl LanguageParams {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }
}

impl Validate for LanguageParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.language("language", self.language.as_deref(), false);
        v.finish()
    }
}

/// `list-chapters`: the language is mandatory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListChaptersParams {
    pub language: Option<String>,
}

impl ListChaptersParams {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }
}

impl Validate for ListChaptersParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.language("language", self.language.as_deref(), true);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetChapterParams {
    pub language: Option<String>,
    /// Defaults to chapter 1 when absent
    pub id: Option<ArgValue>,
}

impl Validate for GetChapterParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.language("language", self.language.as_deref(), true);
        v.number("id", "Chapter ID", self.id.as_ref(), CHAPTERS, false);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterInfoParams {
    pub language: Option<String>,
    /// Defaults to chapter 1 when absent
    pub chapter_id: Option<ArgValue>,
}

impl Validate for ChapterInfoParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.language("language", self.language.as_deref(), true);
        v.number("chapter_id", "Chapter ID", self.chapter_id.as_ref(), CHAPTERS, false);
        v.finish()
    }
}

/// Options shared by every verse listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerseOptions {
    pub language: Option<String>,
    pub words: Option<ArgValue>,
    pub translations: Option<String>,
    pub audio: Option<ArgValue>,
    pub tafsirs: Option<String>,
    pub word_fields: Option<String>,
    pub translation_fields: Option<String>,
    pub fields: Option<String>,
}

impl VerseOptions {
    fn check(&self, v: &mut Validator) {
        v.language("language", self.language.as_deref(), false);
        v.identifier_list("translations", self.translations.as_deref());
        v.identifier_list("tafsirs", self.tafsirs.as_deref());
        v.number("audio", "Recitation id", self.audio.as_ref(), POSITIVE, false);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: Option<ArgValue>,
    pub per_page: Option<ArgValue>,
}

impl Pagination {
    fn check(&self, v: &mut Validator) {
        v.number("page", "Page", self.page.as_ref(), POSITIVE, false);
        v.number("per_page", "Records per page", self.per_page.as_ref(), POSITIVE, false);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersesByChapterParams {
    pub chapter_number: Option<ArgValue>,
    #[serde(flatten)]
    pub options: VerseOptions,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl Validate for VersesByChapterParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.number("chapter_number", "Chapter number", self.chapter_number.as_ref(), CHAPTERS, true);
        self.options.check(&mut v);
        self.pagination.check(&mut v);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersesByPageParams {
    pub page_number: Option<ArgValue>,
    #[serde(flatten)]
    pub options: VerseOptions,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl Validate for VersesByPageParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.number("page_number", "Page number", self.page_number.as_ref(), PAGES, true);
        self.options.check(&mut v);
        self.pagination.check(&mut v);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersesByJuzParams {
    pub juz_number: Option<ArgValue>,
    #[serde(flatten)]
    pub options: VerseOptions,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl Validate for VersesByJuzParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.number("juz_number", "Juz number", self.juz_number.as_ref(), JUZS, true);
        self.options.check(&mut v);
        self.pagination.check(&mut v);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersesByHizbParams {
    pub hizb_number: Option<ArgValue>,
    #[serde(flatten)]
    pub options: VerseOptions,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl Validate for VersesByHizbParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.number("hizb_number", "Hizb number", self.hizb_number.as_ref(), HIZBS, true);
        self.options.check(&mut v);
        self.pagination.check(&mut v);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersesByRubElHizbParams {
    pub rub_el_hizb_number: Option<ArgValue>,
    #[serde(flatten)]
    pub options: VerseOptions,
}

impl Validate for VersesByRubElHizbParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.number(
            "rub_el_hizb_number",
            "Rub el Hizb number",
            self.rub_el_hizb_number.as_ref(),
            RUBS,
            true,
        );
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerseByKeyParams {
    pub verse_key: Option<String>,
    #[serde(flatten)]
    pub options: VerseOptions,
}

impl VerseByKeyParams {
    pub fn new(verse_key: impl Into<String>) -> Self {
        Self {
            verse_key: Some(verse_key.into()),
            options: VerseOptions::default(),
        }
    }
}

impl Validate for VerseByKeyParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.verse_key("verse_key", self.verse_key.as_deref(), true);
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomVerseParams {
    #[serde(flatten)]
    pub options: VerseOptions,
}

impl Validate for RandomVerseParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.options.check(&mut v);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub size: Option<ArgValue>,
    pub page: Option<ArgValue>,
    pub language: Option<String>,
}

impl SearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }
}

impl Validate for SearchParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.non_empty("q", "Search query", self.q.as_deref(), true);
        v.number("size", "Results per page", self.size.as_ref(), POSITIVE, false);
        v.number("page", "Page", self.page.as_ref(), POSITIVE, false);
        v.language("language", self.language.as_deref(), false);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationInfoParams {
    pub translation_id: Option<String>,
}

impl Validate for TranslationInfoParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.identifier("translation_id", "Translation id", self.translation_id.as_deref(), true);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TafsirInfoParams {
    pub tafsir_id: Option<String>,
}

impl Validate for TafsirInfoParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.identifier("tafsir_id", "Tafsir id", self.tafsir_id.as_deref(), true);
        v.finish()
    }
}

/// Portion of the mushaf a tafsir or translation text is requested for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextScope {
    pub fields: Option<String>,
    pub chapter_number: Option<ArgValue>,
    pub juz_number: Option<ArgValue>,
    pub page_number: Option<ArgValue>,
    pub hizb_number: Option<ArgValue>,
    pub rub_el_hizb_number: Option<ArgValue>,
    pub verse_key: Option<String>,
}

impl TextScope {
    fn check(&self, v: &mut Validator) {
        v.number("chapter_number", "Chapter number", self.chapter_number.as_ref(), CHAPTERS, false);
        v.number("juz_number", "Juz number", self.juz_number.as_ref(), JUZS, false);
        v.number("page_number", "Page number", self.page_number.as_ref(), PAGES, false);
        v.number("hizb_number", "Hizb number", self.hizb_number.as_ref(), HIZBS, false);
        v.number(
            "rub_el_hizb_number",
            "Rub el Hizb number",
            self.rub_el_hizb_number.as_ref(),
            RUBS,
            false,
        );
        v.verse_key("verse_key", self.verse_key.as_deref(), false);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TafsirParams {
    pub tafsir_id: Option<String>,
    #[serde(flatten)]
    pub scope: TextScope,
}

impl Validate for TafsirParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.identifier("tafsir_id", "Tafsir id", self.tafsir_id.as_deref(), true);
        self.scope.check(&mut v);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationParams {
    pub translation_id: Option<String>,
    #[serde(flatten)]
    pub scope: TextScope,
}

impl Validate for TranslationParams {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.identifier("translation_id", "Translation id", self.translation_id.as_deref(), true);
        self.scope.check(&mut v);
        v.finish()
    }
}
