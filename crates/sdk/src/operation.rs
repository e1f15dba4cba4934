//! Name-addressable view over every operation the client exposes.

use crate::client::QuranClient;
use crate::error::QuranResult;
use quran_core::{
    ChapterInfoParams, GetChapterParams, LanguageParams, ListChaptersParams, RandomVerseParams,
    ResourceKind, ResourceResponse, SearchParams, TafsirInfoParams, TafsirParams,
    TranslationInfoParams, TranslationParams, ValidationError, VerseByKeyParams,
    VersesByChapterParams, VersesByHizbParams, VersesByJuzParams, VersesByPageParams,
    VersesByRubElHizbParams,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListChapters,
    GetChapter,
    ChapterInfo,
    VersesByChapter,
    VersesByPage,
    VersesByJuz,
    VersesByHizb,
    VersesByRubElHizb,
    VerseByKey,
    RandomVerse,
    Juzs,
    Search,
    Translations,
    TranslationInfo,
    Translation,
    Tafsirs,
    TafsirInfo,
    Tafsir,
    ChapterReciters,
    RecitationStyles,
    Languages,
}

impl Operation {
    pub const ALL: [Operation; 21] = [
        Operation::ListChapters,
        Operation::GetChapter,
        Operation::ChapterInfo,
        Operation::VersesByChapter,
        Operation::VersesByPage,
        Operation::VersesByJuz,
        Operation::VersesByHizb,
        Operation::VersesByRubElHizb,
        Operation::VerseByKey,
        Operation::RandomVerse,
        Operation::Juzs,
        Operation::Search,
        Operation::Translations,
        Operation::TranslationInfo,
        Operation::Translation,
        Operation::Tafsirs,
        Operation::TafsirInfo,
        Operation::Tafsir,
        Operation::ChapterReciters,
        Operation::RecitationStyles,
        Operation::Languages,
    ];

    /// Public operation name, also used in response messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListChapters => "list-chapters",
            Operation::GetChapter => "GET-chapter",
            Operation::ChapterInfo => "info",
            Operation::VersesByChapter => "verses-by_chapter_number",
            Operation::VersesByPage => "verses-by_page_number",
            Operation::VersesByJuz => "verses-by_juz_number",
            Operation::VersesByHizb => "verses-by_hizb_number",
            Operation::VersesByRubElHizb => "verses-by_rub_el_hizb_number",
            Operation::VerseByKey => "verses-by_verse_key",
            Operation::RandomVerse => "random_verse",
            Operation::Juzs => "juzs",
            Operation::Search => "search",
            Operation::Translations => "translations",
            Operation::TranslationInfo => "translation-info",
            Operation::Translation => "translation",
            Operation::Tafsirs => "tafsirs",
            Operation::TafsirInfo => "tafsir-info",
            Operation::Tafsir => "tafsir",
            Operation::ChapterReciters => "chapter-reciters",
            Operation::RecitationStyles => "recitation-styles",
            Operation::Languages => "languages",
        }
    }

    pub fn from_name(name: &str) -> Option<Operation> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Operation::ListChapters | Operation::GetChapter | Operation::ChapterInfo => {
                ResourceKind::Chapters
            }
            Operation::VersesByChapter
            | Operation::VersesByPage
            | Operation::VersesByJuz
            | Operation::VersesByHizb
            | Operation::VersesByRubElHizb
            | Operation::VerseByKey
            | Operation::RandomVerse => ResourceKind::Verses,
            Operation::Juzs => ResourceKind::Juzs,
            Operation::Search => ResourceKind::Search,
            Operation::Translations | Operation::TranslationInfo | Operation::Translation => {
                ResourceKind::Translations
            }
            Operation::Tafsirs | Operation::TafsirInfo | Operation::Tafsir => ResourceKind::Tafsirs,
            Operation::ChapterReciters | Operation::RecitationStyles => ResourceKind::Audio,
            Operation::Languages => ResourceKind::Languages,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode raw arguments, treating `null` as an empty object.
fn parse<P: DeserializeOwned>(arguments: Value) -> Result<P, ValidationError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ValidationError::from_arguments(&e))
}

impl QuranClient {
    /// Run `operation` with untyped JSON arguments.
    pub async fn call(&self, operation: Operation, arguments: Value) -> QuranResult<ResourceResponse> {
        match operation {
            Operation::ListChapters => self.chapters().list(&parse::<ListChaptersParams>(arguments)?).await,
            Operation::GetChapter => self.chapters().get(&parse::<GetChapterParams>(arguments)?).await,
            Operation::ChapterInfo => self.chapters().info(&parse::<ChapterInfoParams>(arguments)?).await,
            Operation::VersesByChapter => {
                self.verses().by_chapter(&parse::<VersesByChapterParams>(arguments)?).await
            }
            Operation::VersesByPage => self.verses().by_page(&parse::<VersesByPageParams>(arguments)?).await,
            Operation::VersesByJuz => self.verses().by_juz(&parse::<VersesByJuzParams>(arguments)?).await,
            Operation::VersesByHizb => self.verses().by_hizb(&parse::<VersesByHizbParams>(arguments)?).await,
            Operation::VersesByRubElHizb => {
                self.verses()
                    .by_rub_el_hizb(&parse::<VersesByRubElHizbParams>(arguments)?)
                    .await
            }
            Operation::VerseByKey => self.verses().by_key(&parse::<VerseByKeyParams>(arguments)?).await,
            Operation::RandomVerse => self.verses().random(&parse::<RandomVerseParams>(arguments)?).await,
            Operation::Juzs => self.juzs().list().await,
            Operation::Search => self.search().search(&parse::<SearchParams>(arguments)?).await,
            Operation::Translations => {
                self.translations().list(&parse::<LanguageParams>(arguments)?).await
            }
            Operation::TranslationInfo => {
                self.translations()
                    .info(&parse::<TranslationInfoParams>(arguments)?)
                    .await
            }
            Operation::Translation => self.translations().get(&parse::<TranslationParams>(arguments)?).await,
            Operation::Tafsirs => self.tafsirs().list(&parse::<LanguageParams>(arguments)?).await,
            Operation::TafsirInfo => self.tafsirs().info(&parse::<TafsirInfoParams>(arguments)?).await,
            Operation::Tafsir => self.tafsirs().get(&parse::<TafsirParams>(arguments)?).await,
            Operation::ChapterReciters => {
                self.audio()
                    .chapter_reciters(&parse::<LanguageParams>(arguments)?)
                    .await
            }
            Operation::RecitationStyles => self.audio().recitation_styles().await,
            Operation::Languages => self.languages().list(&parse::<LanguageParams>(arguments)?).await,
        }
    }
}
