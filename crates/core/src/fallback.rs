//! Static reference data served when the upstream API cannot be reached.
//!
//! The tables are hand-curated snapshots of the list endpoints. They are built
//! once per process and never change afterwards.

use crate::types::{Payload, ResourceKind};
use serde_json::json;
use std::sync::LazyLock;

/// Bumped whenever any table below is edited.
pub const FALLBACK_DATASET_VERSION: u32 = 1;

/// One static table per cacheable list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackDataset {
    Chapters,
    ChapterReciters,
    RecitationStyles,
    Languages,
    Tafsirs,
    Translations,
}

impl FallbackDataset {
    pub const ALL: [FallbackDataset; 6] = [
        FallbackDataset::Chapters,
        FallbackDataset::ChapterReciters,
        FallbackDataset::RecitationStyles,
        FallbackDataset::Languages,
        FallbackDataset::Tafsirs,
        FallbackDataset::Translations,
    ];

    /// Resource kind whose service serves this table
    pub fn kind(&self) -> ResourceKind {
        match self {
            FallbackDataset::Chapters => ResourceKind::Chapters,
            FallbackDataset::ChapterReciters | FallbackDataset::RecitationStyles => {
                ResourceKind::Audio
            }
            FallbackDataset::Languages => ResourceKind::Languages,
            FallbackDataset::Tafsirs => ResourceKind::Tafsirs,
            FallbackDataset::Translations => ResourceKind::Translations,
        }
    }
}

static CHAPTERS: LazyLock<Payload> = LazyLock::new(|| {
    json!({
        "chapters": [
            { "id": 1, "name_arabic": "الفاتحة", "name_simple": "Al-Fatihah", "translated_name": { "name": "The Opening" } },
            { "id": 2, "name_arabic": "البقرة", "name_simple": "Al-Baqarah", "translated_name": { "name": "The Cow" } },
            { "id": 3, "name_arabic": "آل عمران", "name_simple": "Ali 'Imran", "translated_name": { "name": "Family of Imran" } },
            { "id": 4, "name_arabic": "النساء", "name_simple": "An-Nisa", "translated_name": { "name": "The Women" } },
            { "id": 5, "name_arabic": "المائدة", "name_simple": "Al-Ma'idah", "translated_name": { "name": "The Table Spread" } },
            { "id": 6, "name_arabic": "الأنعام", "name_simple": "Al-An'am", "translated_name": { "name": "The Cattle" } },
            { "id": 7, "name_arabic": "الأعراف", "name_simple": "Al-A'raf", "translated_name": { "name": "The Heights" } },
            { "id": 8, "name_arabic": "الأنفال", "name_simple": "Al-Anfal", "translated_name": { "name": "The Spoils of War" } },
            { "id": 9, "name_arabic": "التوبة", "name_simple": "At-Tawbah", "translated_name": { "name": "The Repentance" } },
            { "id": 10, "name_arabic": "يونس", "name_simple": "Yunus", "translated_name": { "name": "Jonah" } }
        ]
    })
});

static CHAPTER_RECITERS: LazyLock<Payload> = LazyLock::new(|| {
    json!({
        "reciters": [
            { "id": 1, "name": "AbdulBaset AbdulSamad", "style": "Mujawwad" },
            { "id": 2, "name": "AbdulBaset AbdulSamad", "style": "Murattal" },
            { "id": 3, "name": "Abdur-Rahman as-Sudais", "style": null },
            { "id": 4, "name": "Abu Bakr al-Shatri", "style": null },
            { "id": 5, "name": "Hani ar-Rifai", "style": null },
            { "id": 6, "name": "Mahmoud Khalil Al-Husary", "style": null },
            { "id": 7, "name": "Mishari Rashid al-`Afasy", "style": null },
            { "id": 8, "name": "Mohamed Siddiq al-Minshawi", "style": "Mujawwad" },
            { "id": 9, "name": "Mohamed Siddiq al-Minshawi", "style": "Murattal" },
            { "id": 10, "name": "Sa`ud ash-Shuraym", "style": null }
        ]
    })
});

static RECITATION_STYLES: LazyLock<Payload> = LazyLock::new(|| {
    json!({
        "styles": [
            { "id": 1, "name": "Murattal", "description": "Recitation at a normal pace" },
            { "id": 2, "name": "Mujawwad", "description": "Recitation with melody and artistic voice" },
            { "id": 3, "name": "Muallim", "description": "Educational recitation with pauses for learning" }
        ]
    })
});

static LANGUAGES: LazyLock<Payload> = LazyLock::new(|| {
    json!({
        "languages": [
            { "id": 1, "name": "English", "iso_code": "en", "native_name": "English", "direction": "ltr" },
            { "id": 2, "name": "Arabic", "iso_code": "ar", "native_name": "العربية", "direction": "rtl" },
            { "id": 3, "name": "Urdu", "iso_code": "ur", "native_name": "اردو", "direction": "rtl" },
            { "id": 4, "name": "French", "iso_code": "fr", "native_name": "Français", "direction": "ltr" },
            { "id": 5, "name": "Spanish", "iso_code": "es", "native_name": "Español", "direction": "ltr" },
            { "id": 6, "name": "Indonesian", "iso_code": "id", "native_name": "Bahasa Indonesia", "direction": "ltr" },
            { "id": 7, "name": "Turkish", "iso_code": "tr", "native_name": "Türkçe", "direction": "ltr" },
            { "id": 8, "name": "Russian", "iso_code": "ru", "native_name": "Русский", "direction": "ltr" },
            { "id": 9, "name": "German", "iso_code": "de", "native_name": "Deutsch", "direction": "ltr" },
            { "id": 10, "name": "Malay", "iso_code": "ms", "native_name": "Bahasa Melayu", "direction": "ltr" }
        ]
    })
});

static TAFSIRS: LazyLock<Payload> = LazyLock::new(|| {
    json!({
        "tafsirs": [
            { "id": 1, "name": "Tafsir Ibn Kathir", "author_name": "Ibn Kathir", "language_name": "english" },
            { "id": 2, "name": "Tafsir al-Jalalayn", "author_name": "Jalal ad-Din al-Mahalli and Jalal ad-Din as-Suyuti", "language_name": "english" },
            { "id": 3, "name": "Tanwîr al-Miqbâs min Tafsîr Ibn 'Abbâs", "author_name": "Ibn Abbas", "language_name": "english" },
            { "id": 4, "name": "Tafsir al-Tustari", "author_name": "Sahl al-Tustari", "language_name": "english" },
            { "id": 5, "name": "Kashf Al-Asrar", "author_name": "Rashid al-Din Maybudi", "language_name": "english" }
        ]
    })
});

static TRANSLATIONS: LazyLock<Payload> = LazyLock::new(|| {
    json!({
        "translations": [
            { "id": 20, "name": "Sahih International", "author_name": "Sahih International", "language_name": "english" },
            { "id": 21, "name": "Yusuf Ali", "author_name": "Abdullah Yusuf Ali", "language_name": "english" },
            { "id": 22, "name": "Pickthall", "author_name": "Mohammed Marmaduke Pickthall", "language_name": "english" },
            { "id": 23, "name": "Dr. Ghali", "author_name": "Dr. Ghali", "language_name": "english" },
            { "id": 24, "name": "Muhsin Khan", "author_name": "Muhsin Khan", "language_name": "english" },
            { "id": 25, "name": "Arberry", "author_name": "A. J. Arberry", "language_name": "english" },
            { "id": 26, "name": "Maududi", "author_name": "Abul Ala Maududi", "language_name": "english" },
            { "id": 27, "name": "Clear Quran", "author_name": "Dr. Mustafa Khattab", "language_name": "english" },
            { "id": 28, "name": "Hilali & Khan", "author_name": "Hilali & Khan", "language_name": "english" },
            { "id": 29, "name": "Taqī Usmānī", "author_name": "Mufti Taqi Usmani", "language_name": "english" }
        ]
    })
});

/// Borrow the static table for `dataset`. Never fails, never touches the network.
pub fn dataset(dataset: FallbackDataset) -> &'static Payload {
    match dataset {
        FallbackDataset::Chapters => &CHAPTERS,
        FallbackDataset::ChapterReciters => &CHAPTER_RECITERS,
        FallbackDataset::RecitationStyles => &RECITATION_STYLES,
        FallbackDataset::Languages => &LANGUAGES,
        FallbackDataset::Tafsirs => &TAFSIRS,
        FallbackDataset::Translations => &TRANSLATIONS,
    }
}

/// Owned copy of the static table for `dataset`, ready to put in a response.
pub fn get_fallback(dataset: FallbackDataset) -> Payload {
    self::dataset(dataset).clone()
}
