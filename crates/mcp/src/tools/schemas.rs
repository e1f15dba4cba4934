// Descriptions and input schemas of the Quran tools

use crate::tools::{json_schema_boolean, json_schema_integer, json_schema_object, json_schema_string};
use quran_sdk::Operation;
use serde_json::{json, Map, Value};

const LANGUAGE: &str = "Parameter language (e.g., 'en', 'ar', 'fr-CA')";

pub fn description(operation: Operation) -> &'static str {
    match operation {
        Operation::ListChapters => "List Chapters",
        Operation::GetChapter => "Get Chapter",
        Operation::ChapterInfo => "Get Chapter Info",
        Operation::VersesByChapter => "Get verses by Chapter / Surah number",
        Operation::VersesByPage => "Get all verses of a specific Madani Mushaf page",
        Operation::VersesByJuz => "Get verses by Juz number",
        Operation::VersesByHizb => "Get verses by Hizb number",
        Operation::VersesByRubElHizb => "Get verses by Rub el Hizb number",
        Operation::VerseByKey => "Get verse by key",
        Operation::RandomVerse => "Get a random verse",
        Operation::Juzs => "Get list of all juzs",
        Operation::Search => "Search the Quran for specific terms",
        Operation::Translations => "Get list of available translations",
        Operation::TranslationInfo => "Get information of a specific translation",
        Operation::Translation => "Get a single translation",
        Operation::Tafsirs => "Get list of available tafsirs",
        Operation::TafsirInfo => "Get the information of a specific tafsir",
        Operation::Tafsir => "Get a single tafsir",
        Operation::ChapterReciters => "List of Chapter Reciters",
        Operation::RecitationStyles => "Get the available recitation styles",
        Operation::Languages => "Get all languages",
    }
}

fn verse_options(properties: &mut Map<String, Value>) {
    let options = [
        ("language", json_schema_string("Language to fetch word translation")),
        ("words", json_schema_boolean("Include words of each ayah")),
        ("translations", json_schema_string("Comma separated ids of translations")),
        ("audio", json_schema_integer("Id of recitation")),
        ("tafsirs", json_schema_string("Comma separated ids of tafsirs")),
        ("word_fields", json_schema_string("Comma separated list of word fields")),
        (
            "translation_fields",
            json_schema_string("Comma separated list of translation fields"),
        ),
        ("fields", json_schema_string("Comma separated list of ayah fields")),
    ];
    for (name, schema) in options {
        properties.insert(name.to_string(), schema);
    }
}

fn pagination(properties: &mut Map<String, Value>) {
    properties.insert(
        "page".to_string(),
        json_schema_integer("For paginating within the result"),
    );
    properties.insert("per_page".to_string(), json_schema_integer("Records per api call"));
}

fn text_scope(properties: &mut Map<String, Value>, fields: &str) {
    let scope = [
        ("fields", json_schema_string(fields)),
        ("chapter_number", json_schema_integer("Chapter number (1-114)")),
        ("juz_number", json_schema_integer("Juz number (1-30)")),
        ("page_number", json_schema_integer("Page number (1-604)")),
        ("hizb_number", json_schema_integer("Hizb number (1-60)")),
        ("rub_el_hizb_number", json_schema_integer("Rub el Hizb number (1-240)")),
        ("verse_key", json_schema_string("Verse key (chapter:verse)")),
    ];
    for (name, schema) in scope {
        properties.insert(name.to_string(), schema);
    }
}

/// Verse listing keyed by one required number.
fn verse_listing(field: &str, description: &str, paginated: bool) -> Value {
    let mut properties = Map::new();
    properties.insert(field.to_string(), json_schema_integer(description));
    verse_options(&mut properties);
    if paginated {
        pagination(&mut properties);
    }
    json_schema_object(Value::Object(properties), vec![field])
}

fn language_only(description: &str, required: bool) -> Value {
    let required = if required { vec!["language"] } else { vec![] };
    json_schema_object(
        json!({ "language": json_schema_string(description) }),
        required,
    )
}

pub fn input_schema(operation: Operation) -> Value {
    match operation {
        Operation::ListChapters => language_only(LANGUAGE, true),
        Operation::GetChapter => json_schema_object(
            json!({
                "language": json_schema_string(LANGUAGE),
                "id": json_schema_integer("Chapter ID (1-114), defaults to 1")
            }),
            vec!["language"],
        ),
        Operation::ChapterInfo => json_schema_object(
            json!({
                "language": json_schema_string(LANGUAGE),
                "chapter_id": json_schema_integer("Chapter ID (1-114), defaults to 1")
            }),
            vec!["language"],
        ),
        Operation::VersesByChapter => {
            verse_listing("chapter_number", "Chapter number (1-114)", true)
        }
        Operation::VersesByPage => {
            verse_listing("page_number", "Madani Mushaf page number (1-604)", true)
        }
        Operation::VersesByJuz => verse_listing("juz_number", "Juz number (1-30)", true),
        Operation::VersesByHizb => verse_listing("hizb_number", "Hizb number (1-60)", true),
        Operation::VersesByRubElHizb => {
            verse_listing("rub_el_hizb_number", "Rub el Hizb number (1-240)", false)
        }
        Operation::VerseByKey => {
            let mut properties = Map::new();
            properties.insert(
                "verse_key".to_string(),
                json_schema_string("Verse key (chapter:verse), e.g. '2:255'"),
            );
            verse_options(&mut properties);
            json_schema_object(Value::Object(properties), vec!["verse_key"])
        }
        Operation::RandomVerse => {
            let mut properties = Map::new();
            verse_options(&mut properties);
            json_schema_object(Value::Object(properties), vec![])
        }
        Operation::Juzs | Operation::RecitationStyles => json_schema_object(json!({}), vec![]),
        Operation::Search => json_schema_object(
            json!({
                "q": json_schema_string("Search query"),
                "size": json_schema_integer("Results per page"),
                "page": json_schema_integer("Page number, for pagination"),
                "language": json_schema_string(
                    "ISO code of language, boosts translations in that language"
                )
            }),
            vec!["q"],
        ),
        Operation::Translations | Operation::Tafsirs | Operation::Languages => {
            language_only("Language", false)
        }
        Operation::ChapterReciters => {
            language_only("Name of reciters in specific language", false)
        }
        Operation::TranslationInfo => json_schema_object(
            json!({ "translation_id": json_schema_string("Translation id") }),
            vec!["translation_id"],
        ),
        Operation::TafsirInfo => json_schema_object(
            json!({ "tafsir_id": json_schema_string("Tafsir id") }),
            vec!["tafsir_id"],
        ),
        Operation::Translation => {
            let mut properties = Map::new();
            properties.insert(
                "translation_id".to_string(),
                json_schema_string("Translation id"),
            );
            text_scope(&mut properties, "Comma separated fields of translation");
            json_schema_object(Value::Object(properties), vec!["translation_id"])
        }
        Operation::Tafsir => {
            let mut properties = Map::new();
            properties.insert("tafsir_id".to_string(), json_schema_string("Tafsir id"));
            text_scope(&mut properties, "Comma separated fields of tafsir");
            json_schema_object(Value::Object(properties), vec!["tafsir_id"])
        }
    }
}

fn example(description: &str, parameters: Value, operation: Operation, data: Value) -> Value {
    json!({
        "description": description,
        "parameters": parameters,
        "result": {
            "success": true,
            "message": format!("{} executed successfully", operation.name()),
            "data": data
        }
    })
}

fn saheeh(text: &str) -> Value {
    json!([{ "text": text, "resource_name": "Saheeh International" }])
}

/// Sample calls listed with the tool. Results are abridged.
pub fn examples(operation: Operation) -> Option<Value> {
    let examples = match operation {
        Operation::ListChapters => vec![
            example(
                "Get chapters in English",
                json!({ "language": "en" }),
                operation,
                json!({ "chapters": [
                    { "id": 1, "name_arabic": "الفاتحة", "name_simple": "Al-Fatihah",
                      "translated_name": { "name": "The Opening" } },
                    { "id": 2, "name_arabic": "البقرة", "name_simple": "Al-Baqarah",
                      "translated_name": { "name": "The Cow" } }
                ]}),
            ),
            example(
                "Get chapters in Arabic",
                json!({ "language": "ar" }),
                operation,
                json!({ "chapters": [
                    { "id": 1, "name_arabic": "الفاتحة", "name_simple": "Al-Fatihah",
                      "translated_name": { "name": "الفاتحة" } },
                    { "id": 2, "name_arabic": "البقرة", "name_simple": "Al-Baqarah",
                      "translated_name": { "name": "البقرة" } }
                ]}),
            ),
        ],
        Operation::GetChapter => vec![example(
            "Get Al-Fatihah (Chapter 1) in English",
            json!({ "language": "en", "id": 1 }),
            operation,
            json!({ "chapter": {
                "id": 1,
                "revelation_place": "makkah",
                "revelation_order": 5,
                "bismillah_pre": false,
                "name_simple": "Al-Fatihah",
                "name_complex": "Al-Fātiĥah",
                "name_arabic": "الفاتحة",
                "verses_count": 7,
                "pages": [1, 1],
                "translated_name": { "language_name": "english", "name": "The Opening" }
            }}),
        )],
        Operation::VersesByChapter => vec![example(
            "Get first 3 verses of Al-Fatihah with English translation",
            json!({
                "chapter_number": 1,
                "language": "en",
                "translations": "131",
                "per_page": 3,
                "page": 1
            }),
            operation,
            json!({ "verses": [
                { "id": 1, "verse_key": "1:1",
                  "text_uthmani": "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
                  "translations": saheeh("In the name of Allah, the Entirely Merciful, the Especially Merciful.") },
                { "id": 2, "verse_key": "1:2",
                  "text_uthmani": "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
                  "translations": saheeh("All praise is due to Allah, Lord of the worlds -") },
                { "id": 3, "verse_key": "1:3",
                  "text_uthmani": "الرَّحْمَٰنِ الرَّحِيمِ",
                  "translations": saheeh("The Entirely Merciful, the Especially Merciful,") }
            ]}),
        )],
        Operation::VerseByKey => vec![example(
            "Get verse 1:1 with English translation",
            json!({ "verse_key": "1:1", "language": "en", "translations": "131" }),
            operation,
            json!({ "verse": {
                "id": 1,
                "verse_key": "1:1",
                "text_uthmani": "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
                "translations": saheeh("In the name of Allah, the Entirely Merciful, the Especially Merciful.")
            }}),
        )],
        Operation::RandomVerse => vec![example(
            "Get a random verse with English translation",
            json!({ "language": "en", "translations": "131" }),
            operation,
            json!({ "verse": {
                "id": 2583,
                "verse_key": "20:39",
                "text_uthmani": "أَنِ اقْذِفِيهِ فِي التَّابُوتِ فَاقْذِفِيهِ فِي الْيَمِّ فَلْيُلْقِهِ الْيَمُّ بِالسَّاحِلِ يَأْخُذْهُ عَدُوٌّ لِّي وَعَدُوٌّ لَّهُ وَأَلْقَيْتُ عَلَيْكَ مَحَبَّةً مِّنِّي وَلِتُصْنَعَ عَلَىٰ عَيْنِي",
                "translations": saheeh("[Saying], 'Cast him into the chest and cast it into the river, and the river will throw it onto the bank; there will take him an enemy to Me and an enemy to him.' And I bestowed upon you love from Me that you would be brought up under My eye.")
            }}),
        )],
        Operation::Search => vec![example(
            "Search for 'mercy' in English translation",
            json!({ "q": "mercy", "language": "en", "size": 5, "page": 1 }),
            operation,
            json!({ "search": {
                "query": "mercy",
                "total_results": 79,
                "results": [
                    { "verse_key": "1:3",
                      "text_uthmani": "الرَّحْمَٰنِ الرَّحِيمِ",
                      "translations": saheeh("The Entirely Merciful, the Especially Merciful,") },
                    { "verse_key": "2:218",
                      "text_uthmani": "إِنَّ الَّذِينَ آمَنُوا وَالَّذِينَ هَاجَرُوا وَجَاهَدُوا فِي سَبِيلِ اللَّهِ أُولَٰئِكَ يَرْجُونَ رَحْمَتَ اللَّهِ وَاللَّهُ غَفُورٌ رَّحِيمٌ",
                      "translations": saheeh("Indeed, those who have believed and those who have emigrated and fought in the cause of Allah - those expect the mercy of Allah. And Allah is Forgiving and Merciful.") }
                ]
            }}),
        )],
        Operation::Juzs => vec![example(
            "Get list of all juzs",
            json!({}),
            operation,
            json!({ "juzs": [
                { "id": 1, "juz_number": 1, "verse_mapping": { "1": "1-7", "2": "1-141" },
                  "first_verse_id": 1, "last_verse_id": 148, "verses_count": 148 },
                { "id": 2, "juz_number": 2, "verse_mapping": { "2": "142-252" },
                  "first_verse_id": 149, "last_verse_id": 259, "verses_count": 111 }
            ]}),
        )],
        Operation::Translations => vec![example(
            "Get list of available translations",
            json!({ "language": "en" }),
            operation,
            json!({ "translations": [
                { "id": 131, "name": "Saheeh International", "author_name": "Saheeh International",
                  "slug": "saheeh-international", "language_name": "english",
                  "translated_name": { "name": "Saheeh International" } },
                { "id": 20, "name": "Yusuf Ali", "author_name": "Abdullah Yusuf Ali",
                  "slug": "yusuf-ali", "language_name": "english",
                  "translated_name": { "name": "Yusuf Ali" } }
            ]}),
        )],
        Operation::Tafsirs => vec![example(
            "Get list of available tafsirs",
            json!({ "language": "en" }),
            operation,
            json!({ "tafsirs": [
                { "id": 1, "name": "Tafsir Ibn Kathir", "author_name": "Ibn Kathir",
                  "slug": "ibn-kathir", "language_name": "english",
                  "translated_name": { "name": "Tafsir Ibn Kathir" } },
                { "id": 2, "name": "Tafsir al-Jalalayn",
                  "author_name": "Jalal ad-Din al-Mahalli and Jalal ad-Din as-Suyuti",
                  "slug": "jalalayn", "language_name": "english",
                  "translated_name": { "name": "Tafsir al-Jalalayn" } }
            ]}),
        )],
        Operation::Languages => vec![example(
            "Get all available languages",
            json!({}),
            operation,
            json!({ "languages": [
                { "id": 1, "name": "English", "iso_code": "en", "native_name": "English",
                  "direction": "ltr", "translations_count": 12 },
                { "id": 2, "name": "Arabic", "iso_code": "ar", "native_name": "العربية",
                  "direction": "rtl", "translations_count": 5 }
            ]}),
        )],
        _ => return None,
    };
    Some(Value::Array(examples))
}
