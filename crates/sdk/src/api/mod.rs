//! One thin API per resource kind. Each operation pairs a static
//! [`Endpoint`](crate::pipeline::Endpoint) with the path and query it sends.

pub mod audio;
pub mod chapters;
pub mod juzs;
pub mod languages;
pub mod search;
pub mod tafsirs;
pub mod translations;
pub mod verses;

pub use audio::AudioApi;
pub use chapters::ChaptersApi;
pub use juzs::JuzsApi;
pub use languages::LanguagesApi;
pub use search::SearchApi;
pub use tafsirs::TafsirsApi;
pub use translations::TranslationsApi;
pub use verses::VersesApi;
