use dictionary_api::{get_definition, DICTIONARY_API_URL};
use thiserror::Error;
use word_list_api::get_word_list;

mod dictionary;
mod dictionary_api;
mod word_list_api;

pub use dictionary::{PartOfSpeech, Word, WordDefinition, WordMeaning};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(reqwest::Error),
    #[error("unexpected response body: {0}")]
    Deserialize(serde_json::Error),
    #[error("API request failed with status {0}")]
    Status(u16),
    #[error("No definitions found for \"{word}\"")]
    NotFound { word: String },
}

impl DictionaryError {
    pub fn not_found(word: impl Into<String>) -> Self {
        Self::NotFound { word: word.into() }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    /// Points lookups at another server that speaks the dictionaryapi.dev format.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }

    /// Fetches a JSON array of words, e.g. a shared default word list.
    pub async fn get_word_list(&self, url: &str) -> Result<Vec<String>, DictionaryError> {
        get_word_list(&self.client, url).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
