// https://dictionaryapi.dev/ - free, no key, returns an array of entries per word

use reqwest::StatusCode;
use serde::Deserialize;

use crate::dictionary::{PartOfSpeech, Word, WordDefinition, WordMeaning};
use crate::DictionaryError;

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiWord {
    word: String,
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    );
    log::debug!("looking up {word:?} at {url}");
    let res = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    match res.status() {
        StatusCode::NOT_FOUND => return Err(DictionaryError::not_found(word)),
        status if !status.is_success() => return Err(DictionaryError::Status(status.as_u16())),
        _ => {}
    }
    let body = res.text().await.map_err(DictionaryError::Fetch)?;
    parse_entries(&body)
        .map_err(DictionaryError::Deserialize)?
        .ok_or_else(|| DictionaryError::not_found(word))
}

/// Only the first entry of the array matters, any others are homographs.
fn parse_entries(body: &str) -> Result<Option<Word>, serde_json::Error> {
    let entries: Vec<ApiWord> = serde_json::from_str(body)?;
    Ok(entries.into_iter().next().map(Word::from))
}

impl From<ApiWord> for Word {
    fn from(value: ApiWord) -> Self {
        let phonetic = non_empty(value.phonetic)
            .or_else(|| {
                value
                    .phonetics
                    .into_iter()
                    .find_map(|phonetic| non_empty(phonetic.text))
            })
            .unwrap_or_default();
        Word {
            word: value.word,
            phonetic,
            meanings: value.meanings.into_iter().map(WordMeaning::from).collect(),
        }
    }
}

impl From<ApiMeaning> for WordMeaning {
    fn from(value: ApiMeaning) -> Self {
        WordMeaning {
            part_of_speech: PartOfSpeech::from(&value.part_of_speech[..]),
            definitions: value
                .definitions
                .into_iter()
                .map(|definition| WordDefinition {
                    definition: definition.definition,
                    example: non_empty(definition.example),
                    synonyms: definition.synonyms,
                })
                .collect(),
            synonyms: value.synonyms,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"[
        {
            "word": "hello",
            "phonetics": [
                { "audio": "" },
                { "text": "/həˈləʊ/", "audio": "https://example.org/hello.mp3" }
            ],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "\"Hello!\" or an equivalent greeting.", "synonyms": [], "antonyms": [] }
                    ],
                    "synonyms": ["greeting"],
                    "antonyms": []
                },
                {
                    "partOfSpeech": "interjection",
                    "definitions": [
                        {
                            "definition": "A greeting used when answering the telephone.",
                            "example": "Hello? How may I help you?",
                            "synonyms": [],
                            "antonyms": []
                        }
                    ]
                }
            ]
        },
        { "word": "hello", "meanings": [] }
    ]"#;

    #[test]
    fn first_entry_is_used() {
        let word = parse_entries(HELLO).unwrap().unwrap();
        assert_eq!(word.word, "hello");
        assert_eq!(word.meanings.len(), 2);
        assert_eq!(word.meanings[1].part_of_speech, PartOfSpeech::Interjection);
        assert_eq!(
            word.meanings[1].definitions[0].example.as_deref(),
            Some("Hello? How may I help you?")
        );
        assert_eq!(word.meanings[0].synonyms, ["greeting"]);
    }

    #[test]
    fn phonetic_falls_back_to_phonetics_list() {
        let word = parse_entries(HELLO).unwrap().unwrap();
        assert_eq!(word.phonetic, "/həˈləʊ/");
    }

    #[test]
    fn missing_phonetics_leave_an_empty_transcription() {
        let word = parse_entries(r#"[{"word": "zyx", "meanings": []}]"#)
            .unwrap()
            .unwrap();
        assert_eq!(word.phonetic, "");
        assert!(word.meanings.is_empty());
    }

    #[test]
    fn blank_phonetics_are_skipped() {
        let word = parse_entries(
            r#"[{"word": "tomato", "phonetic": " ", "phonetics": [{"text": ""}, {"text": "/təˈmɑːtəʊ/"}]}]"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(word.phonetic, "/təˈmɑːtəʊ/");
    }

    #[test]
    fn empty_array_has_no_entry() {
        assert_eq!(parse_entries("[]").unwrap(), None);
    }
}
