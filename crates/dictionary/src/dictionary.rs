use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub word: String,
    /// Empty when the dictionary has no transcription for the word.
    pub phonetic: String,
    pub meanings: Vec<WordMeaning>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
}

impl Word {
    /// Every synonym of the word, meaning-level ones before the definition-level
    /// ones of that meaning, without repeats.
    pub fn all_synonyms(&self) -> impl Iterator<Item = &str> {
        let mut seen = Vec::new();
        self.meanings
            .iter()
            .flat_map(|meaning| {
                meaning.synonyms.iter().chain(
                    meaning
                        .definitions
                        .iter()
                        .flat_map(|definition| definition.synonyms.iter()),
                )
            })
            .map(|synonym| synonym.trim())
            .filter(move |synonym| {
                if synonym.is_empty() || seen.contains(synonym) {
                    false
                } else {
                    seen.push(*synonym);
                    true
                }
            })
    }
}

impl From<&str> for PartOfSpeech {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "noun" => Self::Noun,
            "pronoun" => Self::Pronoun,
            "verb" => Self::Verb,
            "adjective" => Self::Adjective,
            "adverb" => Self::Adverb,
            "preposition" => Self::Preposition,
            "conjunction" => Self::Conjunction,
            "interjection" => Self::Interjection,
            _ => Self::Other(value.trim().to_owned()),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Noun => "noun",
            Self::Pronoun => "pronoun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
            Self::Other(other) => other,
        };
        f.write_str(name)
    }
}
