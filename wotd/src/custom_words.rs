use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utilities::read_optional_file;

const APP_DIR: &str = "wotd";
const CUSTOM_WORDS_FILE: &str = "custom_words.json";

#[derive(Debug, Error)]
pub enum CustomWordsError {
    #[error("couldn't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{} is not a JSON array of words: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn custom_words_path(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_DIR).join(CUSTOM_WORDS_FILE)
}

/// Reads the user's own word list. A missing file is an empty list.
pub fn read_custom_words(config_dir: &Path) -> Result<Vec<String>, CustomWordsError> {
    let app_dir = config_dir.join(APP_DIR);
    if let Err(error) = std::fs::create_dir_all(&app_dir) {
        log::debug!("couldn't create {}: {error}", app_dir.display());
    }
    let path = custom_words_path(config_dir);
    let contents = match read_optional_file(&path) {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            log::debug!("no custom word list at {}", path.display());
            return Ok(Vec::new());
        }
        Err(source) => return Err(CustomWordsError::Read { path, source }),
    };
    parse_words(&contents).map_err(|source| CustomWordsError::Parse { path, source })
}

pub fn parse_words(json: &str) -> Result<Vec<String>, serde_json::Error> {
    let words: Vec<String> = serde_json::from_str(json)?;
    Ok(clean_words(words))
}

/// Trims every word and drops the blank ones, whatever list they came from.
pub fn clean_words(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|word| word.trim().to_owned())
        .filter(|word| !word.is_empty())
        .collect()
}
