use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use dictionary::Dictionary;

const WORDS_URL: &str = "WOTD_WORDS_URL";
const DICTIONARY_URL: &str = "WOTD_DICTIONARY_URL";
const DATE: &str = "WOTD_DATE";
const CONFIG_DIR: &str = "WOTD_CONFIG_DIR";
const COLUMNS: &str = "COLUMNS";

/// Everything the run depends on from its surroundings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The local calendar day the word is picked for.
    pub today: NaiveDate,
    /// Root under which `wotd/custom_words.json` lives.
    pub config_dir: PathBuf,
    /// Remote default word list. The bundled list is used when unset.
    pub words_url: Option<String>,
    pub dictionary_url: Option<String>,
    pub columns: Option<usize>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_vars(
            |key| std::env::var(key).ok(),
            Local::now().date_naive(),
            dirs::config_dir(),
        )
    }

    fn from_vars(
        lookup: impl Fn(&str) -> Option<String>,
        today: NaiveDate,
        default_config_dir: Option<PathBuf>,
    ) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let today = match var(DATE) {
            Some(date) => match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
                Ok(date) => date,
                Err(error) => {
                    log::warn!("ignoring {DATE}={date:?}: {error}");
                    today
                }
            },
            None => today,
        };
        let config_dir = var(CONFIG_DIR)
            .map(PathBuf::from)
            .or(default_config_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let columns = var(COLUMNS)
            .and_then(|columns| columns.trim().parse::<usize>().ok())
            .filter(|columns| *columns > 0);
        Self {
            today,
            config_dir,
            words_url: var(WORDS_URL),
            dictionary_url: var(DICTIONARY_URL),
            columns,
        }
    }

    pub fn dictionary(&self) -> Dictionary {
        match &self.dictionary_url {
            Some(url) => Dictionary::with_base_url(url.clone()),
            None => Dictionary::new(),
        }
    }
}
