use anyhow::Context;
use dictionary::Dictionary;

use crate::custom_words::{clean_words, parse_words, read_custom_words};
use crate::render::{render, RenderedBlock};
use crate::settings::Settings;
use crate::word_pool::{EmptyPoolError, WordPool};

const BUNDLED_WORDS: &str = include_str!("../words.json");

/// The default word list: the remote one when configured, otherwise the one
/// shipped with the program. Words are trimmed and blanks dropped.
pub async fn default_words(
    dict: &Dictionary,
    words_url: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    match words_url {
        Some(url) => {
            let words = dict
                .get_word_list(url)
                .await
                .with_context(|| format!("couldn't load the default word list from {url}"))?;
            Ok(clean_words(words))
        }
        None => parse_words(BUNDLED_WORDS).context("the bundled word list is broken"),
    }
}

/// Both word lists for one run, plus why either of them came up empty.
#[derive(Debug, Default)]
pub struct WordSources {
    pub default_words: Vec<String>,
    pub custom_words: Vec<String>,
    pub warnings: Vec<String>,
}

impl WordSources {
    /// Never fails: an unavailable list is logged as a warning and left empty.
    pub async fn load(dict: &Dictionary, settings: &Settings) -> Self {
        let mut sources = Self::default();
        match read_custom_words(&settings.config_dir) {
            Ok(words) => sources.custom_words = words,
            Err(error) => sources.warn(format!("ignoring custom words: {error}")),
        }
        match default_words(dict, settings.words_url.as_deref()).await {
            Ok(words) => sources.default_words = words,
            Err(error) => sources.warn(format!("{error:#}")),
        }
        log::debug!(
            "{} default and {} custom words, {} warnings",
            sources.default_words.len(),
            sources.custom_words.len(),
            sources.warnings.len()
        );
        sources
    }

    fn warn(&mut self, warning: String) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn into_pool(self) -> Result<WordPool, EmptyPoolError> {
        WordPool::merge(self.default_words, self.custom_words)
    }
}

pub async fn word_of_the_day(settings: &Settings, width: usize) -> anyhow::Result<RenderedBlock> {
    let dict = settings.dictionary();
    let pool = WordSources::load(&dict, settings).await.into_pool()?;
    let word = pool.pick(settings.today);
    log::info!("word of the day for {} is {word:?}", settings.today);

    let entry = dict.get_definition(word).await?;
    Ok(render(&entry, width))
}
