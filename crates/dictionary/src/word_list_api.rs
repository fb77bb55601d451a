use crate::DictionaryError;

pub(crate) async fn get_word_list(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<String>, DictionaryError> {
    log::debug!("fetching word list from {url}");
    let res: reqwest::Response = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    if !res.status().is_success() {
        return Err(DictionaryError::Status(res.status().as_u16()));
    }
    let body = res.text().await.map_err(DictionaryError::Fetch)?;
    serde_json::from_str::<Vec<String>>(&body).map_err(DictionaryError::Deserialize)
}
