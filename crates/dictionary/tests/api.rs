use dictionary::{Dictionary, DictionaryError, PartOfSpeech};

const SERENDIPITY: &str = r#"[{
    "word": "serendipity",
    "phonetic": "/ˌsɛɹənˈdɪpɪti/",
    "phonetics": [],
    "meanings": [{
        "partOfSpeech": "noun",
        "definitions": [{
            "definition": "A combination of events which have come together by chance to make a surprisingly good or wonderful outcome.",
            "synonyms": ["chance", "fluke"],
            "antonyms": []
        }],
        "synonyms": ["luck"],
        "antonyms": []
    }]
}]"#;

#[tokio::test]
async fn fetches_and_converts_the_first_entry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/serendipity")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SERENDIPITY)
        .create_async()
        .await;

    let dict = Dictionary::with_base_url(server.url());
    let word = dict.get_definition("serendipity").await.unwrap();

    mock.assert_async().await;
    assert_eq!(word.word, "serendipity");
    assert_eq!(word.phonetic, "/ˌsɛɹənˈdɪpɪti/");
    assert_eq!(word.meanings[0].part_of_speech, PartOfSpeech::Noun);
    assert_eq!(
        word.all_synonyms().collect::<Vec<_>>(),
        ["luck", "chance", "fluke"]
    );
}

#[tokio::test]
async fn not_found_names_the_word() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/zzzqx")
        .with_status(404)
        .with_body(r#"{"title":"No Definitions Found"}"#)
        .create_async()
        .await;

    let dict = Dictionary::with_base_url(server.url());
    let error = dict.get_definition("zzzqx").await.unwrap_err();

    assert!(matches!(error, DictionaryError::NotFound { ref word } if word == "zzzqx"));
    assert!(error.to_string().contains("zzzqx"));
}

#[tokio::test]
async fn other_failures_report_the_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/hello")
        .with_status(503)
        .create_async()
        .await;

    let dict = Dictionary::with_base_url(server.url());
    let error = dict.get_definition("hello").await.unwrap_err();

    assert!(matches!(error, DictionaryError::Status(503)));
    assert_eq!(error.to_string(), "API request failed with status 503");
}

#[tokio::test]
async fn empty_entry_list_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/hello")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let dict = Dictionary::with_base_url(server.url());
    let error = dict.get_definition("hello").await.unwrap_err();

    assert!(matches!(error, DictionaryError::NotFound { .. }));
}

#[tokio::test]
async fn words_are_url_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ice%20cream")
        .with_status(404)
        .create_async()
        .await;

    let dict = Dictionary::with_base_url(server.url());
    let _ = dict.get_definition("ice cream").await;

    mock.assert_async().await;
}

#[tokio::test]
async fn word_list_is_a_json_array() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/words.json")
        .with_status(200)
        .with_body(r#"["alpha", "beta"]"#)
        .create_async()
        .await;

    let dict = Dictionary::new();
    let words = dict
        .get_word_list(&format!("{}/words.json", server.url()))
        .await
        .unwrap();

    assert_eq!(words, ["alpha", "beta"]);
}

#[tokio::test]
async fn word_list_rejects_other_shapes() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/words.json")
        .with_status(200)
        .with_body(r#"{"words": ["alpha"]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/missing.json")
        .with_status(404)
        .create_async()
        .await;

    let dict = Dictionary::new();
    let shape = dict
        .get_word_list(&format!("{}/words.json", server.url()))
        .await
        .unwrap_err();
    let missing = dict
        .get_word_list(&format!("{}/missing.json", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(shape, DictionaryError::Deserialize(_)));
    assert!(matches!(missing, DictionaryError::Status(404)));
}
