use engine::tokenizer::tokenize;

#[test]
fn it_normalizes_and_stems() {
    let words = tokenize("Running Runners RUN! The café's menu.");
    // Stemming to "run" should appear
    assert!(words.contains(&"run".to_string()));
    // NFKC keeps the accent; the stemmer strips the possessive
    assert!(words.contains(&"café".to_string()));
    assert!(!words.iter().any(|w| w == "café's"));
}

#[test]
fn it_filters_stopwords() {
    let words = tokenize("The quick brown fox and the lazy dog");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
}

#[test]
fn documents_and_queries_share_one_pipeline() {
    // A query term must land in the same term space as the document body.
    let doc = tokenize("Experimental investigation of turbines");
    let query = tokenize("turbine");
    assert!(doc.contains(&query[0]));
}
