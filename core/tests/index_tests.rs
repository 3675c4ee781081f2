use reelfind_core::{KeywordIndex, Record};

fn ryan() -> Record {
    Record {
        title: Some("Saving Private Ryan".into()),
        rank: Some("1".into()),
        year: Some("1998".into()),
        rating: Some("8.6".into()),
        genres: vec!["Drama".into(), "War".into()],
        cast: vec!["Tom Hanks".into()],
        ..Record::default()
    }
}

fn list() -> Record {
    Record {
        title: Some("Schindler's List".into()),
        rank: Some("2".into()),
        year: Some("1993".into()),
        rating: Some("9.0".into()),
        genres: vec!["Biography".into(), "Drama".into(), "History".into()],
        cast: vec!["Steven Spielberg".into(), "Liam Neeson".into()],
        ..Record::default()
    }
}

#[test]
fn single_keyword_query_returns_bucket_verbatim() {
    let mut index = KeywordIndex::new();
    index.ingest_record(&ryan()).unwrap();
    index.ingest_record(&list()).unwrap();

    assert_eq!(index.query("drama"), index.bucket("drama"));
    assert_eq!(index.query("drama"), ["Saving Private Ryan", "Schindler's List"]);
}

#[test]
fn unknown_keyword_yields_empty() {
    let mut index = KeywordIndex::new();
    index.ingest_record(&ryan()).unwrap();

    assert!(index.bucket("spielberg").is_empty());
    assert!(index.query("spielberg").is_empty());
    assert!(index.query("hanks spielberg").is_empty());
}

#[test]
fn empty_query_yields_empty() {
    let mut index = KeywordIndex::new();
    index.ingest_record(&ryan()).unwrap();

    assert!(index.query("").is_empty());
    assert!(index.query("   ").is_empty());
}

#[test]
fn conjunction_requires_every_keyword() {
    let mut index = KeywordIndex::new();
    index.ingest_record(&ryan()).unwrap();
    index.ingest_record(&list()).unwrap();

    assert_eq!(index.query("hanks"), ["Saving Private Ryan"]);
    assert_eq!(index.query("1998"), ["Saving Private Ryan"]);
    assert_eq!(index.query("drama 1998"), ["Saving Private Ryan"]);
    assert_eq!(index.query("spielberg drama 1993"), ["Schindler's List"]);
    // "spielberg" only indexes Schindler's List here
    assert!(index.query("hanks spielberg").is_empty());
}

#[test]
fn two_keyword_results_appear_in_both_buckets() {
    let mut index = KeywordIndex::new();
    index.ingest_record(&ryan()).unwrap();
    index.ingest_record(&list()).unwrap();

    for title in index.query("drama war") {
        assert!(index.bucket("drama").contains(&title));
        assert!(index.bucket("war").contains(&title));
    }
}

#[test]
fn absent_keyword_collapses_result_wherever_it_appears() {
    let mut index = KeywordIndex::new();
    index.ingest_record(&ryan()).unwrap();
    index.ingest_record(&list()).unwrap();

    // absent first token: the empty seed stays empty through later filters
    assert!(index.query("lucas drama").is_empty());
    // absent middle token
    assert!(index.query("drama lucas 1998").is_empty());
}

#[test]
fn reingesting_doubles_every_occurrence() {
    let mut index = KeywordIndex::new();
    index.ingest_record(&ryan()).unwrap();
    index.ingest_record(&ryan()).unwrap();

    assert_eq!(index.bucket("hanks").len(), 2);
    assert_eq!(index.query("hanks"), ["Saving Private Ryan", "Saving Private Ryan"]);
}

#[test]
fn duplicates_survive_single_and_multi_keyword() {
    // a repeated title word puts the title in its bucket twice
    let record = Record {
        title: Some("New York, New York".into()),
        rating: Some("6.6".into()),
        genres: vec!["Drama".into(), "Musical".into()],
        ..Record::default()
    };
    let mut index = KeywordIndex::new();
    index.ingest_record(&record).unwrap();

    assert_eq!(index.query("new"), ["New York, New York", "New York, New York"]);
    // membership filtering keeps the duplicates of the working result
    assert_eq!(index.query("new drama"), ["New York, New York", "New York, New York"]);
}

#[test]
fn shared_keyword_keeps_crawl_order() {
    let mut index = KeywordIndex::new();
    index.ingest_record(&list()).unwrap();
    index.ingest_record(&ryan()).unwrap();

    assert_eq!(index.query("drama"), ["Schindler's List", "Saving Private Ryan"]);
}

#[test]
fn failed_extraction_leaves_index_untouched() {
    let mut index = KeywordIndex::new();
    let err = index
        .ingest_record(&Record { title: Some("Heat".into()), ..Record::default() })
        .unwrap_err();

    assert_eq!(err.field, "rating");
    assert!(index.is_empty());
    assert_eq!(index.keyword_count(), 0);
}

#[test]
fn raw_pair_ingestion_appends_in_order() {
    let mut index = KeywordIndex::new();
    index.ingest([
        ("drama".to_string(), "Heat".to_string()),
        ("drama".to_string(), "Casino".to_string()),
        ("crime".to_string(), "Heat".to_string()),
    ]);

    assert_eq!(index.bucket("drama"), ["Heat", "Casino"]);
    assert_eq!(index.keyword_count(), 2);
}
