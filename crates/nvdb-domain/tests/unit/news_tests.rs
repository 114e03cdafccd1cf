//! Unit tests for news entities

use chrono::NaiveDate;
use nvdb_domain::{EmbeddingUpdate, NewsRecord, NewsText, ScoredNews};

fn published() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

#[test]
fn test_record_builder() {
    let record = NewsRecord::new("n-1")
        .with_header("Rupiah menguat")
        .with_description("Nilai tukar rupiah menguat terhadap dolar.")
        .with_date_time(published())
        .with_embedding("[0.1,0.2]");

    assert_eq!(record.news_id, "n-1");
    assert_eq!(record.news_header.as_deref(), Some("Rupiah menguat"));
    assert_eq!(record.date_time, Some(published()));
    assert!(record.has_embedding());
    assert!(!record.is_deleted());
}

#[test]
fn test_pending_requires_description_and_no_embedding() {
    assert!(NewsRecord::new("a").with_description("text").is_pending());
    assert!(!NewsRecord::new("b").is_pending());
    assert!(
        !NewsRecord::new("c")
            .with_description("text")
            .with_embedding("[1.0]")
            .is_pending()
    );
    assert!(
        !NewsRecord::new("d")
            .with_description("text")
            .with_deleted_at(published())
            .is_pending()
    );
}

#[test]
fn test_description_normalizes_bytes() {
    let record = NewsRecord::new("n").with_description(NewsText::Bytes(b"berita".to_vec()));
    assert_eq!(record.description().as_deref(), Some("berita"));
    assert_eq!(NewsRecord::new("m").description(), None);
}

#[test]
fn test_scored_news_from_record() {
    let record = NewsRecord::new("n-9")
        .with_header("Header")
        .with_description("Body")
        .with_date_time(published())
        .with_embedding("[1.0]");

    let scored = ScoredNews::from_record(&record, 0.93);
    assert_eq!(scored.news_id, "n-9");
    assert_eq!(scored.news_header.as_deref(), Some("Header"));
    assert_eq!(scored.news_desc.as_deref(), Some("Body"));
    assert_eq!(scored.date_time, Some(published()));
    assert_eq!(scored.score, 0.93);
}

#[test]
fn test_embedding_update() {
    let update = EmbeddingUpdate::new("n-2", "[0.5]");
    assert_eq!(update.news_id, "n-2");
    assert_eq!(update.embedding, "[0.5]");
}
