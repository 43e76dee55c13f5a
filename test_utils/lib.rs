use csv::ReaderBuilder;
use desc_miner::types::{SentimentLexicon, SentimentScore};
use desc_miner::{ProductRecord, ScoredRecord};
use std::error::Error;
use std::fs;

/// Utility to load product records from a headerless CSV file for testing and
/// benchmarking.
pub fn load_product_records_from_file(
    file_path: &str,
) -> Result<Vec<ProductRecord>, Box<dyn Error>> {
    let mut product_records = Vec::new();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(file_path)?;

    for record in reader.records() {
        let record = record?;

        match ProductRecord::from_fields(record.get(0), record.get(1)) {
            Ok(product_record) => product_records.push(product_record),
            Err(err) => eprintln!("Skipping invalid row: {}", err),
        }
    }

    Ok(product_records)
}

/// Reads a raw CSV document so tests can drive the library's own preprocessor.
pub fn load_csv_document_from_file(file_path: &str) -> Result<String, Box<dyn Error>> {
    Ok(fs::read_to_string(file_path)?)
}

/// A small lexicon whose words keep their weights through stemming, for
/// deterministic scorer assertions.
pub fn mini_sentiment_lexicon() -> SentimentLexicon {
    vec![
        ("good".to_string(), 3),
        ("great".to_string(), 3),
        ("bad".to_string(), -3),
        ("terrible".to_string(), -3),
        ("broken".to_string(), -1),
    ]
}

// Helper to build a scored record without spelling out every field
pub fn make_scored_record(name: &str, description: &str, sentiment: SentimentScore) -> ScoredRecord {
    ScoredRecord {
        name: name.to_string(),
        description: description.to_string(),
        sentiment,
    }
}
