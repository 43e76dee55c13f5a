mod config;
pub use config::DEFAULT_RECORD_ANALYZER_CONFIG;
mod constants;
pub use constants::{DEFAULT_DATASET_CSV_URL, STOP_WORDS};
pub mod models;
pub use models::{
    AnalysisReport, Error, ExtremumTracker, FrequencyAggregator, FrequencyGroup, ProductRecord,
    ProductRecordListPreprocessor, RecordAnalyzer, RecordAnalyzerConfig, ScoredRecord,
    SentimentLexiconPreprocessor, SentimentScorer, TextNormalizer,
};
pub mod types;
mod utils;
pub use types::{
    ProductName, SentimentLexicon, SentimentScore, Token, TokenRef, WordFrequency,
    WordFrequencyMap,
};
pub use utils::{fetch_csv_document, strip_markup_tags};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub fn analyze_product_records(
    product_records: &[ProductRecord],
) -> Result<AnalysisReport, Error> {
    let analysis_report = analyze_product_records_with_custom_config(
        DEFAULT_RECORD_ANALYZER_CONFIG,
        product_records,
    )?;

    Ok(analysis_report)
}

pub fn analyze_product_records_with_custom_config(
    record_analyzer_config: &RecordAnalyzerConfig,
    product_records: &[ProductRecord],
) -> Result<AnalysisReport, Error> {
    let record_analyzer = RecordAnalyzer::new(record_analyzer_config)?;

    let analysis_report = record_analyzer.analyze_records(product_records);

    Ok(analysis_report)
}
