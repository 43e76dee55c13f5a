pub mod error;
pub use error::Error;

pub mod record;
pub use record::{ProductRecord, ScoredRecord};

pub mod text_normalizer;
pub use text_normalizer::TextNormalizer;

pub mod frequency_aggregator;
pub use frequency_aggregator::{FrequencyAggregator, FrequencyGroup};

pub mod sentiment_lexicon_preprocessor;
pub use sentiment_lexicon_preprocessor::SentimentLexiconPreprocessor;

pub mod sentiment_scorer;
pub use sentiment_scorer::SentimentScorer;

pub mod extremum_tracker;
pub use extremum_tracker::ExtremumTracker;

pub mod product_record_list_preprocessor;
pub use product_record_list_preprocessor::ProductRecordListPreprocessor;

pub mod record_analyzer;
pub use record_analyzer::{AnalysisReport, RecordAnalyzer, RecordAnalyzerConfig};
