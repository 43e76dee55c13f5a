use crate::models::{
    ExtremumTracker, FrequencyAggregator, FrequencyGroup, ProductRecord, ScoredRecord,
    SentimentScorer, TextNormalizer,
};
use crate::utils::strip_markup_tags;
use crate::Error;
use log::{debug, info};

pub struct RecordAnalyzerConfig {
    /// Maximum number of tied-frequency groups in the word frequency report
    pub top_group_count: usize,
}

/// The combined outcome of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub most_positive: Option<ScoredRecord>,
    pub most_negative: Option<ScoredRecord>,
    pub top_frequency_groups: Vec<FrequencyGroup>,
}

pub struct RecordAnalyzer<'a> {
    config: &'a RecordAnalyzerConfig,
    text_normalizer: TextNormalizer,
    sentiment_scorer: SentimentScorer,
}

impl<'a> RecordAnalyzer<'a> {
    /// Builds an analyzer backed by the embedded English stopword list and
    /// sentiment lexicon.
    pub fn new(config: &'a RecordAnalyzerConfig) -> Result<Self, Error> {
        let sentiment_scorer = SentimentScorer::english()?;

        Ok(Self::with_components(
            config,
            TextNormalizer::description_parser(),
            sentiment_scorer,
        ))
    }

    /// Builds an analyzer from caller-assembled components.
    pub fn with_components(
        config: &'a RecordAnalyzerConfig,
        text_normalizer: TextNormalizer,
        sentiment_scorer: SentimentScorer,
    ) -> Self {
        RecordAnalyzer {
            config,
            text_normalizer,
            sentiment_scorer,
        }
    }

    /// Runs the full analysis over the given records in one pass: normalize
    /// each description, feed the tokens to the frequency aggregator and the
    /// sentiment scorer, and track the extremal records.
    pub fn analyze_records(&self, product_records: &[ProductRecord]) -> AnalysisReport {
        info!("Analyzing {} product records...", product_records.len());

        let mut frequency_aggregator = FrequencyAggregator::new();
        let mut extremum_tracker = ExtremumTracker::new();

        for product_record in product_records {
            // The stripped description is retained for reporting, so strip once
            // and normalize the already-clean text
            let cleaned_description = strip_markup_tags(&product_record.description);
            let tokens = self.text_normalizer.normalize(&cleaned_description);

            frequency_aggregator.ingest(&tokens);

            let sentiment = self.sentiment_scorer.score(&tokens);
            debug!(
                "Scored \"{}\": {} ({} tokens)",
                product_record.name,
                sentiment,
                tokens.len()
            );

            extremum_tracker.observe(ScoredRecord {
                name: product_record.name.clone(),
                description: cleaned_description,
                sentiment,
            });
        }

        info!(
            "Analysis complete: {} distinct words across {} records",
            frequency_aggregator.distinct_word_count(),
            product_records.len()
        );

        let top_frequency_groups = frequency_aggregator.top_groups(self.config.top_group_count);
        let (most_positive, most_negative) = extremum_tracker.into_extrema();

        AnalysisReport {
            most_positive,
            most_negative,
            top_frequency_groups,
        }
    }
}
