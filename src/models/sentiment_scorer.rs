use crate::constants::COMPRESSED_SENTIMENT_LEXICON_BYTE_ARRAY;
use crate::models::SentimentLexiconPreprocessor;
use crate::types::{SentimentLexicon, SentimentScore, Token, TokenRef};
use crate::Error;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashMap;

pub struct SentimentScorer {
    stemmer: Stemmer,
    stemmed_lexicon: HashMap<Token, SentimentScore>,
}

impl SentimentScorer {
    /// Configuration using the embedded English lexicon
    pub fn english() -> Result<Self, Error> {
        let sentiment_lexicon = SentimentLexiconPreprocessor::extract_sentiment_lexicon_from_bytes(
            COMPRESSED_SENTIMENT_LEXICON_BYTE_ARRAY,
        )?;

        Self::with_lexicon(&sentiment_lexicon)
    }

    /// Configuration with a caller-supplied lexicon
    pub fn with_lexicon(sentiment_lexicon: &SentimentLexicon) -> Result<Self, Error> {
        if sentiment_lexicon.is_empty() {
            return Err(Error::LexiconError(
                "Sentiment lexicon contains no entries".to_string(),
            ));
        }

        let stemmer = Stemmer::create(Algorithm::English);

        // Stem the lexicon keys up front so lookups need a single stemming pass.
        // When two words collapse to one stem, the later entry wins.
        let mut stemmed_lexicon = HashMap::with_capacity(sentiment_lexicon.len());
        for (word, weight) in sentiment_lexicon {
            let stemmed_word = stemmer.stem(&word.to_lowercase()).into_owned();
            stemmed_lexicon.insert(stemmed_word, *weight);
        }

        Ok(SentimentScorer {
            stemmer,
            stemmed_lexicon,
        })
    }

    /// Sums the polarity contributions of every token. Tokens absent from the
    /// lexicon contribute 0, so an empty token list scores 0.
    pub fn score(&self, tokens: &[Token]) -> SentimentScore {
        tokens.iter().map(|token| self.token_weight(token)).sum()
    }

    /// Looks up a single token's polarity weight through the stemmer.
    pub fn token_weight(&self, token: &TokenRef) -> SentimentScore {
        let lowercased_token = token.to_lowercase();
        let stemmed_token = self.stemmer.stem(&lowercased_token);

        self.stemmed_lexicon
            .get(stemmed_token.as_ref())
            .copied()
            .unwrap_or(0)
    }

    /// Returns the number of distinct stems the lexicon collapsed to.
    pub fn stemmed_entry_count(&self) -> usize {
        self.stemmed_lexicon.len()
    }
}
