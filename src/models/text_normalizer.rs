use crate::constants::STOP_WORDS;
use crate::types::Token;
use crate::utils::strip_markup_tags;
use std::collections::HashSet;

pub struct TextNormalizer {
    pre_processed_stop_words: HashSet<String>,
}

impl TextNormalizer {
    /// Configuration for product description parsing
    pub fn description_parser() -> Self {
        Self::with_stop_words(STOP_WORDS)
    }

    /// Configuration with a caller-supplied stopword list
    pub fn with_stop_words(stop_words: &[&str]) -> Self {
        Self {
            pre_processed_stop_words: Self::preprocess_stop_words(stop_words),
        }
    }

    /// Normalizer function to reduce raw description markup to cleaned tokens.
    pub fn normalize(&self, text: &str) -> Vec<Token> {
        // Markup is stripped before punctuation handling and tokenization
        let cleaned_text = strip_markup_tags(text);

        cleaned_text
            .trim()
            .replace('.', "") // Remove sentence punctuation without splitting words
            .replace(',', "")
            .replace('!', "")
            .replace(':', "")
            .replace(';', "")
            .split_whitespace() // Split into words; runs of whitespace yield no empty tokens
            .map(|word| word.to_lowercase())
            // Skip stop words
            .filter(|word| !self.pre_processed_stop_words.contains(word))
            .collect()
    }

    /// Pre-process the stop words by converting to lowercase, matching the casing
    /// of normalized tokens
    fn preprocess_stop_words(stop_words: &[&str]) -> HashSet<String> {
        stop_words.iter().map(|word| word.to_lowercase()).collect()
    }
}
