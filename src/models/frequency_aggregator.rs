use crate::types::{Token, TokenRef, WordFrequency, WordFrequencyMap};
use std::collections::HashMap;

/// A set of words sharing an identical occurrence count, used for ranked reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyGroup {
    pub frequency: WordFrequency,
    pub words: Vec<Token>,
}

pub struct FrequencyAggregator {
    word_frequency_map: WordFrequencyMap,
    // Distinct words in the order they were first seen, so tied groups report
    // in a stable order
    first_seen_words: Vec<Token>,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        FrequencyAggregator {
            word_frequency_map: WordFrequencyMap::new(),
            first_seen_words: Vec::new(),
        }
    }

    /// Increments the count of every given token by one, initializing unseen
    /// tokens to a count of one.
    pub fn ingest(&mut self, tokens: &[Token]) {
        for token in tokens {
            // First sighting fixes the word's position within tied groups
            if !self.word_frequency_map.contains_key(token) {
                self.first_seen_words.push(token.clone());
            }

            *self.word_frequency_map.entry(token.clone()).or_insert(0) += 1;
        }
    }

    /// Groups the accumulated words by their occurrence counts and returns the
    /// `n` most frequent groups.
    ///
    /// ### Ordering:
    /// - **Groups:** Sorted by frequency in descending order (higher frequency first).
    /// - **Words within a group:** Retain the order in which they were first
    ///   ingested, keeping tied reports deterministic.
    ///
    /// ### Parameters:
    /// - `n`: The maximum number of groups to return. If fewer than `n` distinct
    ///   frequencies exist, all of them are returned.
    ///
    /// ### Returns:
    /// - A `Vec` of `FrequencyGroup` entries, sorted as described above. Empty
    ///   if nothing has been ingested.
    ///
    /// ### Example:
    /// ```rust
    /// use desc_miner::models::FrequencyAggregator;
    ///
    /// let mut aggregator = FrequencyAggregator::new();
    /// aggregator.ingest(&[
    ///     "bad".to_string(),
    ///     "bad".to_string(),
    ///     "terrible".to_string(),
    /// ]);
    ///
    /// let groups = aggregator.top_groups(2);
    /// assert_eq!(groups[0].frequency, 2);
    /// assert_eq!(groups[0].words, vec!["bad".to_string()]);
    /// assert_eq!(groups[1].frequency, 1);
    /// assert_eq!(groups[1].words, vec!["terrible".to_string()]);
    /// ```
    pub fn top_groups(&self, n: usize) -> Vec<FrequencyGroup> {
        // Bucket words by their raw frequency count
        let mut frequency_buckets: HashMap<WordFrequency, Vec<Token>> = HashMap::new();

        for word in &self.first_seen_words {
            let frequency = self.word_frequency_map.get(word).copied().unwrap_or(0);

            frequency_buckets
                .entry(frequency)
                .or_insert_with(Vec::new)
                .push(word.clone());
        }

        let mut sorted_groups: Vec<FrequencyGroup> = frequency_buckets
            .into_iter()
            .map(|(frequency, words)| FrequencyGroup { frequency, words })
            .collect();

        // Sort by frequency (descending); words within each group are already
        // in first-seen order
        sorted_groups.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        sorted_groups.truncate(n);
        sorted_groups
    }

    /// Returns the accumulated count for a single word, if it has been seen.
    pub fn get_frequency(&self, word: &TokenRef) -> Option<WordFrequency> {
        self.word_frequency_map.get(word).copied()
    }

    /// Returns the number of distinct words ingested so far.
    pub fn distinct_word_count(&self) -> usize {
        self.first_seen_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen_words.is_empty()
    }
}

impl Default for FrequencyAggregator {
    fn default() -> Self {
        Self::new()
    }
}
