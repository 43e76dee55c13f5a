use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the name of a product as an owned `String`.
pub type ProductName = String;

/// Represents a signed sentiment score. Positive values indicate positive sentiment, negative
/// values indicate negative sentiment, and zero is neutral.
pub type SentimentScore = i32;

/// Represents the total number of occurrences of a word within a dataset.
pub type WordFrequency = usize;

/// Represents a map of words to their frequency counts across all ingested records.
/// The key is the `Token`, and the value is the `WordFrequency`.
pub type WordFrequencyMap = HashMap<Token, WordFrequency>;

/// A sentiment lexicon, where each entry includes:
/// - `Token`: The lexicon word.
/// - `SentimentScore`: The word's polarity weight.
///
/// Entry order is significant: when two words share a stem, the later entry wins.
pub type SentimentLexicon = Vec<(Token, SentimentScore)>;
