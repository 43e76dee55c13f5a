use crate::types::SentimentLexicon;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::io::Cursor;
use std::io::Read;

pub struct SentimentLexiconPreprocessor {}

impl SentimentLexiconPreprocessor {
    pub fn read_sentiment_lexicon_from_string(csv: &str) -> Result<SentimentLexicon, Error> {
        let mut sentiment_lexicon = SentimentLexicon::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv));

        // Extract column headers
        let headers = reader
            .headers()
            .map_err(|e| Error::LexiconError(format!("Failed to read headers: {}", e)))?
            .clone();

        let word_position = headers
            .iter()
            .position(|h| h == "word")
            .ok_or_else(|| Error::LexiconError("Missing 'word' column".to_string()))?;

        let weight_position = headers
            .iter()
            .position(|h| h == "weight")
            .ok_or_else(|| Error::LexiconError("Missing 'weight' column".to_string()))?;

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::LexiconError(format!("Failed to read record: {}", e)))?;

            let word = record
                .get(word_position)
                .ok_or_else(|| Error::LexiconError("Missing 'word' field".to_string()))?;

            let weight = record
                .get(weight_position)
                .ok_or_else(|| Error::LexiconError("Missing 'weight' field".to_string()))?
                .parse()
                .map_err(|e| {
                    Error::LexiconError(format!("Invalid weight for '{}': {}", word, e))
                })?;

            sentiment_lexicon.push((word.to_string(), weight));
        }

        Ok(sentiment_lexicon)
    }

    /// Decompress and parse the sentiment lexicon from the embedded Gzip file
    pub fn extract_sentiment_lexicon_from_bytes(
        read_bytes: &[u8],
    ) -> Result<SentimentLexicon, Error> {
        // Decompress the Gzip file
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        // Use the utility function to parse the CSV data
        let sentiment_lexicon = Self::read_sentiment_lexicon_from_string(&decompressed_data)?;
        Ok(sentiment_lexicon)
    }
}
