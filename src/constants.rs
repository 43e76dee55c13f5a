/// Words excluded from word frequency analysis. Comparison happens after tokens
/// have been lowercased, so the list is kept lowercase.
pub static STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "for", "yet", "so", "of", "it", "is", "to", "in",
    "with", "which", "as", "are", "that", "will", "also", "its",
];

/// Location of the product description dataset used when no URL is given on the
/// command line.
pub static DEFAULT_DATASET_CSV_URL: &str = "https://gist.githubusercontent.com/derror/24b62116c54d4c18d99b5c3527590d54/raw/510fd70161608e1bcb7b44276b89ebf06ed9cd71/dataset-gymbeam-product-descriptions-eng.csv";

// Embed the bytes from the pre-compressed sentiment lexicon
pub(crate) static COMPRESSED_SENTIMENT_LEXICON_BYTE_ARRAY: &[u8] =
    include_bytes!("../embedded_storage/sentiment_lexicon.csv.gz");
