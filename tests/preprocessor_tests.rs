use desc_miner::{
    Error, ProductRecord, ProductRecordListPreprocessor, SentimentLexiconPreprocessor,
};

#[cfg(test)]
mod product_record_list_preprocessor_tests {
    use super::*;

    #[test]
    fn test_parses_headerless_rows() {
        let csv = "Whey Protein,Chocolate flavored whey\nCreatine,Boosts performance\n";

        let product_records =
            ProductRecordListPreprocessor::read_product_record_list_from_string(csv)
                .expect("Failed to parse records");

        assert_eq!(
            product_records,
            vec![
                ProductRecord::new("Whey Protein", "Chocolate flavored whey"),
                ProductRecord::new("Creatine", "Boosts performance"),
            ]
        );
    }

    #[test]
    fn test_parses_quoted_fields_with_commas_and_markup() {
        let csv = "Protein Bar,\"<b>Tasty</b>, chewy, and filling\"\n";

        let product_records =
            ProductRecordListPreprocessor::read_product_record_list_from_string(csv)
                .expect("Failed to parse records");

        assert_eq!(product_records.len(), 1);
        assert_eq!(
            product_records[0].description,
            "<b>Tasty</b>, chewy, and filling"
        );
    }

    #[test]
    fn test_missing_description_column_becomes_empty() {
        let csv = "Just A Name\n";

        let product_records =
            ProductRecordListPreprocessor::read_product_record_list_from_string(csv)
                .expect("Failed to parse records");

        assert_eq!(product_records, vec![ProductRecord::new("Just A Name", "")]);
    }

    #[test]
    fn test_rows_without_names_are_skipped() {
        let csv = "Named,has a description\n,orphan description\nAlso Named,kept\n";

        let product_records =
            ProductRecordListPreprocessor::read_product_record_list_from_string(csv)
                .expect("Failed to parse records");

        let names: Vec<&str> = product_records
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Named", "Also Named"]);
    }

    #[test]
    fn test_empty_document_yields_no_records() {
        let product_records =
            ProductRecordListPreprocessor::read_product_record_list_from_string("")
                .expect("Failed to parse records");

        assert!(product_records.is_empty());
    }
}

#[cfg(test)]
mod sentiment_lexicon_preprocessor_tests {
    use super::*;

    #[test]
    fn test_parses_word_weight_rows() {
        let csv = "word,weight\nsuperb,5\nawful,-3\n";

        let sentiment_lexicon =
            SentimentLexiconPreprocessor::read_sentiment_lexicon_from_string(csv)
                .expect("Failed to parse lexicon");

        assert_eq!(
            sentiment_lexicon,
            vec![("superb".to_string(), 5), ("awful".to_string(), -3)]
        );
    }

    #[test]
    fn test_preserves_entry_order() {
        let csv = "word,weight\nlove,3\nloving,2\n";

        let sentiment_lexicon =
            SentimentLexiconPreprocessor::read_sentiment_lexicon_from_string(csv)
                .expect("Failed to parse lexicon");

        assert_eq!(sentiment_lexicon[0].0, "love");
        assert_eq!(sentiment_lexicon[1].0, "loving");
    }

    #[test]
    fn test_columns_resolve_by_header_name() {
        let csv = "weight,word\n4,stunning\n";

        let sentiment_lexicon =
            SentimentLexiconPreprocessor::read_sentiment_lexicon_from_string(csv)
                .expect("Failed to parse lexicon");

        assert_eq!(sentiment_lexicon, vec![("stunning".to_string(), 4)]);
    }

    #[test]
    fn test_missing_weight_column_is_an_error() {
        let csv = "word\nsuperb\n";

        let result = SentimentLexiconPreprocessor::read_sentiment_lexicon_from_string(csv);

        assert!(matches!(result, Err(Error::LexiconError(_))));
    }

    #[test]
    fn test_non_numeric_weight_is_an_error() {
        let csv = "word,weight\nsuperb,five\n";

        let result = SentimentLexiconPreprocessor::read_sentiment_lexicon_from_string(csv);

        assert!(matches!(result, Err(Error::LexiconError(_))));
    }
}
