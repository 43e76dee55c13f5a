use desc_miner::TextNormalizer;

#[cfg(test)]
mod description_normalizer_tests {
    use super::*;

    #[test]
    fn test_lowercases_and_removes_stop_words() {
        let normalizer = TextNormalizer::description_parser();

        let text = "The BEST product!";
        let tokens = normalizer.normalize(text);
        assert_eq!(tokens, vec!["best", "product"]);
    }

    #[test]
    fn test_removes_sentence_punctuation() {
        let normalizer = TextNormalizer::description_parser();

        let text = "Top: quality; fast, strong. wow!";
        let tokens = normalizer.normalize(text);
        assert_eq!(tokens, vec!["top", "quality", "fast", "strong", "wow"]);
    }

    #[test]
    fn test_keeps_hyphens_and_apostrophes() {
        let normalizer = TextNormalizer::description_parser();

        let text = "well-built, long-lasting, doesn't rattle";
        let tokens = normalizer.normalize(text);
        assert_eq!(tokens, vec!["well-built", "long-lasting", "doesn't", "rattle"]);
    }

    #[test]
    fn test_strips_markup_before_tokenizing() {
        let normalizer = TextNormalizer::description_parser();

        let text = "<b>Great</b> value";
        let tokens = normalizer.normalize(text);
        assert_eq!(tokens, vec!["great", "value"]);
    }

    #[test]
    fn test_strips_nested_markup() {
        let normalizer = TextNormalizer::description_parser();

        let text = r#"<div class="intro"><p>Strong <em>flavor</em>, smooth texture.</p></div>"#;
        let tokens = normalizer.normalize(text);
        assert_eq!(tokens, vec!["strong", "flavor", "smooth", "texture"]);
    }

    #[test]
    fn test_collapses_repeated_whitespace() {
        let normalizer = TextNormalizer::description_parser();

        let text = "fast   \t delivery \n  guaranteed";
        let tokens = normalizer.normalize(text);
        assert_eq!(tokens, vec!["fast", "delivery", "guaranteed"]);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        let normalizer = TextNormalizer::description_parser();

        assert_eq!(normalizer.normalize(""), Vec::<String>::new());
    }

    #[test]
    fn test_stop_words_only_yields_no_tokens() {
        let normalizer = TextNormalizer::description_parser();

        assert_eq!(normalizer.normalize("the and of it is"), Vec::<String>::new());
    }

    #[test]
    fn test_punctuation_only_yields_no_tokens() {
        let normalizer = TextNormalizer::description_parser();

        assert_eq!(normalizer.normalize("... !!! ;;; ,,, :::"), Vec::<String>::new());
    }

    #[test]
    fn test_stop_word_filter_is_case_insensitive() {
        let normalizer = TextNormalizer::description_parser();

        assert_eq!(normalizer.normalize("The THE the tHe"), Vec::<String>::new());
    }

    #[test]
    fn test_normalizing_already_clean_tokens_is_stable() {
        let normalizer = TextNormalizer::description_parser();

        let tokens = normalizer.normalize("<p>The <b>finest</b> creatine, guaranteed!</p>");
        let renormalized = normalizer.normalize(&tokens.join(" "));
        assert_eq!(tokens, renormalized);
    }

    #[test]
    fn test_custom_stop_word_list() {
        let normalizer = TextNormalizer::with_stop_words(&["protein", "bar"]);

        let text = "the protein bar crumbles";
        let tokens = normalizer.normalize(text);
        assert_eq!(tokens, vec!["the", "crumbles"]);
    }
}
