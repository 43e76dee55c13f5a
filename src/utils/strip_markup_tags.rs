/// Removes angle-bracket markup spans (e.g. `<b>`, `</p>`, `<br />`) from the text.
///
/// A span is an opening `<`, one or more non-`>` characters, and the next `>`.
/// A bare `<>` pair and an unterminated `<` are kept as-is.
pub fn strip_markup_tags(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open_index) = rest.find('<') {
        let (before, after_open) = rest.split_at(open_index);
        stripped.push_str(before);

        match after_open[1..].find('>') {
            // At least one character sits between the brackets, so the span closes
            Some(close_offset) if close_offset > 0 => {
                rest = &after_open[close_offset + 2..];
            }
            _ => {
                stripped.push('<');
                rest = &after_open[1..];
            }
        }
    }

    stripped.push_str(rest);
    stripped
}

#[cfg(test)]
mod tests {
    use super::strip_markup_tags;

    #[test]
    fn test_strips_paired_tags() {
        assert_eq!(strip_markup_tags("<b>Great</b> value"), "Great value");
    }

    #[test]
    fn test_strips_tags_with_attributes() {
        assert_eq!(
            strip_markup_tags(r#"<a href="https://example.com">link</a> text"#),
            "link text"
        );
    }

    #[test]
    fn test_strips_self_closing_tags() {
        assert_eq!(strip_markup_tags("line one<br />line two"), "line oneline two");
    }

    #[test]
    fn test_keeps_empty_bracket_pair() {
        assert_eq!(strip_markup_tags("a <> b"), "a <> b");
    }

    #[test]
    fn test_keeps_unterminated_bracket() {
        assert_eq!(strip_markup_tags("5 < 6"), "5 < 6");
    }

    #[test]
    fn test_strips_span_between_comparison_brackets() {
        // Mirrors how a non-greedy tag pattern treats stray bracket pairs
        assert_eq!(strip_markup_tags("a < b and c > d"), "a  d");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_markup_tags(""), "");
    }

    #[test]
    fn test_no_tags_is_unchanged() {
        assert_eq!(strip_markup_tags("plain text"), "plain text");
    }

    #[test]
    fn test_strips_consecutive_tags() {
        assert_eq!(strip_markup_tags("<ul><li>one</li></ul>"), "one");
    }
}
