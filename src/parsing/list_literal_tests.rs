#[cfg(test)]
mod tests {
    use crate::parsing::{parse_cell_literal, CellLiteral};

    fn parse_list(input: &str) -> Vec<String> {
        match parse_cell_literal(input) {
            Some(CellLiteral::List(items)) => items,
            other => panic!("expected a list for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_single_quoted_list() {
        assert_eq!(
            parse_list("['Zubehör', 'Zubehör;Bits']"),
            vec!["Zubehör", "Zubehör;Bits"]
        );
    }

    #[test]
    fn test_double_quoted_and_mixed_list() {
        assert_eq!(parse_list(r#"["a", 'b']"#), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(parse_list("[]"), Vec::<String>::new());
        assert_eq!(parse_list("[  ]"), Vec::<String>::new());
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(parse_list("['a', 'b',]"), vec!["a", "b"]);
    }

    #[test]
    fn test_escaped_quote_in_item() {
        assert_eq!(parse_list(r"['O\'Brien']"), vec!["O'Brien"]);
    }

    #[test]
    fn test_numbers_in_list_become_text() {
        assert_eq!(parse_list("[1, 2.5, -3]"), vec!["1", "2.5", "-3"]);
    }

    #[test]
    fn test_top_level_string() {
        assert_eq!(
            parse_cell_literal("'Werkzeuge;Bits'"),
            Some(CellLiteral::Text("Werkzeuge;Bits".to_string()))
        );
        assert_eq!(
            parse_cell_literal(r#""flach""#),
            Some(CellLiteral::Text("flach".to_string()))
        );
    }

    #[test]
    fn test_top_level_scalars() {
        assert_eq!(
            parse_cell_literal("123"),
            Some(CellLiteral::Other("123".to_string()))
        );
        assert_eq!(
            parse_cell_literal(" True "),
            Some(CellLiteral::Other("True".to_string()))
        );
        assert_eq!(
            parse_cell_literal("None"),
            Some(CellLiteral::Other("None".to_string()))
        );
    }

    #[test]
    fn test_bare_text_is_not_a_literal() {
        assert_eq!(parse_cell_literal("Werkzeuge"), None);
        assert_eq!(parse_cell_literal("A;B"), None);
    }

    #[test]
    fn test_rejects_outside_grammar() {
        // nested lists are outside the accepted grammar
        assert_eq!(parse_cell_literal("[['a']]"), None);
        // unquoted list elements
        assert_eq!(parse_cell_literal("[abc]"), None);
        // unterminated string
        assert_eq!(parse_cell_literal("['a"), None);
        // trailing garbage after a valid literal
        assert_eq!(parse_cell_literal("'a' x"), None);
        assert_eq!(parse_cell_literal("['a'] ['b']"), None);
    }
}
