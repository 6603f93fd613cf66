//! Edge case tests for bmc-lex

#[cfg(test)]
mod tests {
    use bmc_util::Address;
    use proptest::prelude::*;

    use crate::{
        LexError, Lexer, LexerConfig, Scanned, Token, TokenKind, DEFAULT_MAX_LEXEME_LEN, KEYWORDS,
    };

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            match lexer.next_token() {
                Ok(Scanned::Token(token)) => tokens.push(token),
                Ok(Scanned::EndOfInput) => break,
                Err(error) => panic!("unexpected error: {}", error),
            }
        }
        tokens
    }

    fn tok(kind: TokenKind, text: &str, line: u32, column: u32) -> Token {
        Token::new(kind, text, Address::new(line, column))
    }

    /// The lexeme as it appears in the source, delimiters included.
    fn raw_lexeme(token: &Token) -> String {
        match token.kind() {
            TokenKind::String => format!("\"{}\"", token.text()),
            TokenKind::Character => format!("'{}'", token.text()),
            _ => token.text().to_string(),
        }
    }

    /// Returns true if `bytes` holds nothing but whitespace and comments.
    fn is_trivia(bytes: &[u8]) -> bool {
        let mut lexer = Lexer::new(bytes);
        lexer.next_token() == Ok(Scanned::EndOfInput) && lexer.position() == bytes.len()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\n\x0B\x0C\r\n  ").is_empty());
    }

    #[test]
    fn test_edge_comments_only() {
        assert!(lex_all("// one\n/* two */\n// three").is_empty());
    }

    #[test]
    fn test_edge_assignment() {
        assert_eq!(
            lex_all("x = 42;"),
            vec![
                tok(TokenKind::Identifier, "x", 1, 1),
                tok(TokenKind::Operator, "=", 1, 3),
                tok(TokenKind::Integer, "42", 1, 5),
                tok(TokenKind::Operator, ";", 1, 7),
            ]
        );
    }

    #[test]
    fn test_edge_comparison_run() {
        assert_eq!(
            lex_all(">= > >"),
            vec![
                tok(TokenKind::Operator, ">=", 1, 1),
                tok(TokenKind::Operator, ">", 1, 4),
                tok(TokenKind::Operator, ">", 1, 6),
            ]
        );
    }

    #[test]
    fn test_edge_comment_glued_to_token() {
        assert_eq!(lex_all("/*x*/y"), vec![tok(TokenKind::Identifier, "y", 1, 6)]);
        assert_eq!(lex_all("y// x"), vec![tok(TokenKind::Identifier, "y", 1, 1)]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let tokens = lex_all("a\r\nb");
        assert_eq!(tokens[1], tok(TokenKind::Identifier, "b", 2, 1));
    }

    #[test]
    fn test_edge_division_chain() {
        let texts: Vec<_> = lex_all("a/b/ /c").into_iter().map(Token::into_text).collect();
        assert_eq!(texts, ["a", "/", "b", "/", "/", "c"]);
    }

    #[test]
    fn test_edge_slash_then_newline_then_comment() {
        let tokens = lex_all("/\n// c\nx");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Operator, "/", 1, 1),
                tok(TokenKind::Identifier, "x", 3, 1),
            ]
        );
    }

    #[test]
    fn test_edge_default_lexeme_bound() {
        let fits = "a".repeat(DEFAULT_MAX_LEXEME_LEN);
        assert_eq!(lex_all(&fits)[0].text(), fits);

        let too_long = "a".repeat(DEFAULT_MAX_LEXEME_LEN + 1);
        let mut lexer = Lexer::new(&too_long);
        assert!(matches!(
            lexer.next_token(),
            Err(LexError::LexemeTooLong { limit: DEFAULT_MAX_LEXEME_LEN, .. })
        ));
        assert_eq!(lexer.next_token(), Ok(Scanned::EndOfInput));
    }

    #[test]
    fn test_edge_zero_lexeme_bound() {
        let config = LexerConfig::default().with_max_lexeme_len(0);
        let items: Vec<_> = Lexer::with_config("x + ''", config).collect();
        assert!(matches!(items[0], Err(LexError::LexemeTooLong { .. })));
        assert_eq!(items[1].as_ref().map(Token::text), Ok("+"));
        assert!(matches!(items[2], Err(LexError::EmptyCharacterLiteral { .. })));
    }

    #[test]
    fn test_edge_non_ascii_bytes() {
        let items: Vec<_> = Lexer::new("a é").collect();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[1],
            Err(LexError::UnrecognizedCharacter { byte: 0xC3, address: Address::new(1, 3) })
        );
        assert_eq!(
            items[2],
            Err(LexError::UnrecognizedCharacter { byte: 0xA9, address: Address::new(1, 4) })
        );
    }

    #[test]
    fn test_edge_unterminated_comment_only() {
        let items: Vec<_> = Lexer::new("/* comment").collect();
        assert_eq!(
            items,
            vec![Err(LexError::UnterminatedComment { address: Address::new(1, 1) })]
        );
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        let kinds: Vec<_> = lex_all("If IF if").iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Keyword]
        );
    }

    #[test]
    fn test_edge_quote_delimiters_do_not_mix() {
        let tokens = lex_all("\"'\" '\"'");
        assert_eq!(tokens[0], tok(TokenKind::String, "'", 1, 1));
        assert_eq!(tokens[1], tok(TokenKind::Character, "\"", 1, 5));
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let tokens = lex_all("\"/* not a comment */\" x");
        assert_eq!(tokens[0].text(), "/* not a comment */");
        assert_eq!(tokens[1].text(), "x");
    }

    // ==================== PROPERTIES ====================

    const SOURCE_ALPHABET: &str = r#"[a-z0-9_ \t\n+\-*/%^<>=!&|;:,(){}\[\]"'\\@#]{0,64}"#;

    const OPERATORS: [&str; 29] = [
        "(", ")", "[", "]", "{", "}", ";", ":", ",", "*", "/", "%", "^", "+", "++", "-", "--",
        "&", "&&", "|", "||", "<", "<=", ">", ">=", "!", "!=", "=", "==",
    ];

    /// Each call consumes the skipped trivia followed by exactly the token's
    /// lexeme, and errors always make progress.
    fn check_partition(source: &str) -> Result<(), TestCaseError> {
        let bytes = source.as_bytes();
        let mut lexer = Lexer::new(source);
        loop {
            let before = lexer.position();
            let result = lexer.next_token();
            let after = lexer.position();
            match result {
                Ok(Scanned::EndOfInput) => {
                    prop_assert_eq!(after, bytes.len());
                    prop_assert!(is_trivia(&bytes[before..]));
                    return Ok(());
                },
                Ok(Scanned::Token(token)) => {
                    let raw = raw_lexeme(&token);
                    prop_assert!(after - before >= raw.len());
                    let start = after - raw.len();
                    prop_assert_eq!(&bytes[start..after], raw.as_bytes());
                    prop_assert!(is_trivia(&bytes[before..start]));
                },
                Err(_) => prop_assert!(after > before),
            }
        }
    }

    #[test]
    fn test_prop_partition() {
        proptest!(|(source in SOURCE_ALPHABET)| {
            check_partition(&source)?;
        });
    }

    #[test]
    fn test_prop_idempotent() {
        proptest!(|(source in SOURCE_ALPHABET)| {
            let first: Vec<_> = Lexer::new(&source).collect();
            let second: Vec<_> = Lexer::new(&source).collect();
            prop_assert_eq!(first, second);
        });
    }

    #[test]
    fn test_prop_identifier_shape() {
        proptest!(|(word in "[a-zA-Z_][a-zA-Z0-9_]{0,30}")| {
            let tokens = lex_all(&word);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].text(), word.as_str());
            let expected = if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            prop_assert_eq!(tokens[0].kind(), expected);
        });
    }

    #[test]
    fn test_prop_integer_shape() {
        proptest!(|(digits in "[0-9]{1,40}", spaces in " {0,3}")| {
            let source = format!("{}{}", spaces, digits);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind(), TokenKind::Integer);
            prop_assert_eq!(tokens[0].text(), digits.as_str());
            prop_assert_eq!(tokens[0].column() as usize, spaces.len() + 1);
        });
    }

    #[test]
    fn test_prop_spaced_operators_round_trip() {
        proptest!(|(ops in prop::collection::vec(prop::sample::select(OPERATORS.to_vec()), 0..20))| {
            let source = ops.join(" ");
            let texts: Vec<_> = lex_all(&source).into_iter().map(Token::into_text).collect();
            prop_assert_eq!(texts, ops);
        });
    }
}
