//! Lexer for component templates using logos

use logos::Logos;

/// Byte range in template source
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Escaped braces (longer than a stray brace, so they win)
    #[token("{{")]
    EscapedOpen,
    #[token("}}")]
    EscapedClose,

    // Placeholders: `{name}` or `{3}` (positional, normalized to `_3`)
    #[regex(r"\{[a-zA-Z_][a-zA-Z0-9_]*\}", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    #[regex(r"\{[0-9]+\}", |lex| {
        let s = lex.slice();
        positional_name(&s[1..s.len() - 1])
    })]
    Placeholder(String),

    // A single brace that neither escapes nor opens a placeholder
    #[token("{")]
    StrayOpen,
    #[token("}")]
    StrayClose,

    #[regex(r"[^{}]+", |lex| lex.slice().to_string())]
    Text(String),
}

/// `{007}` and `{7}` both address slot `_7`.
pub(crate) fn positional_name(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "_0".to_string()
    } else {
        format!("_{}", trimmed)
    }
}

/// Lex template source into tokens with spans
///
/// A `{` that starts a placeholder but never closes it (`{oops</p>`, a
/// trailing `{x`) makes logos give up on that stretch. It is reported as a
/// stray `{` at the same span so the grammar rejects the template.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::StrayOpen), span))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            tokens("<p>hello</p>"),
            vec![Token::Text("<p>hello</p>".to_string())]
        );
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(
            tokens("<b>{count}</b>"),
            vec![
                Token::Text("<b>".to_string()),
                Token::Placeholder("count".to_string()),
                Token::Text("</b>".to_string()),
            ]
        );
    }

    #[test]
    fn test_positional_placeholders() {
        assert_eq!(
            tokens("{_0}{1}{007}"),
            vec![
                Token::Placeholder("_0".to_string()),
                Token::Placeholder("_1".to_string()),
                Token::Placeholder("_7".to_string()),
            ]
        );
    }

    #[test]
    fn test_escaped_pair_around_placeholder() {
        assert_eq!(
            tokens(r#"{{"state": "{name}"}}"#),
            vec![
                Token::EscapedOpen,
                Token::Text(r#""state": ""#.to_string()),
                Token::Placeholder("name".to_string()),
                Token::Text("\"".to_string()),
                Token::EscapedClose,
            ]
        );
    }

    #[test]
    fn test_placeholder_directly_before_escaped_close() {
        assert_eq!(
            tokens("{{{id}}}"),
            vec![
                Token::EscapedOpen,
                Token::Placeholder("id".to_string()),
                Token::EscapedClose,
            ]
        );
    }

    #[test]
    fn test_stray_braces() {
        assert_eq!(
            tokens("{ x }"),
            vec![
                Token::StrayOpen,
                Token::Text(" x ".to_string()),
                Token::StrayClose,
            ]
        );
    }

    #[test]
    fn test_empty_braces_are_stray() {
        assert_eq!(tokens("{}"), vec![Token::StrayOpen, Token::StrayClose]);
    }

    #[test]
    fn test_unterminated_placeholder_is_stray() {
        for input in ["{x", "{_", "{oops</p>"] {
            let toks: Vec<_> = lex(input).collect();
            assert_eq!(toks[0].0, Token::StrayOpen, "input: {}", input);
            assert_eq!(toks[0].1.start, 0, "input: {}", input);
        }
    }

    #[test]
    fn test_spans_cover_input() {
        let input = "a{b}{{c}}";
        let spans: Vec<_> = lex(input).map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..1, 1..4, 4..6, 6..7, 7..9]);
    }
}
