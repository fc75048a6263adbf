//! Error types for template parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template source
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("template error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl TemplateError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            TemplateError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn span(&self) -> &Span {
        match self {
            TemplateError::Syntax { span, .. } => span,
        }
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::template::lexer::Token>> for TemplateError {
    fn from(err: chumsky::error::Rich<'a, crate::template::lexer::Token>) -> Self {
        use crate::template::lexer::Token;
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found.as_deref() {
                Some(Token::StrayOpen) => {
                    "single '{' must be written as '{{' or open a placeholder like '{name}'"
                        .to_string()
                }
                Some(Token::StrayClose) => {
                    "single '}' must be written as '}}'".to_string()
                }
                Some(Token::EscapedClose) => "'}}' without a matching '{{'".to_string(),
                None => "unclosed '{{' at end of template".to_string(),
                Some(tok) => format!("unexpected {}", format_token(tok)),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of template".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        TemplateError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::template::lexer::Token) -> String {
    use crate::template::lexer::Token;
    match tok {
        Token::EscapedOpen => "'{{'".to_string(),
        Token::EscapedClose => "'}}'".to_string(),
        Token::Placeholder(name) => format!("placeholder '{{{}}}'", name),
        Token::StrayOpen => "'{'".to_string(),
        Token::StrayClose => "'}'".to_string(),
        Token::Text(_) => "text".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::template::Template;

    use super::*;

    #[test]
    fn test_unclosed_escape_message() {
        let errs = Template::parse("{{ open").unwrap_err();
        let TemplateError::Syntax { message, .. } = &errs[0];
        assert!(message.contains("unclosed"), "got: {}", message);
    }

    #[test]
    fn test_stray_close_message() {
        let errs = Template::parse("a } b").unwrap_err();
        let TemplateError::Syntax { message, span, .. } = &errs[0];
        assert!(message.contains("'}}'"), "got: {}", message);
        assert_eq!(span.clone(), 2..3);
    }

    #[test]
    fn test_format_contains_filename_and_message() {
        let source = "<p>{ x</p>";
        let errs = Template::parse(source).unwrap_err();
        let report = errs[0].format(source, "card.html");
        assert!(report.contains("card.html"));
        assert!(report.contains("single '{'"));
    }
}
