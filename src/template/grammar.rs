//! Template parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::TemplateError;
use crate::template::ast::Segment;
use crate::template::lexer::Token;

/// Parse template source into segments
pub fn parse(input: &str) -> Result<Vec<Segment>, Vec<TemplateError>> {
    let len = input.len();

    let token_iter = crate::template::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    let token_stream = Stream::from_iter(token_iter)
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    template_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn template_parser<'a, I>() -> impl Parser<'a, I, Vec<Segment>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // `{{` must be closed by a later `}}`; pairs nest like brackets
    let segments = recursive(|segments| {
        let literal = select! {
            Token::Text(s) => Segment::Literal(s),
        };

        let slot = select! {
            Token::Placeholder(name) => Segment::Slot(name),
        };

        let braced = segments
            .clone()
            .delimited_by(just(Token::EscapedOpen), just(Token::EscapedClose))
            .map(Segment::Braced);

        choice((literal, slot, braced))
            .repeated()
            .collect::<Vec<_>>()
            .boxed()
    });

    segments.then_ignore(end())
}
