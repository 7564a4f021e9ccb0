//! Markup parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::MarkupError;
use crate::markup::lexer::{Span, Token};

/// An element as written, before it is checked against the icon node rules
#[derive(Debug, Clone, PartialEq)]
pub struct RawElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<RawElement>,
    /// Name in the closing tag, `None` for self-closing elements
    pub close_tag: Option<String>,
    pub span: Span,
}

/// Parse a token list into a sequence of elements
pub fn parse_elements(
    tokens: Vec<(Token, Span)>,
    len: usize,
) -> Result<Vec<RawElement>, Vec<MarkupError>> {
    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    markup_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> Span {
    e.start()..e.end()
}

fn markup_parser<'a, I>() -> impl Parser<'a, I, Vec<RawElement>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let name = select! {
        Token::Name(s) => s,
    }
    .labelled("name");

    let value = select! {
        Token::String(s) => s,
    }
    .labelled("quoted value");

    let attribute = name.clone().then_ignore(just(Token::Equals)).then(value);

    let element = recursive(|element| {
        // `/>` has no body; `>` is followed by children and a close tag
        let self_closing = just(Token::SelfClose).to(None::<(Vec<RawElement>, String)>);
        let with_body = just(Token::Gt)
            .ignore_then(element.repeated().collect::<Vec<RawElement>>())
            .then_ignore(just(Token::CloseStart))
            .then(name.clone())
            .then_ignore(just(Token::Gt))
            .map(Some);

        just(Token::Open)
            .ignore_then(name.clone())
            .then(attribute.repeated().collect::<Vec<_>>())
            .then(choice((self_closing, with_body)))
            .map_with(|((tag, attrs), body), e| {
                let (children, close_tag) = match body {
                    Some((children, close)) => (children, Some(close)),
                    None => (Vec::new(), None),
                };
                RawElement {
                    tag,
                    attrs,
                    children,
                    close_tag,
                    span: span_range(&e.span()),
                }
            })
    });

    element.repeated().collect().then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::lexer::lex;

    fn parse(input: &str) -> Result<Vec<RawElement>, Vec<MarkupError>> {
        let (tokens, errors) = lex(input);
        assert!(errors.is_empty());
        parse_elements(tokens, input.len())
    }

    #[test]
    fn test_parse_self_closing() {
        let elements = parse(r#"<circle cx="12" cy="12" r="10"/>"#).expect("Should parse");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag, "circle");
        assert_eq!(
            elements[0].attrs,
            vec![
                ("cx".to_string(), "12".to_string()),
                ("cy".to_string(), "12".to_string()),
                ("r".to_string(), "10".to_string()),
            ]
        );
        assert_eq!(elements[0].span, 0..32);
    }

    #[test]
    fn test_parse_nested() {
        let elements = parse(r#"<svg viewBox="0 0 24 24"><path d="M1 1"/><line x1="1"></line></svg>"#)
            .expect("Should parse");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].children.len(), 2);
        assert_eq!(elements[0].children[1].tag, "line");
    }

    #[test]
    fn test_close_tag_recorded() {
        let elements = parse("<path></line>").expect("Should parse");
        assert_eq!(elements[0].tag, "path");
        assert_eq!(elements[0].close_tag.as_deref(), Some("line"));
    }

    #[test]
    fn test_missing_value() {
        let errors = parse("<path d/>").unwrap_err();
        assert!(matches!(errors[0], MarkupError::Syntax { .. }));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("").expect("Should parse"), vec![]);
    }
}
