//! Lexer for inner SVG markup using logos

use logos::Logos;

use crate::error::MarkupError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Tag delimiters (longer patterns win)
    #[token("</")]
    CloseStart,
    #[token("/>")]
    SelfClose,
    #[token("<")]
    Open,
    #[token(">")]
    Gt,
    #[token("=")]
    Equals,

    // Element and attribute names, including namespaced ones (xlink:href)
    #[regex(r"[a-zA-Z_:][a-zA-Z0-9_:.\-]*", |lex| lex.slice().to_string())]
    Name(String),

    // Attribute values in either quote style, entities decoded
    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        decode_entities(&s[1..s.len() - 1])
    })]
    #[regex(r#"'[^']*'"#, |lex| {
        let s = lex.slice();
        decode_entities(&s[1..s.len() - 1])
    })]
    String(String),

    // Comments, XML declarations and doctypes (skip)
    #[regex(r"<!--([^-]|-[^-])*-->", logos::skip)]
    Comment,

    #[regex(r"<\?[^?]*\?>", logos::skip)]
    Declaration,

    #[regex(r"<![A-Z][^>]*>", logos::skip)]
    Doctype,
}

/// Decode the predefined XML entities
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Lex input string into tokens with spans
///
/// Characters that start no token are collected as errors; adjacent
/// invalid bytes are reported as one span.
pub fn lex(input: &str) -> (Vec<(Token, Span)>, Vec<MarkupError>) {
    let mut tokens = Vec::new();
    let mut errors: Vec<MarkupError> = Vec::new();

    for (tok, span) in Token::lexer(input).spanned() {
        match tok {
            Ok(t) => tokens.push((t, span)),
            Err(()) => {
                if let Some(MarkupError::InvalidToken { span: last, text }) = errors.last_mut() {
                    if last.end == span.start {
                        last.end = span.end;
                        *text = input[last.clone()].to_string();
                        continue;
                    }
                }
                errors.push(MarkupError::InvalidToken {
                    text: input[span.clone()].to_string(),
                    span,
                });
            }
        }
    }

    (tokens, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let (tokens, errors) = lex(input);
        assert!(errors.is_empty(), "unexpected lex errors: {:?}", errors);
        tokens.into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_self_closing_element() {
        assert_eq!(
            tokens(r#"<path d="M20 6 9 17l-5-5"/>"#),
            vec![
                Token::Open,
                Token::Name("path".to_string()),
                Token::Name("d".to_string()),
                Token::Equals,
                Token::String("M20 6 9 17l-5-5".to_string()),
                Token::SelfClose,
            ]
        );
    }

    #[test]
    fn test_close_tag() {
        assert_eq!(
            tokens("<g></g>"),
            vec![
                Token::Open,
                Token::Name("g".to_string()),
                Token::Gt,
                Token::CloseStart,
                Token::Name("g".to_string()),
                Token::Gt,
            ]
        );
    }

    #[test]
    fn test_single_quotes_and_entities() {
        assert_eq!(
            tokens("a='x &amp; &lt;y&gt;'"),
            vec![
                Token::Name("a".to_string()),
                Token::Equals,
                Token::String("x & <y>".to_string()),
            ]
        );
    }

    #[test]
    fn test_comments_and_declarations_skipped() {
        assert_eq!(
            tokens("<?xml version=\"1.0\"?><!-- a - comment --><!DOCTYPE svg>"),
            vec![]
        );
    }

    #[test]
    fn test_hyphenated_names() {
        assert_eq!(
            tokens("stroke-width xlink:href"),
            vec![
                Token::Name("stroke-width".to_string()),
                Token::Name("xlink:href".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_characters_grouped() {
        let (_, errors) = lex("<path 12/>");
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            MarkupError::InvalidToken { span, text } => {
                assert_eq!(span, &(6..8));
                assert_eq!(text, "12");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
