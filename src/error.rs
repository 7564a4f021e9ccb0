//! Error types for markup parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkupError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    #[error("Unexpected characters {text:?} at {span:?}")]
    InvalidToken { span: Span, text: String },

    #[error("Closing tag </{close}> does not match <{open}> at {span:?}")]
    MismatchedTag {
        span: Span,
        open: String,
        close: String,
    },

    #[error("<{tag}> at {span:?} cannot contain child elements")]
    NestedElement { span: Span, tag: String },

    #[error("markup contains no elements")]
    Empty,
}

impl MarkupError {
    /// Byte range the error points at
    pub fn span(&self) -> Span {
        match self {
            MarkupError::Syntax { span, .. }
            | MarkupError::InvalidToken { span, .. }
            | MarkupError::MismatchedTag { span, .. }
            | MarkupError::NestedElement { span, .. } => span.clone(),
            MarkupError::Empty => 0..0,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = char_span(source, self.span());
        let (message, label) = match self {
            MarkupError::Syntax {
                message, expected, ..
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (message.clone(), format!("{}{}", message, expected_str))
            }
            MarkupError::InvalidToken { text, .. } => (
                "Unexpected characters".to_string(),
                format!("'{}' is not valid SVG markup here", text),
            ),
            MarkupError::MismatchedTag { open, close, .. } => (
                format!("Closing tag </{}> does not match <{}>", close, open),
                format!("expected </{}>", open),
            ),
            MarkupError::NestedElement { tag, .. } => (
                format!("<{}> cannot contain child elements", tag),
                "icon nodes must be leaf elements".to_string(),
            ),
            MarkupError::Empty => (
                self.to_string(),
                "expected at least one element".to_string(),
            ),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Convert a byte span into the char offsets ariadne labels expect
fn char_span(source: &str, span: Span) -> Span {
    let to_char = |byte: usize| {
        let byte = byte.min(source.len());
        source
            .char_indices()
            .take_while(|(idx, _)| *idx < byte)
            .count()
    };
    to_char(span.start)..to_char(span.end)
}

impl<'a> From<chumsky::error::Rich<'a, crate::markup::lexer::Token>> for MarkupError {
    fn from(err: chumsky::error::Rich<'a, crate::markup::lexer::Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        MarkupError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::markup::lexer::Token) -> String {
    use crate::markup::lexer::Token;
    match tok {
        Token::Name(s) => format!("name '{}'", s),
        Token::String(s) => format!("value \"{}\"", s),
        Token::Open => "'<'".to_string(),
        Token::CloseStart => "'</'".to_string(),
        Token::SelfClose => "'/>'".to_string(),
        Token::Gt => "'>'".to_string(),
        Token::Equals => "'='".to_string(),
        _ => format!("{:?}", tok),
    }
}
