//! Lexer: source text to a flat token stream
//!
//! Whitespace and comments (`// ...`, `/* ... */`) are discarded. Malformed
//! input never stops the lexer: unterminated literals, bad escapes and
//! unknown characters become error tokens that the parser reports.

use crate::token::{Token, TokenKind, is_keyword};
use feel_diagnostics::Span;
use winnow::ascii::{digit1, multispace1, till_line_ending};
use winnow::combinator::{alt, opt, repeat};
use winnow::prelude::*;
use winnow::token::{any, one_of, rest, take_until, take_while};

type Input<'a> = &'a str;

/// Tokenize a source string
///
/// Pure and total: the same input always yields the same tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut input: Input<'_> = text;
    let mut tokens = Vec::new();
    loop {
        // trivia never fails
        let _ = trivia.parse_next(&mut input);
        if input.is_empty() {
            break;
        }
        let start = text.len() - input.len();
        let before = input;
        let (kind, value) = match token.parse_next(&mut input) {
            Ok(lexed) => lexed,
            Err(_) => {
                let c = before.chars().next().unwrap_or_default();
                input = &before[c.len_utf8()..];
                (TokenKind::Unknown, c.to_string())
            }
        };
        let end = text.len() - input.len();
        tokens.push(Token::new(kind, value, Span::new(start, end)));
    }
    log::trace!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    tokens
}

fn trivia(input: &mut Input<'_>) -> ModalResult<()> {
    repeat(
        0..,
        alt((
            multispace1.void(),
            ("//", till_line_ending).void(),
            ("/*", take_until(0.., "*/"), "*/").void(),
            // an unterminated block comment runs to the end
            ("/*", rest).void(),
        )),
    )
    .parse_next(input)
}

fn token(input: &mut Input<'_>) -> ModalResult<(TokenKind, String)> {
    alt((
        number,
        string,
        temporal,
        backtick_name,
        word,
        operator.map(|op: &str| (TokenKind::Operator, op.to_string())),
        punct.map(|p: &str| (TokenKind::Punct, p.to_string())),
    ))
    .parse_next(input)
}

fn number(input: &mut Input<'_>) -> ModalResult<(TokenKind, String)> {
    alt(((digit1, opt(('.', digit1))).take(), ('.', digit1).take()))
        .map(|n: &str| (TokenKind::Number, n.to_string()))
        .parse_next(input)
}

/// Double-quoted string with escapes resolved
fn string(input: &mut Input<'_>) -> ModalResult<(TokenKind, String)> {
    '"'.parse_next(input)?;
    let mut value = String::new();
    let mut kind = TokenKind::String;
    loop {
        let Some(c) = opt(any).parse_next(input)? else {
            return Ok((TokenKind::UnterminatedString, value));
        };
        match c {
            '"' => return Ok((kind, value)),
            '\\' => match escape.parse_next(input) {
                Ok(resolved) => value.push(resolved),
                Err(_) => kind = TokenKind::InvalidEscape,
            },
            c => value.push(c),
        }
    }
}

fn escape(input: &mut Input<'_>) -> ModalResult<char> {
    alt((
        '"'.value('"'),
        '\\'.value('\\'),
        '\''.value('\''),
        'n'.value('\n'),
        'r'.value('\r'),
        't'.value('\t'),
        ('u', take_while(4, |c: char| c.is_ascii_hexdigit())).verify_map(|(_, hex): (char, &str)| {
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        }),
    ))
    .parse_next(input)
}

fn temporal(input: &mut Input<'_>) -> ModalResult<(TokenKind, String)> {
    '@'.parse_next(input)?;
    let (kind, payload) = string.parse_next(input)?;
    let kind = match kind {
        TokenKind::String => TokenKind::Temporal,
        other => other,
    };
    Ok((kind, payload))
}

fn backtick_name(input: &mut Input<'_>) -> ModalResult<(TokenKind, String)> {
    '`'.parse_next(input)?;
    let name = take_while(0.., |c: char| c != '`').parse_next(input)?;
    let kind = if opt('`').parse_next(input)?.is_some() {
        TokenKind::BacktickName
    } else {
        TokenKind::UnterminatedString
    };
    Ok((kind, name.to_string()))
}

fn word(input: &mut Input<'_>) -> ModalResult<(TokenKind, String)> {
    (
        one_of(|c: char| c.is_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_'),
    )
        .take()
        .map(|w: &str| {
            let kind = if is_keyword(w) {
                TokenKind::Keyword
            } else {
                TokenKind::Name
            };
            (kind, w.to_string())
        })
        .parse_next(input)
}

fn operator<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    alt((
        "**",
        "..",
        "!=",
        "<=",
        ">=",
        one_of(['=', '<', '>', '+', '-', '*', '/', '?']).take(),
    ))
    .parse_next(input)
}

fn punct<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    one_of(['(', ')', '[', ']', '{', '}', ',', ':', '.'])
        .take()
        .parse_next(input)
}
