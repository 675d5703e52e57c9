//! logos-based tokenizer for raw control values.
//!
//! Every style-bearing control hands the engine a raw string: a color picker
//! yields `#ff0000`, a size input yields `14` or `14px`, a font select yields
//! `Georgia, serif`. This module turns those strings into typed values, or
//! `None` when the string doesn't lex as the expected shape. Invalid input is
//! refused, never an error; the previously resolved value stays in place.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#fff` as HexColor beats lexing `#` alone)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures `#ff00aa` matches [`Token::HexColor`] and `14px`
//! matches [`Token::Dimension`], not `Number` + `Ident`.

use logos::Logos;

use super::color::Rgb;

/// Control-value token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Dimension: number with a unit suffix like `14px`, `50%`, `12pt`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|pt|em|%)")]
    Dimension,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Double-quoted string literal (quoted font family names).
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Identifier: keyword values and unquoted font family words.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `,` — separates font families in a stack.
    #[token(",")]
    Comma,
}

/// Tokenize a control value into `(Token, slice)` pairs.
///
/// Slices that fail to lex are dropped (logos error tokens are skipped).
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

/// Parse a pixel length: a bare number (`14`) or a px dimension (`14px`).
///
/// Returns `None` for anything else, including other units — the controls
/// this engine binds to only speak pixels.
pub fn parse_px(raw: &str) -> Option<f64> {
    let tokens = tokenize(raw);
    if tokens.len() != 1 {
        return None;
    }
    let (token, text) = &tokens[0];
    let digits = match token {
        Token::Number => text.as_str(),
        Token::Dimension => text.strip_suffix("px")?,
        _ => return None,
    };
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a color picker value: strictly a six-digit `#RRGGBB` hex color.
pub fn parse_color(raw: &str) -> Option<Rgb> {
    let tokens = tokenize(raw);
    if tokens.len() != 1 {
        return None;
    }
    match &tokens[0] {
        (Token::HexColor, text) => Rgb::parse_hex(text),
        _ => None,
    }
}

/// Parse a font select value into a normalized family stack.
///
/// `Georgia,serif` becomes `Georgia, serif`; quoted names keep their quotes;
/// multi-word unquoted names are joined with single spaces. Returns `None`
/// for empty input or input containing non-font tokens.
pub fn parse_font_stack(raw: &str) -> Option<String> {
    let tokens = tokenize(raw);
    if tokens.is_empty() {
        return None;
    }

    let mut families: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for (token, text) in tokens {
        match token {
            Token::Ident | Token::StringLiteral | Token::StringLiteralSingle => {
                current.push(text);
            }
            Token::Comma => {
                if current.is_empty() {
                    return None;
                }
                families.push(current.join(" "));
                current.clear();
            }
            // Numbers and colors are never font families.
            _ => return None,
        }
    }
    if current.is_empty() {
        return None;
    }
    families.push(current.join(" "));
    Some(families.join(", "))
}
