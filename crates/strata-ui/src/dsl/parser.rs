use strata_engine::options::{Anchor, Direction, GradientOptions, GradientOptionsBuilder, OptionsError};
use strata_engine::paint::ColorRgb;

use super::error::ParseError;
use super::lexer::{Lexer, Token, TokenWithPos};

// ── Prop ──────────────────────────────────────────────────────────────────

/// A literal on the right-hand side of a property.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Ident(String),
    Str(String),
    /// Parsed value plus source text.
    Number(f64, String),
    Color(ColorRgb),
}

/// `key: value value ...`, remembering where the key started.
#[derive(Debug, Clone, PartialEq)]
struct Prop {
    key: String,
    values: Vec<Value>,
    line: usize,
    col: usize,
}

impl Prop {
    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn invalid(&self, cause: OptionsError) -> ParseError {
        ParseError::invalid(&self.key, cause, self.line, self.col)
    }

    fn single(&self) -> Result<&Value, ParseError> {
        match self.values.as_slice() {
            [v] => Ok(v),
            _ => Err(self.err(format!("`{}` expects a single value", self.key))),
        }
    }

    fn color(&self) -> Result<ColorRgb, ParseError> {
        let hex = match self.single()? {
            Value::Color(c) => return Ok(*c),
            // Bare or quoted hex without `#`.
            Value::Str(s) | Value::Ident(s) | Value::Number(_, s) => s,
        };
        ColorRgb::from_hex(hex).map_err(|e| self.invalid(e.into()))
    }

    fn words(&self) -> Result<String, ParseError> {
        let mut words = Vec::with_capacity(self.values.len());
        for v in &self.values {
            match v {
                Value::Ident(s) | Value::Str(s) => words.push(s.as_str()),
                _ => return Err(self.err(format!("`{}` expects words", self.key))),
            }
        }
        Ok(words.join(" "))
    }

    fn pixels(&self) -> Result<u32, ParseError> {
        match self.single()? {
            Value::Number(n, _) if n.fract() == 0.0 && *n >= 1.0 && *n <= f64::from(u32::MAX) => {
                Ok(*n as u32)
            }
            _ => Err(self.err(format!(
                "`{}` expects a positive whole number of pixels",
                self.key
            ))),
        }
    }
}

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Look at the token `offset` positions ahead of current without consuming.
    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos).map(|t| t.token.clone()).unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_options(&mut self) -> Result<GradientOptions, ParseError> {
        let mut builder = GradientOptions::builder();
        let mut seen: Vec<String> = Vec::new();

        loop {
            match self.peek() {
                Token::Eof => break,
                Token::Separator => {
                    self.advance();
                }
                Token::Ident(_) => {
                    let prop = self.parse_prop()?;
                    if seen.contains(&prop.key) {
                        return Err(prop.err(format!("duplicate option `{}`", prop.key)));
                    }
                    builder = apply(builder, &prop)?;
                    seen.push(prop.key);
                }
                tok => {
                    return Err(self.err(format!("expected an option name, got {:?}", tok)));
                }
            }
        }

        builder.build().map_err(|e| {
            let (line, col) = self.current_pos();
            ParseError::invalid("options", e, line, col)
        })
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    /// Parse `key: value+`. Values run until a separator, the end of input,
    /// or the next `key:` pair.
    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, col) = self.current_pos();
        let key = match self.advance() {
            Token::Ident(s) => s,
            tok => return Err(self.err(format!("expected identifier, got {:?}", tok))),
        };
        if self.advance() != Token::Colon {
            return Err(ParseError::new(format!("expected ':' after `{}`", key), line, col));
        }

        let mut values = Vec::new();
        loop {
            match self.peek() {
                Token::Separator | Token::Eof => break,
                Token::Ident(_) if self.peek_ahead(1) == &Token::Colon => break,
                Token::Colon => return Err(self.err("unexpected ':'")),
                _ => {}
            }
            values.push(match self.advance() {
                Token::Ident(s) => Value::Ident(s),
                Token::Str(s) => Value::Str(s),
                Token::Number(n, raw) => Value::Number(n, raw),
                Token::Color(c) => Value::Color(c),
                tok => return Err(self.err(format!("expected a value, got {:?}", tok))),
            });
        }

        if values.is_empty() {
            return Err(ParseError::new(format!("missing value for `{}`", key), line, col));
        }
        Ok(Prop { key, values, line, col })
    }
}

fn apply(builder: GradientOptionsBuilder, prop: &Prop) -> Result<GradientOptionsBuilder, ParseError> {
    Ok(match prop.key.as_str() {
        "from" => builder.from(prop.color()?),
        "to" => builder.to(prop.color()?),
        "direction" => {
            let word = prop.words()?;
            builder.direction(word.parse::<Direction>().map_err(|e| prop.invalid(e))?)
        }
        "position" => {
            let words = prop.words()?;
            builder.position(words.parse::<Anchor>().map_err(|e| prop.invalid(e))?)
        }
        "length" => builder.length(prop.pixels()?),
        other => return Err(prop.err(format!("unknown option `{}`", other))),
    })
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse an options source string into [`GradientOptions`].
///
/// ```
/// use strata_ui::dsl::parse_options;
/// use strata_ui::prelude::*;
///
/// let options = parse_options("to: #4c6ef5; position: bottom").unwrap();
/// assert_eq!(options.to(), ColorRgb::new(0x4c, 0x6e, 0xf5));
/// assert_eq!(options.position(), Anchor::BOTTOM_LEFT);
/// ```
pub fn parse_options(src: &str) -> Result<GradientOptions, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_options()
}

#[cfg(test)]
mod tests {
    use strata_engine::options::{HEdge, VEdge};

    use super::*;

    fn ok(src: &str) -> GradientOptions {
        parse_options(src).unwrap()
    }

    fn err(src: &str) -> ParseError {
        parse_options(src).unwrap_err()
    }

    #[test]
    fn empty_source_is_all_defaults() {
        assert_eq!(ok(""), GradientOptions::default());
        assert_eq!(ok("  // nothing here\n ;;"), GradientOptions::default());
    }

    #[test]
    fn every_option() {
        let o = ok(r#"
            from: #1a1a2a
            to: "4c6ef5"
            direction: vertical
            position: bottom right
            length: 120
        "#);
        assert_eq!(o.from(), ColorRgb::new(0x1a, 0x1a, 0x2a));
        assert_eq!(o.to(), ColorRgb::new(0x4c, 0x6e, 0xf5));
        assert_eq!(o.direction(), Direction::Vertical);
        assert_eq!(o.position(), Anchor::new(VEdge::Bottom, HEdge::Right));
        assert_eq!(o.length().map(|l| l.get()), Some(120));
    }

    #[test]
    fn separators_and_single_line() {
        let o = ok("from: #000, to: #fff; position: right; length: 8px");
        assert_eq!(o.to(), ColorRgb::WHITE);
        assert_eq!(o.position(), Anchor::TOP_RIGHT);
        assert_eq!(o.length().map(|l| l.get()), Some(8));
    }

    #[test]
    fn bare_hex_identifier_is_accepted() {
        assert_eq!(ok("to: ffcc00").to(), ColorRgb::new(0xff, 0xcc, 0x00));
    }

    #[test]
    fn bare_hex_may_start_with_a_digit() {
        assert_eq!(ok("to: 4c6ef5").to(), ColorRgb::new(0x4c, 0x6e, 0xf5));
        assert_eq!(ok("from: 1a1a2a").from(), ColorRgb::new(0x1a, 0x1a, 0x2a));
        assert_eq!(ok("to: 000000").to(), ColorRgb::BLACK);
        assert_eq!(ok("to: 000").to(), ColorRgb::BLACK);
        assert_eq!(ok("to: 123; length: 4").to(), ColorRgb::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn invalid_values_keep_the_options_error() {
        let e = err("direction: diagonal");
        assert_eq!(e.cause(), Some(&OptionsError::UnknownDirection("diagonal".into())));
        assert!(err("length: x").cause().is_none());
    }

    #[test]
    fn quoted_position() {
        assert_eq!(ok("position: 'bottom'").position(), Anchor::BOTTOM_LEFT);
    }

    #[test]
    fn unknown_option() {
        let e = err("from: #000\nangle: 45");
        assert_eq!((e.line, e.col), (2, 1));
        assert!(e.message.contains("unknown option"));
    }

    #[test]
    fn duplicate_option() {
        assert!(err("to: #fff to: #000").message.contains("duplicate"));
    }

    #[test]
    fn bad_values() {
        assert!(err("direction: diagonal").message.contains("unknown direction"));
        assert!(err("position: top bottom").message.contains("same edge"));
        assert!(err("length: 0").message.contains("positive"));
        assert!(err("length: -4").message.contains("positive"));
        assert!(err("length: 2.5").message.contains("positive"));
        assert!(err("from: 12345").message.contains("#rrggbb"));
        assert!(err("to: -4").message.contains("hex digit"));
        assert!(err("from: #000 #fff").message.contains("single value"));
    }

    #[test]
    fn structural_errors() {
        assert!(err("from #000").message.contains("expected ':'"));
        assert!(err("from:").message.contains("missing value"));
        assert!(err("from: : #000").message.contains("unexpected ':'"));
        assert!(err("#000").message.contains("option name"));
    }
}
