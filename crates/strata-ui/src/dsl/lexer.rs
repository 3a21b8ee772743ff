use strata_engine::paint::ColorRgb;

use super::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    /// Numeric literal plus its source text (without a `px` suffix), so an
    /// all-digit bare color like `000000` can still be read as hex.
    Number(f64, String),
    /// Color literal: `#rrggbb` or `#rgb`.
    Color(ColorRgb),
    // Punctuation
    Colon,
    /// `;` or `,` between properties.
    Separator,
    // Sentinel
    Eof,
}

/// A token plus the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.rest().starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if self.rest().starts_with("/*") {
                self.advance();
                self.advance();
                loop {
                    if self.rest().starts_with("*/") {
                        self.advance();
                        self.advance();
                        break;
                    }
                    if self.advance().is_none() {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let Some(ch) = self.peek() else {
            return Ok(Token::Eof);
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            ';' | ',' => { self.advance(); Ok(Token::Separator) }
            '"' | '\'' => self.lex_string(ch),
            '#' => self.lex_color(),
            c if c.is_ascii_digit() || c == '-' || c == '.' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident()),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    fn lex_string(&mut self, quote: char) -> Result<Token, ParseError> {
        let start = self.err("unterminated string literal");
        self.advance();
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(start),
                Some(c) if c == quote => break,
                Some('\\') => match self.advance() {
                    Some(c) => s.push(c),
                    None => return Err(start),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Str(s))
    }

    fn lex_color(&mut self) -> Result<Token, ParseError> {
        let at = (self.line, self.col);
        self.advance(); // `#`
        let start = self.pos;
        // Take the whole word so `#12xy` reports the bad digit instead of
        // splitting into a color and an identifier.
        while matches!(self.peek(), Some(c) if c.is_alphanumeric()) {
            self.advance();
        }
        ColorRgb::from_hex(&self.src[start..self.pos])
            .map(Token::Color)
            .map_err(|e| ParseError::invalid("color", e.into(), at.0, at.1))
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let at = (self.line, self.col);

        // A digit-led word with hex letters in it is a bare color (`4c6ef5`).
        let word: &str = {
            let rest = self.rest();
            let end = rest.find(|c: char| !c.is_alphanumeric()).unwrap_or(rest.len());
            &rest[..end]
        };
        if word.chars().all(|c| c.is_ascii_hexdigit())
            && word.chars().any(|c| c.is_ascii_alphabetic())
        {
            for _ in 0..word.len() {
                self.advance();
            }
            return Ok(Token::Ident(word.to_owned()));
        }

        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        // Unit suffix is allowed and ignored: `length: 120px`.
        if self.rest().starts_with("px") {
            self.advance();
            self.advance();
        }
        let text = self.src[start..self.pos].trim_end_matches("px");
        text.parse::<f64>()
            .map(|n| Token::Number(n, text.to_owned()))
            .map_err(|_| ParseError::new(format!("invalid number {:?}", text), at.0, at.1))
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_' || c == '-') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }
}
