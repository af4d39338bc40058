use std::rc::Rc;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{offset, Position, Span, DEFAULT_SOURCE_NAME, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r]+").unwrap();
}

/// Byte-oriented tokenizer producing one token per [`Lexer::next_token`] call.
///
/// `position` is the offset of `ch`, `read_position` the offset of the byte
/// after it. Once the input is exhausted every call yields `EOF`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_SOURCE_NAME)));

        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    fn read_char(&mut self) {
        if self.read_position >= self.source.len() {
            self.ch = 0;
            self.position = self.source.len();
            self.read_position = self.source.len();
            return;
        }

        self.ch = self.bytes()[self.read_position];
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        self.bytes().get(self.read_position).copied().unwrap_or(0)
    }

    /// Moves the cursors so `ch` sits at byte offset `to`.
    fn seek(&mut self, to: usize) {
        self.read_position = to;
        self.read_char();
    }

    /// Consumes the maximal run matched by `pattern` at the cursor.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let start = self.position;
        let len = pattern
            .find(&self.bytes()[start..])
            .map(|m| m.end())
            .unwrap_or(0);

        let run = String::from_utf8_lossy(&self.bytes()[start..start + len]).into_owned();
        self.seek(start + len);
        run
    }

    /// Reads the body of a string literal; the cursor starts on the opening
    /// quote and ends on the closing quote, or at end-of-input when the
    /// literal is unterminated.
    fn read_string(&mut self) -> String {
        let start = self.position + 1;

        loop {
            self.read_char();
            if self.ch == b'"' || self.at_eof() {
                break;
            }
        }

        String::from_utf8_lossy(&self.bytes()[start..self.position]).into_owned()
    }

    fn skip_whitespace(&mut self) {
        if !self.at_eof() {
            self.read_run(&WHITESPACE_PATTERN);
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span {
            start: Position(offset(start), Rc::clone(&self.file)),
            end: Position(offset(self.position), Rc::clone(&self.file)),
        }
    }

    fn single(&self, kind: TokenKind) -> Token {
        MK_TOKEN!(
            kind,
            String::from_utf8_lossy(&[self.ch]).into_owned(),
            Span {
                start: Position(offset(self.position), Rc::clone(&self.file)),
                end: Position(offset(self.position + 1), Rc::clone(&self.file)),
            }
        )
    }

    /// Scans `ch` and, when the next byte is `=`, folds both into `double`.
    fn with_equals(&mut self, single: TokenKind, double: TokenKind) -> Token {
        if self.peek_char() != b'=' {
            return self.single(single);
        }

        let start = self.position;
        let first = self.ch;
        self.read_char();
        let literal = String::from_utf8_lossy(&[first, self.ch]).into_owned();

        MK_TOKEN!(
            double,
            literal,
            Span {
                start: Position(offset(start), Rc::clone(&self.file)),
                end: Position(offset(self.position + 1), Rc::clone(&self.file)),
            }
        )
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), self.span_from(self.position));
        }

        let token = match self.ch {
            b'=' => self.with_equals(TokenKind::Assignment, TokenKind::Equals),
            b'!' => self.with_equals(TokenKind::Not, TokenKind::NotEquals),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Dash),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Less),
            b'>' => self.single(TokenKind::Greater),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b':' => self.single(TokenKind::Colon),
            b'(' => self.single(TokenKind::OpenParen),
            b')' => self.single(TokenKind::CloseParen),
            b'{' => self.single(TokenKind::OpenCurly),
            b'}' => self.single(TokenKind::CloseCurly),
            b'[' => self.single(TokenKind::OpenBracket),
            b']' => self.single(TokenKind::CloseBracket),
            b'"' => {
                let start = self.position;
                let literal = self.read_string();
                let mut span = self.span_from(start);
                if !self.at_eof() {
                    span.end.0 = span.end.0.saturating_add(1);
                }
                MK_TOKEN!(TokenKind::String, literal, span)
            }
            b'0'..=b'9' => {
                let start = self.position;
                let literal = self.read_run(&INTEGER_PATTERN);
                return MK_TOKEN!(TokenKind::Integer, literal, self.span_from(start));
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                let start = self.position;
                let literal = self.read_run(&IDENTIFIER_PATTERN);
                return MK_TOKEN!(lookup_identifier(&literal), literal, self.span_from(start));
            }
            _ => self.single(TokenKind::Illegal),
        };

        self.read_char();
        token
    }
}

/// Tokenizes a whole source, up to and including the first `EOF` token.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
