use crate::cd::msf_to_frames;
use crate::cue::error::{CueError, CueResult};
use crate::cue::token::{Token, TokenKind, TokenValue};
use lazy_static::lazy_static;
use log::trace;
use regex::bytes::{Captures, Regex};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Lexical rules in priority order. The first rule matching the start of the
/// remaining input wins, regardless of match length.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Rule {
    Isrc,
    Timestamp,
    Number,
    Eol,
    QuotedString,
    BareString,
    Space,
}

lazy_static! {
    static ref RULES: Vec<(Rule, Regex)> = vec![
        (Rule::Isrc, rule(r"^[A-Z]{2}[A-Za-z0-9]{3}[0-9]{7}")),
        (
            Rule::Timestamp,
            rule(r"^([0-9]{1,3}):([0-9]{1,2}):([0-9]{1,2})")
        ),
        (Rule::Number, rule(r"^[0-9]+")),
        (Rule::Eol, rule(r"^[\r\n]+")),
        (Rule::QuotedString, rule(r#"(?-u)^".+?""#)),
        (Rule::BareString, rule(r"(?-u)^\S+")),
        (Rule::Space, rule(r"^[ ]+")),
    ];
    static ref TAG: Regex = rule(r"^[A-Z]+$");
}

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Pull based scanner over the raw bytes of a cue sheet.
///
/// Yields `Ok(Token)` until the input is exhausted. If the remaining input
/// matches no rule a single `Err(CueError::InvalidToken)` is yielded and the
/// iterator is finished afterwards.
#[derive(Debug)]
pub struct Lexer<'a> {
    data: &'a [u8],
    position: usize,
    line: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let position = if data.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };

        Self {
            data,
            position,
            line: 1,
            failed: false,
        }
    }

    fn scan(&mut self) -> Option<CueResult<Token>> {
        let data = self.data;

        loop {
            let remaining = &data[self.position..];
            if remaining.is_empty() {
                return None;
            }

            let Some((rule, captures)) = RULES
                .iter()
                .find_map(|(rule, regex)| regex.captures(remaining).map(|c| (*rule, c)))
            else {
                return Some(Err(self.fail(self.position)));
            };

            let offset = self.position;
            let matched = &captures[0];
            self.position += matched.len();

            let token = match rule {
                Rule::Space => continue,
                Rule::Isrc => self.token(TokenKind::Isrc, TokenValue::Text(decode(matched))),
                Rule::Timestamp => match timestamp_frames(&captures) {
                    Some(frames) => self.token(TokenKind::Timestamp, TokenValue::Integer(frames)),
                    None => return Some(Err(self.fail(offset))),
                },
                Rule::Number => match parse_decimal(matched) {
                    Some(number) => self.token(TokenKind::Number, TokenValue::Integer(number)),
                    None => return Some(Err(self.fail(offset))),
                },
                Rule::Eol => {
                    self.line += 1;
                    self.token(TokenKind::Eol, TokenValue::Text(decode(matched)))
                }
                Rule::QuotedString | Rule::BareString => {
                    if TAG.is_match(matched) {
                        self.token(TokenKind::Tag, TokenValue::Text(decode(matched)))
                    } else {
                        let text = decode(matched);
                        let text = text.trim_matches('"').to_string();
                        self.token(TokenKind::String, TokenValue::Text(text))
                    }
                }
            };

            trace!("Token {} {:?} at line {}", token.kind, token.value, token.line);
            return Some(Ok(token));
        }
    }

    fn token(&self, kind: TokenKind, value: TokenValue) -> Token {
        Token {
            kind,
            value,
            line: self.line,
        }
    }

    fn fail(&mut self, offset: usize) -> CueError {
        self.failed = true;
        CueError::InvalidToken { offset }
    }
}

impl Iterator for Lexer<'_> {
    type Item = CueResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.scan()
    }
}

/// Tokenizes a cue sheet held in memory.
pub fn tokenize(data: &[u8]) -> Lexer<'_> {
    Lexer::new(data)
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn parse_decimal(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, digit| {
        acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
    })
}

fn timestamp_frames(captures: &Captures<'_>) -> Option<u64> {
    let minutes = parse_decimal(captures.get(1)?.as_bytes())?;
    let seconds = parse_decimal(captures.get(2)?.as_bytes())?;
    let frames = parse_decimal(captures.get(3)?.as_bytes())?;
    Some(msf_to_frames(minutes, seconds, frames))
}
