use std::fmt::Display;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Space,
    Tag,
    Number,
    Eol,
    String,
    Isrc,
    Timestamp,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Space => "SPACE",
            TokenKind::Tag => "TAG",
            TokenKind::Number => "NUMBER",
            TokenKind::Eol => "EOL",
            TokenKind::String => "STRING",
            TokenKind::Isrc => "ISRC",
            TokenKind::Timestamp => "TIMESTAMP",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TokenValue {
    /// Decoded integer of a NUMBER token, or the frame count of a TIMESTAMP.
    Integer(u64),
    Text(String),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Line the token was recognized on. EOL tokens carry the number of the line after them.
    pub line: usize,
}

impl Token {
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            TokenValue::Integer(_) => None,
        }
    }

    pub fn integer(&self) -> Option<u64> {
        match self.value {
            TokenValue::Integer(value) => Some(value),
            TokenValue::Text(_) => None,
        }
    }

    /// Consumes the token and returns its value as text; integers are formatted in decimal.
    pub fn into_text(self) -> String {
        match self.value {
            TokenValue::Text(text) => text,
            TokenValue::Integer(value) => value.to_string(),
        }
    }
}
