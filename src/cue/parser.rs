use crate::cue::directive::{Context, Directive};
use crate::cue::error::{CueError, CueErrorKind, CueResult};
use crate::cue::models::{Index, Sheet, Track};
use crate::cue::token::{Token, TokenKind};
use log::{debug, trace};

const VALUE: &[TokenKind] = &[
    TokenKind::String,
    TokenKind::Tag,
    TokenKind::Number,
    TokenKind::Isrc,
];

/// Single pass builder turning a token stream into a [`Sheet`].
///
/// Only running out of tokens between directives ends a parse successfully;
/// running out while a directive still expects a token is an error.
pub struct Parser<I> {
    tokens: I,
    line: usize,
    sheet: Sheet,
    current: Option<Track>,
}

impl<I> Parser<I>
where
    I: Iterator<Item = CueResult<Token>>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            line: 1,
            sheet: Sheet::default(),
            current: None,
        }
    }

    pub fn parse(mut self) -> CueResult<Sheet> {
        while let Some(token) = self.next_token()? {
            if token.kind != TokenKind::Tag {
                return Err(CueError::MissingTag { line: token.line });
            }

            let context = if self.current.is_some() {
                Context::Track
            } else {
                Context::Disc
            };

            let line = token.line;
            let tag = token.into_text();
            let directive = Directive::lookup(context, &tag)
                .ok_or_else(|| CueError::InvalidTag { tag, line })?;

            trace!("Directive {directive:?} at line {line}");
            self.apply(directive)?;
        }

        self.flush_track();

        debug!(
            "Parsed cue sheet with {} tracks, catalog: {:?}",
            self.sheet.tracks.len(),
            self.sheet.catalog
        );

        Ok(self.sheet)
    }

    fn apply(&mut self, directive: Directive) -> CueResult<()> {
        match directive {
            Directive::Comment | Directive::TrackFile => self.skip_to_eol(),
            Directive::Track => self.track(),
            Directive::Catalog => {
                let catalog = self.expect(&[TokenKind::String], CueErrorKind::MissingValue)?;
                self.sheet.catalog = Some(catalog.into_text());
                self.expect_eol(CueErrorKind::ExcessData)
            }
            Directive::DiscAttribute => {
                self.expect(VALUE, CueErrorKind::MissingValue)?;
                self.expect_eol(CueErrorKind::ExcessData)
            }
            Directive::File => {
                let filename = self.expect(&[TokenKind::String], CueErrorKind::MissingFilename)?;
                let file_type = self.expect(
                    &[TokenKind::String, TokenKind::Tag],
                    CueErrorKind::MissingFileType,
                )?;
                debug!(
                    "Cue sheet references {:?} as {:?}",
                    filename.text(),
                    file_type.text()
                );
                self.expect_eol(CueErrorKind::ExcessData)
            }
            Directive::Isrc => {
                let isrc = self.expect(&[TokenKind::Isrc], CueErrorKind::MissingValue)?;
                if let Some(track) = self.current.as_mut() {
                    track.isrc = Some(isrc.into_text());
                }
                self.expect_eol(CueErrorKind::InvalidData)
            }
            Directive::TrackAttribute => {
                self.expect(VALUE, CueErrorKind::MissingValue)?;
                self.expect_eol(CueErrorKind::InvalidData)
            }
            Directive::Flags => {
                let accepted = [TokenKind::String, TokenKind::Tag, TokenKind::Eol];
                while self.expect(&accepted, CueErrorKind::InvalidFlag)?.kind != TokenKind::Eol {}
                Ok(())
            }
            Directive::Gap => {
                self.expect(&[TokenKind::Timestamp], CueErrorKind::InvalidTimestamp)?;
                self.expect_eol(CueErrorKind::ExcessData)
            }
            Directive::Index => self.index(),
        }
    }

    fn track(&mut self) -> CueResult<()> {
        self.flush_track();

        let token = self.expect(&[TokenKind::Number], CueErrorKind::InvalidTrackNumber)?;
        let number = token
            .integer()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(CueError::InvalidTrackNumber { line: token.line })?;

        let track_type = self.expect(
            &[TokenKind::Tag, TokenKind::String],
            CueErrorKind::InvalidTrackType,
        )?;
        let is_audio = track_type.text() == Some("AUDIO");

        self.current = Some(Track {
            number,
            indexes: Vec::new(),
            is_audio,
            isrc: None,
        });

        self.expect_eol(CueErrorKind::ExcessData)
    }

    fn index(&mut self) -> CueResult<()> {
        let token = self.expect(&[TokenKind::Number], CueErrorKind::InvalidIndexNumber)?;
        let number = token
            .integer()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(CueError::InvalidIndexNumber { line: token.line })?;

        let token = self.expect(&[TokenKind::Timestamp], CueErrorKind::InvalidTimestamp)?;
        let frames = token
            .integer()
            .ok_or(CueError::InvalidTimestamp { line: token.line })?;

        if let Some(track) = self.current.as_mut() {
            track.indexes.push(Index::from_frames(number, frames));
        }

        self.expect_eol(CueErrorKind::ExcessData)
    }

    fn flush_track(&mut self) {
        if let Some(track) = self.current.take() {
            debug!(
                "Track {} with {} indexes, audio: {}",
                track.number,
                track.indexes.len(),
                track.is_audio
            );
            self.sheet.tracks.push(track);
        }
    }

    fn next_token(&mut self) -> CueResult<Option<Token>> {
        match self.tokens.next() {
            None => Ok(None),
            Some(token) => {
                let token = token?;
                self.line = token.line;
                Ok(Some(token))
            }
        }
    }

    /// Pulls the next token and fails with `error` unless it is one of `accepted`.
    fn expect(&mut self, accepted: &[TokenKind], error: CueErrorKind) -> CueResult<Token> {
        match self.next_token()? {
            Some(token) if accepted.contains(&token.kind) => Ok(token),
            Some(token) => Err(error.at_line(token.line)),
            None => Err(CueError::UnexpectedEndOfStream {
                expected: accepted
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<_>>()
                    .join(" or "),
                line: self.line,
            }),
        }
    }

    fn expect_eol(&mut self, error: CueErrorKind) -> CueResult<()> {
        self.expect(&[TokenKind::Eol], error).map(|_| ())
    }

    fn skip_to_eol(&mut self) -> CueResult<()> {
        loop {
            match self.next_token()? {
                Some(token) if token.kind == TokenKind::Eol => return Ok(()),
                Some(_) => continue,
                None => {
                    return Err(CueError::UnexpectedEndOfStream {
                        expected: TokenKind::Eol.to_string(),
                        line: self.line,
                    });
                }
            }
        }
    }
}

/// Builds a [`Sheet`] from a token stream such as the one produced by
/// [`tokenize`](crate::cue::lexer::tokenize).
pub fn parse<T>(tokens: T) -> CueResult<Sheet>
where
    T: IntoIterator<Item = CueResult<Token>>,
{
    Parser::new(tokens.into_iter()).parse()
}
