use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error("Invalid token at byte offset {offset}")]
    InvalidToken { offset: usize },

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Missing tag at line {line}")]
    MissingTag { line: usize },

    #[error("Invalid tag {tag} at line {line}")]
    InvalidTag { tag: String, line: usize },

    #[error("Invalid track number at line {line}")]
    InvalidTrackNumber { line: usize },

    #[error("Invalid track type at line {line}")]
    InvalidTrackType { line: usize },

    #[error("Missing filename at line {line}")]
    MissingFilename { line: usize },

    #[error("Missing file type at line {line}")]
    MissingFileType { line: usize },

    #[error("Missing value at line {line}")]
    MissingValue { line: usize },

    #[error("Invalid flag at line {line}")]
    InvalidFlag { line: usize },

    #[error("Invalid timestamp at line {line}")]
    InvalidTimestamp { line: usize },

    #[error("Invalid index number at line {line}")]
    InvalidIndexNumber { line: usize },

    #[error("Excess data at line {line}")]
    ExcessData { line: usize },

    #[error("Invalid data at line {line}")]
    InvalidData { line: usize },

    #[error("Unexpected end of cue sheet after line {line}, expected {expected}")]
    UnexpectedEndOfStream { expected: String, line: usize },
}

/// Fieldless discriminant of [`CueError`], used where a failure is described
/// before the line it happens on is known.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CueErrorKind {
    InvalidToken,
    IoError,
    MissingTag,
    InvalidTag,
    InvalidTrackNumber,
    InvalidTrackType,
    MissingFilename,
    MissingFileType,
    MissingValue,
    InvalidFlag,
    InvalidTimestamp,
    InvalidIndexNumber,
    ExcessData,
    InvalidData,
    UnexpectedEndOfStream,
}

impl CueErrorKind {
    /// Builds the error for a kind that only carries a line number.
    ///
    /// Kinds with a different payload (`InvalidToken`, `IoError`, `InvalidTag`,
    /// `UnexpectedEndOfStream`) are never produced by a plain token mismatch and
    /// fall back to `ExcessData`.
    pub fn at_line(self, line: usize) -> CueError {
        match self {
            CueErrorKind::MissingTag => CueError::MissingTag { line },
            CueErrorKind::InvalidTrackNumber => CueError::InvalidTrackNumber { line },
            CueErrorKind::InvalidTrackType => CueError::InvalidTrackType { line },
            CueErrorKind::MissingFilename => CueError::MissingFilename { line },
            CueErrorKind::MissingFileType => CueError::MissingFileType { line },
            CueErrorKind::MissingValue => CueError::MissingValue { line },
            CueErrorKind::InvalidFlag => CueError::InvalidFlag { line },
            CueErrorKind::InvalidTimestamp => CueError::InvalidTimestamp { line },
            CueErrorKind::InvalidIndexNumber => CueError::InvalidIndexNumber { line },
            CueErrorKind::InvalidData => CueError::InvalidData { line },
            CueErrorKind::ExcessData
            | CueErrorKind::InvalidToken
            | CueErrorKind::IoError
            | CueErrorKind::InvalidTag
            | CueErrorKind::UnexpectedEndOfStream => CueError::ExcessData { line },
        }
    }
}

impl CueError {
    pub fn kind(&self) -> CueErrorKind {
        match self {
            CueError::InvalidToken { .. } => CueErrorKind::InvalidToken,
            CueError::IoError(_) => CueErrorKind::IoError,
            CueError::MissingTag { .. } => CueErrorKind::MissingTag,
            CueError::InvalidTag { .. } => CueErrorKind::InvalidTag,
            CueError::InvalidTrackNumber { .. } => CueErrorKind::InvalidTrackNumber,
            CueError::InvalidTrackType { .. } => CueErrorKind::InvalidTrackType,
            CueError::MissingFilename { .. } => CueErrorKind::MissingFilename,
            CueError::MissingFileType { .. } => CueErrorKind::MissingFileType,
            CueError::MissingValue { .. } => CueErrorKind::MissingValue,
            CueError::InvalidFlag { .. } => CueErrorKind::InvalidFlag,
            CueError::InvalidTimestamp { .. } => CueErrorKind::InvalidTimestamp,
            CueError::InvalidIndexNumber { .. } => CueErrorKind::InvalidIndexNumber,
            CueError::ExcessData { .. } => CueErrorKind::ExcessData,
            CueError::InvalidData { .. } => CueErrorKind::InvalidData,
            CueError::UnexpectedEndOfStream { .. } => CueErrorKind::UnexpectedEndOfStream,
        }
    }

    /// Source line the failure was detected on, if the kind carries one.
    pub fn line(&self) -> Option<usize> {
        match self {
            CueError::InvalidToken { .. } | CueError::IoError(_) => None,
            CueError::MissingTag { line }
            | CueError::InvalidTag { line, .. }
            | CueError::InvalidTrackNumber { line }
            | CueError::InvalidTrackType { line }
            | CueError::MissingFilename { line }
            | CueError::MissingFileType { line }
            | CueError::MissingValue { line }
            | CueError::InvalidFlag { line }
            | CueError::InvalidTimestamp { line }
            | CueError::InvalidIndexNumber { line }
            | CueError::ExcessData { line }
            | CueError::InvalidData { line }
            | CueError::UnexpectedEndOfStream { line, .. } => Some(*line),
        }
    }
}

pub type CueResult<T> = Result<T, CueError>;
