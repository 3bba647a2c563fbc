use crate::cue::error::CueResult;
use crate::cue::lexer::tokenize;
use crate::cue::models::Sheet;
use crate::cue::parser::parse;
use log::debug;
use std::path::Path;

pub mod directive;
pub mod error;
pub mod lexer;
pub mod models;
pub mod parser;
pub mod token;

/// Parses the raw contents of a cue sheet.
pub fn parse_cuesheet(data: &[u8]) -> CueResult<Sheet> {
    parse(tokenize(data))
}

/// Reads and parses the cue sheet at `path`.
///
/// The file is read in full before tokenizing starts, its handle is released
/// once the read returns.
pub async fn read_cuesheet(path: impl AsRef<Path>) -> CueResult<Sheet> {
    let path = path.as_ref();

    debug!("Reading cue sheet: {path:?}");
    let data = tokio::fs::read(path).await?;

    parse_cuesheet(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::error::{CueError, CueErrorKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_cue(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn reads_cue_file_from_disk() {
        let file = write_cue(
            b"\xEF\xBB\xBFCATALOG \"0123456789012\"\r\nFILE \"x.wav\" WAVE\r\nTRACK 01 AUDIO\r\nINDEX 01 00:00:00\r\n",
        );

        let sheet = read_cuesheet(file.path()).await.unwrap();
        assert_eq!(sheet.catalog.as_deref(), Some("0123456789012"));
        assert_eq!(sheet.tracks.len(), 1);
        assert_eq!(sheet.tracks[0].indexes[0].frames(), 0);
    }

    #[tokio::test]
    async fn parse_errors_surface_from_file() {
        let file = write_cue(b"FOO\r\n");

        let err = read_cuesheet(file.path()).await.unwrap_err();
        assert_eq!(err.kind(), CueErrorKind::InvalidTag);
        assert_eq!(err.line(), Some(1));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = read_cuesheet(dir.path().join("missing.cue"))
            .await
            .unwrap_err();
        assert!(matches!(err, CueError::IoError(_)));
    }

    #[test]
    fn lf_and_cr_line_endings_are_equivalent() {
        let crlf = parse_cuesheet(b"TRACK 01 AUDIO\r\nINDEX 01 00:00:00\r\n").unwrap();
        let lf = parse_cuesheet(b"TRACK 01 AUDIO\nINDEX 01 00:00:00\n").unwrap();
        let cr = parse_cuesheet(b"TRACK 01 AUDIO\rINDEX 01 00:00:00\r").unwrap();
        assert_eq!(crlf, lf);
        assert_eq!(crlf, cr);
    }
}
