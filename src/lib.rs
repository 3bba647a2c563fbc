//! Reader for CUE sheets describing the track and index layout of audio disc images.
//!
//! ```no_run
//! # async fn run() -> cue_converto::CueResult<()> {
//! let sheet = cue_converto::read_cuesheet("album.cue").await?;
//! for track in &sheet.tracks {
//!     println!("{} {:?}", track.number, track.isrc);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cd;
pub mod cue;

pub use cue::error::{CueError, CueErrorKind, CueResult};
pub use cue::lexer::tokenize;
pub use cue::models::{Index, Sheet, Track};
pub use cue::parser::parse;
pub use cue::{parse_cuesheet, read_cuesheet};
