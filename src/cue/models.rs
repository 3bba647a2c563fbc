// src/cue/models
use crate::cd::FRAMES_PER_SECOND;
use num_rational::Ratio;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Sheet {
    pub catalog: Option<String>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Track {
    pub number: u32,
    pub indexes: Vec<Index>,
    pub is_audio: bool,
    pub isrc: Option<String>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Index {
    pub number: u32,
    /// Position in seconds, always a multiple of 1/75.
    pub offset: Ratio<u64>,
}

impl Index {
    pub fn from_frames(number: u32, frames: u64) -> Self {
        Self {
            number,
            offset: Ratio::new(frames, FRAMES_PER_SECOND),
        }
    }

    pub fn frames(&self) -> u64 {
        (self.offset * FRAMES_PER_SECOND).to_integer()
    }
}

impl Track {
    pub fn index(&self, number: u32) -> Option<&Index> {
        self.indexes.iter().find(|i| i.number == number)
    }
}

impl Sheet {
    /// ISRCs keyed by track number, for tracks that have one.
    pub fn isrcs(&self) -> BTreeMap<u32, &str> {
        self.tracks
            .iter()
            .filter_map(|track| Some((track.number, track.isrc.as_deref()?)))
            .collect()
    }

    /// Returns true if the sheet describes a single image, i.e. every index
    /// lies strictly after the one before it across all tracks.
    pub fn is_single_file(&self) -> bool {
        let mut previous: Option<u64> = None;

        for index in self.tracks.iter().flat_map(|t| t.indexes.iter()) {
            let frames = index.frames();
            if previous.is_some_and(|p| frames <= p) {
                return false;
            }
            previous = Some(frames);
        }

        true
    }

    /// Splits a single image of `total_length` PCM frames into per track lengths.
    ///
    /// Each track is measured from its highest numbered index to the next
    /// track's; the last track receives whatever remains. Tracks without
    /// indexes count as starting at zero.
    pub fn pcm_lengths(&self, total_length: u64, sample_rate: u32) -> Vec<u64> {
        let starts: Vec<u64> = self
            .tracks
            .iter()
            .map(|track| {
                track
                    .indexes
                    .iter()
                    .max_by_key(|i| i.number)
                    .map(|i| i.frames())
                    .unwrap_or(0)
            })
            .collect();

        if starts.is_empty() {
            return Vec::new();
        }

        let mut remaining = total_length;
        let mut lengths: Vec<u64> = starts
            .windows(2)
            .map(|pair| {
                let length =
                    pair[1].saturating_sub(pair[0]) * u64::from(sample_rate) / FRAMES_PER_SECOND;
                remaining = remaining.saturating_sub(length);
                length
            })
            .collect();

        lengths.push(remaining);
        lengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(number: u32, offsets: &[(u32, u64)], isrc: Option<&str>) -> Track {
        Track {
            number,
            indexes: offsets
                .iter()
                .map(|(n, frames)| Index::from_frames(*n, *frames))
                .collect(),
            is_audio: true,
            isrc: isrc.map(str::to_string),
        }
    }

    #[test]
    fn index_offset_is_exact() {
        let index = Index::from_frames(1, 150);
        assert_eq!(index.offset, Ratio::from_integer(2));
        assert_eq!(index.frames(), 150);

        let index = Index::from_frames(1, 1);
        assert_eq!(index.offset, Ratio::new(1, 75));
        assert_eq!(index.frames(), 1);
    }

    #[test]
    fn track_index_finds_by_number() {
        let t = track(1, &[(0, 0), (1, 150)], None);
        assert_eq!(t.index(1).map(Index::frames), Some(150));
        assert!(t.index(2).is_none());
    }

    #[test]
    fn isrcs_skips_tracks_without_one() {
        let sheet = Sheet {
            catalog: None,
            tracks: vec![
                track(1, &[], Some("USRC17607839")),
                track(2, &[], None),
                track(3, &[], Some("GBAYE0000001")),
            ],
        };

        let isrcs = sheet.isrcs();
        assert_eq!(isrcs.len(), 2);
        assert_eq!(isrcs.get(&1), Some(&"USRC17607839"));
        assert_eq!(isrcs.get(&3), Some(&"GBAYE0000001"));
    }

    #[test]
    fn single_file_when_indexes_increase() {
        let sheet = Sheet {
            catalog: None,
            tracks: vec![
                track(1, &[(1, 0)], None),
                track(2, &[(0, 1000), (1, 1150)], None),
            ],
        };
        assert!(sheet.is_single_file());
        assert!(Sheet::default().is_single_file());
    }

    #[test]
    fn not_single_file_when_offsets_restart() {
        let sheet = Sheet {
            catalog: None,
            tracks: vec![track(1, &[(1, 0)], None), track(2, &[(1, 0)], None)],
        };
        assert!(!sheet.is_single_file());
    }

    #[test]
    fn pcm_lengths_split_image() {
        let sheet = Sheet {
            catalog: None,
            tracks: vec![
                track(1, &[(1, 0)], None),
                track(2, &[(0, 70), (1, 75)], None),
                track(3, &[(1, 225)], None),
            ],
        };

        // 44100 Hz: 75 frames = 1 second, 150 frames = 2 seconds
        assert_eq!(
            sheet.pcm_lengths(44100 * 10, 44100),
            vec![44100, 88200, 44100 * 7]
        );
        assert!(Sheet::default().pcm_lengths(1000, 44100).is_empty());
    }
}
