// src/cd/mod.rs
pub const FRAMES_PER_SECOND: u64 = 75;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Converts a `mm:ss:ff` position into an absolute frame count.
pub fn msf_to_frames(minutes: u64, seconds: u64, frames: u64) -> u64 {
    (minutes * SECONDS_PER_MINUTE + seconds) * FRAMES_PER_SECOND + frames
}

/// Splits an absolute frame count back into `(minutes, seconds, frames)`.
pub fn frames_to_msf(total: u64) -> (u64, u64, u64) {
    let minutes = total / FRAMES_PER_SECOND / SECONDS_PER_MINUTE;
    let seconds = total / FRAMES_PER_SECOND % SECONDS_PER_MINUTE;
    let frames = total % FRAMES_PER_SECOND;
    (minutes, seconds, frames)
}
