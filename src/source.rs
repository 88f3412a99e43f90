//! Landmark frame sources.
//!
//! The engine consumes frames through the `LandmarkSource` trait. The
//! shipped implementation replays recorded JSON-lines captures, which
//! keeps the camera and hand-tracking stack out of process: anything
//! able to print one frame per line can drive the vehicle.

use crate::landmarks::LandmarkFrame;
use crate::Result;
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Source of per-frame hand landmarks
pub trait LandmarkSource {
    /// Produce the next frame, or `None` at end of stream
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying stream fails.
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>>;
}

/// Replays landmark frames from a JSON-lines stream, one frame per line.
///
/// Lines that fail to decode (bad JSON, wrong landmark count) are logged
/// and replaced with an empty frame, so a corrupt capture line degrades
/// to the no-hands behavior instead of ending the run.
pub struct ReplaySource<R> {
    reader: R,
    line: usize,
}

impl ReplaySource<BufReader<File>> {
    /// Open a JSON-lines capture file
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ReplaySource<R> {
    /// Wrap a buffered reader producing one JSON frame per line
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }
}

impl<R: BufRead> LandmarkSource for ReplaySource<R> {
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>> {
        let mut buf = String::new();

        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = buf.trim();
            if text.is_empty() {
                continue;
            }

            return match serde_json::from_str::<LandmarkFrame>(text) {
                Ok(frame) => Ok(Some(frame)),
                Err(e) => {
                    warn!("Dropping malformed frame on line {}: {}", self.line, e);
                    Ok(Some(LandmarkFrame::default()))
                }
            };
        }
    }
}
