//! File-based tests for the JSON-lines replay source


use gesture_drive::landmarks::Handedness;
use gesture_drive::source::{LandmarkSource, ReplaySource};
use std::fs;
use std::path::PathBuf;
use test_helpers::{both_hands_frame, hand_with_pattern, steering_frame, FORWARD, LEFT};

/// Unique scratch file per test, removed on drop
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(name: &str, content: &str) -> Self {
        let path = std::env::temp_dir().join(format!("gesture-drive-{}-{}", std::process::id(), name));
        fs::write(&path, content).expect("write scratch capture");
        Self(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        fs::remove_file(&self.0).ok();
    }
}

#[test]
fn test_replays_serialized_frames() {
    let frames = vec![
        steering_frame(FORWARD),
        both_hands_frame(LEFT, hand_with_pattern([true; 5])),
    ];
    let lines: Vec<String> = frames
        .iter()
        .map(|f| serde_json::to_string(f).expect("serialize frame"))
        .collect();
    let scratch = ScratchFile::new("roundtrip.jsonl", &format!("{}\n", lines.join("\n")));

    let mut source = ReplaySource::from_path(&scratch.0).expect("open capture");

    let first = source.next_frame().unwrap().expect("first frame");
    assert_eq!(first, frames[0]);
    assert_eq!(first.hands[0].handedness, Handedness::Right);

    let second = source.next_frame().unwrap().expect("second frame");
    assert_eq!(second, frames[1]);
    assert_eq!(second.hands.len(), 2);

    assert!(source.next_frame().unwrap().is_none());
}

#[test]
fn test_corrupt_line_degrades_to_empty_frame() {
    let good = serde_json::to_string(&steering_frame(FORWARD)).unwrap();
    let content = format!("{}\n{{\"hands\": [{{\"handedness\"\n{}\n", good, good);
    let scratch = ScratchFile::new("corrupt.jsonl", &content);

    let mut source = ReplaySource::from_path(&scratch.0).expect("open capture");

    assert_eq!(source.next_frame().unwrap().unwrap().hands.len(), 1);
    // The truncated middle line becomes a no-hands frame
    assert!(source.next_frame().unwrap().unwrap().hands.is_empty());
    assert_eq!(source.next_frame().unwrap().unwrap().hands.len(), 1);
    assert!(source.next_frame().unwrap().is_none());
}

#[test]
fn test_empty_capture_ends_immediately() {
    let scratch = ScratchFile::new("empty.jsonl", "");

    let mut source = ReplaySource::from_path(&scratch.0).expect("open capture");
    assert!(source.next_frame().unwrap().is_none());
}
