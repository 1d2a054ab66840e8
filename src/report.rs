use serde_derive::Serialize;

use crate::Position;

/// Outcome of the direction test for one track on one frame.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Conforming,
    WrongDirection,
}

/// Per-track classification handed to the rendering collaborator.
///
/// `position` anchors the annotation, `class` is the detector class id
/// passed through untouched. Tracks skipped on a frame (no identity, no
/// prior position, sub-threshold movement) produce no report at all.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub track_id: u32,
    pub position: Position,
    pub class: i32,
    pub verdict: Verdict,
}
