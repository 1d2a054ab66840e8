use serde_derive::{Deserialize, Serialize};

use crate::bbox::BBox;
use crate::Position;

/// One detector/tracker output for a single frame.
///
/// `track_id` is the stable identity assigned by the upstream tracker;
/// detections it could not associate carry `None` and are excluded from
/// classification. Class and confidence are passed through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Detection {
    pub bbox: BBox,
    #[serde(rename = "id")]
    pub track_id: Option<u32>,
    #[serde(rename = "c")]
    pub class: i32,
    #[serde(rename = "p")]
    pub confidence: f32,
}

impl Detection {
    #[inline(always)]
    pub fn center(&self) -> Position {
        self.bbox.center()
    }
}
