use crate::detection::Detection;

/// One frame of detector output, in upstream arrival order.
pub struct Frame {
    pub detections: Vec<Detection>,
}

impl Frame {
    #[inline]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}
