use serde_derive::{Deserialize, Serialize};

use crate::Position;

/// Left-top-right-bottom box in pixel coordinates, y growing downward.
/// Corners come straight from the upstream detector, x1 <= x2 and y1 <= y2.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct BBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BBox {
    #[inline]
    pub fn ltrb(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Center of the box, truncating division. Degenerate zero-area boxes
    /// still yield a usable center.
    #[inline(always)]
    pub fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    #[inline(always)]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let bbox = BBox::ltrb(90, 90, 110, 130);

        assert_eq!(bbox.center(), Position::new(100, 110));
        assert_eq!(bbox.width(), 20);
        assert_eq!(bbox.height(), 40);
    }

    #[test]
    fn test_zero_area_box_has_center() {
        let bbox = BBox::ltrb(10, 10, 10, 10);

        assert_eq!(bbox.center(), Position::new(10, 10));
        assert_eq!(bbox.width(), 0);
    }
}
